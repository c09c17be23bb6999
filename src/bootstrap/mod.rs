//! Process bootstrap: logging, configuration, adapter wiring.
//! 进程启动：日志、配置、适配器装配

pub mod config;
pub mod tracing;
pub mod wiring;
