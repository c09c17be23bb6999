//! Screen state holders
//! 屏幕状态持有者

pub mod episode;
