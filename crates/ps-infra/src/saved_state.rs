//! Saved navigation state
//! 保存的导航参数

use std::collections::HashMap;

use ps_core::ports::NavigationArgsPort;

/// Key/value navigation parameters of one screen instance.
#[derive(Debug, Clone, Default)]
pub struct SavedStateHandle {
    values: HashMap<String, String>,
}

impl SavedStateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`, handy when navigating.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

impl NavigationArgsPort for SavedStateHandle {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
