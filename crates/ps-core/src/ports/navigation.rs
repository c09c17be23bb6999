//! Navigation arguments port
//!
//! Read-only view of the parameters a screen was navigated to with.

/// Saved navigation parameters of a screen.
/// 屏幕的导航参数
pub trait NavigationArgsPort: Send + Sync {
    /// Get a parameter by name. Absent parameters are `None`, never an error.
    fn get(&self, name: &str) -> Option<String>;
}
