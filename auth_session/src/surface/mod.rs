//! View-layer capabilities consumed by the session controller.
//!
//! Both are fire-and-forget UI effects, so the traits stay synchronous;
//! implementations dispatch into whatever rendering layer hosts them.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Routing capability: move the application to another path.
pub trait Navigator: Send + Sync + 'static {
    fn navigate_to(&self, path: &str);
}

/// User-facing notification capability (toast-style).
pub trait Notifier: Send + Sync + 'static {
    fn notify_success(&self, message: &str);
    fn notify_warning(&self, message: &str);
    fn notify_error(&self, message: &str);
}
