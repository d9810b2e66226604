mod controller;
mod errors;
mod types;

pub use controller::SessionController;
pub use errors::SessionError;
pub use types::{AuthState, Session};
