mod errors;
mod types;

pub use errors::ProviderError;
pub use types::{AuthStateEvent, IdentityProvider, Principal, ProfileUpdate};
