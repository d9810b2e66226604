use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::errors::ProviderError;

/// The provider's representation of an authenticated account.
///
/// Carries more than this crate keeps; the session layer projects it down to
/// the fields it actually exposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial profile update applied to the currently authenticated principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// One event on the provider's authentication-state stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStateEvent {
    SignedIn(Principal),
    SignedOut,
}

/// The external identity capability.
///
/// Every method is a single remote call; success and failure semantics are
/// the provider's. Implementations must be safe to share across tasks.
#[async_trait]
pub trait IdentityProvider: Send + Sync + 'static {
    /// Create a new account from email/password credentials.
    async fn create_account(&self, email: &str, password: &str)
    -> Result<Principal, ProviderError>;

    /// Apply a profile update to the currently authenticated principal.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ProviderError>;

    /// Verify email/password credentials for an existing account.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError>;

    /// Run the provider's interactive federated sign-in flow (popup-style
    /// consent with a social identity provider).
    async fn federated_sign_in(&self) -> Result<Principal, ProviderError>;

    /// End the provider-side session for the current principal.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Dispatch a password-reset email for the given address.
    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError>;

    /// Subscribe to the authentication-state stream. The provider pushes one
    /// event whenever the authenticated principal changes; the receiver stays
    /// live for the subscriber's lifetime.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthStateEvent>;
}
