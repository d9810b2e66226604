use thiserror::Error;

/// Failure surfaced by the identity provider.
///
/// The provider's error taxonomy is its own business; this layer carries the
/// message through verbatim and never classifies it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
