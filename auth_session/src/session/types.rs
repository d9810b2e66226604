use serde::{Deserialize, Serialize};

use crate::provider::Principal;
use crate::session::errors::SessionError;
use crate::storage::MirrorData;

/// The locally held view of the current principal.
///
/// Serialized into the mirror with the provider's original field spelling so
/// a mirror written by the previous implementation restores cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<&Principal> for Session {
    fn from(principal: &Principal) -> Self {
        Self {
            email: principal.email.clone(),
            display_name: principal.display_name.clone().unwrap_or_default(),
            photo_url: principal.photo_url.clone(),
        }
    }
}

impl From<Session> for MirrorData {
    fn from(session: Session) -> Self {
        Self {
            value: serde_json::to_string(&session).expect("Failed to serialize Session"),
        }
    }
}

impl TryFrom<MirrorData> for Session {
    type Error = SessionError;

    fn try_from(data: MirrorData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::MirrorDecode(e.to_string()))
    }
}

/// Authentication state published by the observer.
///
/// `Unknown` covers the window between startup and the provider's first
/// report; it reads as "no current user" but is distinct from an explicit
/// `SignedOut`, so consumers can avoid flashing unauthenticated UI before
/// the provider has spoken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
