//! auth-session - Session context layer for a hosted identity provider
//!
//! This crate wraps an external identity capability (account creation,
//! credential verification, federated sign-in, password reset) and keeps a
//! locally cached view of "who is signed in", restored from and mirrored
//! into a pluggable session-scoped store. All external collaborators are
//! injected as traits; the only writer of the cached state is the
//! auth-state observer task.

mod config;
mod provider;
mod session;
mod storage;
mod surface;

#[cfg(test)]
mod test_utils;

pub use config::{HOME_ROUTE, SESSION_MIRROR_KEY};

pub use provider::{
    AuthStateEvent, IdentityProvider, Principal, ProfileUpdate, ProviderError,
};

pub use session::{AuthState, Session, SessionController, SessionError};

pub use storage::{InMemoryMirrorStore, MirrorData, MirrorStore, StorageError, mirror_store_from_env};

pub use surface::{Navigator, NoticeLevel, Notifier};
