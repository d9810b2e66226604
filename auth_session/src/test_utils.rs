//! Shared test doubles: a scripted identity provider and a recording
//! navigation/notification surface.
//!
//! The fake provider never emits auth-state events on its own; tests drive
//! the stream explicitly through [`FakeIdentityProvider::emit`]. That keeps
//! the single-writer assertions deterministic: an operation call can never
//! move session state behind the test's back.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::mpsc;

use crate::provider::{AuthStateEvent, IdentityProvider, Principal, ProfileUpdate, ProviderError};
use crate::surface::{Navigator, NoticeLevel, Notifier};

struct FakeAccount {
    password: String,
    principal: Principal,
}

#[derive(Default)]
pub struct FakeIdentityProvider {
    accounts: Mutex<HashMap<String, FakeAccount>>,
    current: Mutex<Option<String>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthStateEvent>>>,
    sign_out_failure: Mutex<Option<ProviderError>>,
    federated_outcome: Mutex<Option<Result<Principal, ProviderError>>>,
    reset_failure: Mutex<Option<ProviderError>>,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one event to every live subscriber, as the real provider's
    /// auth-state stream would.
    pub fn emit(&self, event: AuthStateEvent) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Look up the principal the provider holds for an email.
    pub fn principal_for(&self, email: &str) -> Option<Principal> {
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .map(|a| a.principal.clone())
    }

    pub fn fail_sign_out(&self, message: &str) {
        *self.sign_out_failure.lock().unwrap() = Some(ProviderError::new(message));
    }

    pub fn script_federated(&self, outcome: Result<Principal, ProviderError>) {
        *self.federated_outcome.lock().unwrap() = Some(outcome);
    }

    pub fn fail_password_reset(&self, message: &str) {
        *self.reset_failure.lock().unwrap() = Some(ProviderError::new(message));
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(ProviderError::new("auth/email-already-in-use"));
        }

        let principal = Principal {
            uid: format!("uid-{}", accounts.len() + 1),
            email: email.to_string(),
            display_name: None,
            photo_url: None,
        };
        accounts.insert(
            email.to_string(),
            FakeAccount {
                password: password.to_string(),
                principal: principal.clone(),
            },
        );
        *self.current.lock().unwrap() = Some(email.to_string());
        Ok(principal)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ProviderError> {
        let current = self.current.lock().unwrap().clone();
        let Some(email) = current else {
            return Err(ProviderError::new("auth/no-current-user"));
        };

        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .get_mut(&email)
            .ok_or_else(|| ProviderError::new("auth/user-not-found"))?;
        if update.display_name.is_some() {
            account.principal.display_name = update.display_name;
        }
        if update.photo_url.is_some() {
            account.principal.photo_url = update.photo_url;
        }
        Ok(())
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError> {
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some(account) if account.password == password => {
                let principal = account.principal.clone();
                drop(accounts);
                *self.current.lock().unwrap() = Some(email.to_string());
                Ok(principal)
            }
            _ => Err(ProviderError::new("auth/invalid-credential")),
        }
    }

    async fn federated_sign_in(&self) -> Result<Principal, ProviderError> {
        if let Some(outcome) = self.federated_outcome.lock().unwrap().take() {
            if let Ok(principal) = &outcome {
                *self.current.lock().unwrap() = Some(principal.email.clone());
            }
            return outcome;
        }

        let principal = Principal {
            uid: "uid-federated".to_string(),
            email: "federated@example.com".to_string(),
            display_name: Some("Federated User".to_string()),
            photo_url: Some("https://example.com/avatar.png".to_string()),
        };
        *self.current.lock().unwrap() = Some(principal.email.clone());
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        *self.current.lock().unwrap() = None;
        match self.sign_out_failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn send_password_reset(&self, _email: &str) -> Result<(), ProviderError> {
        match self.reset_failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthStateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}

/// Records navigations and notices for assertions.
#[derive(Default)]
pub struct RecordingSurface {
    navigations: Mutex<Vec<String>>,
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Navigator for RecordingSurface {
    fn navigate_to(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.to_string());
    }
}

impl Notifier for RecordingSurface {
    fn notify_success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((NoticeLevel::Success, message.to_string()));
    }

    fn notify_warning(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((NoticeLevel::Warning, message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((NoticeLevel::Error, message.to_string()));
    }
}
