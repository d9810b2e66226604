//! An in-process identity provider for the walkthrough.
//!
//! Unlike a real hosted provider it keeps accounts in a HashMap, but it
//! pushes auth-state events the same way: every successful sign-in/out is
//! reported asynchronously on the subscription channel, never returned as
//! session state from the call itself.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::mpsc;

use auth_session::{AuthStateEvent, IdentityProvider, Principal, ProfileUpdate, ProviderError};

struct Account {
    password: String,
    principal: Principal,
}

#[derive(Default)]
pub struct StubIdentityProvider {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<String>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthStateEvent>>>,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn broadcast(&self, event: AuthStateEvent) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
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
            Account {
                password: password.to_string(),
                principal: principal.clone(),
            },
        );
        drop(accounts);

        *self.current.lock().unwrap() = Some(email.to_string());
        self.broadcast(AuthStateEvent::SignedIn(principal.clone()));
        Ok(principal)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ProviderError> {
        let current = self.current.lock().unwrap().clone();
        let Some(email) = current else {
            return Err(ProviderError::new("auth/no-current-user"));
        };

        let principal = {
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
            account.principal.clone()
        };

        // A hosted provider would refresh the principal on its stream.
        self.broadcast(AuthStateEvent::SignedIn(principal));
        Ok(())
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderError> {
        let principal = {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(email) {
                Some(account) if account.password == password => account.principal.clone(),
                _ => return Err(ProviderError::new("auth/invalid-credential")),
            }
        };

        *self.current.lock().unwrap() = Some(email.to_string());
        self.broadcast(AuthStateEvent::SignedIn(principal.clone()));
        Ok(principal)
    }

    async fn federated_sign_in(&self) -> Result<Principal, ProviderError> {
        let principal = Principal {
            uid: "uid-google".to_string(),
            email: "walkthrough@gmail.example".to_string(),
            display_name: Some("Walkthrough User".to_string()),
            photo_url: Some("https://example.com/avatar.png".to_string()),
        };
        *self.current.lock().unwrap() = Some(principal.email.clone());
        self.broadcast(AuthStateEvent::SignedIn(principal.clone()));
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        *self.current.lock().unwrap() = None;
        self.broadcast(AuthStateEvent::SignedOut);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError> {
        if self.accounts.lock().unwrap().contains_key(email) {
            tracing::info!("(stub) password reset email dispatched to {email}");
            Ok(())
        } else {
            Err(ProviderError::new("auth/user-not-found"))
        }
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthStateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
