use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, watch};

use crate::config::{HOME_ROUTE, SESSION_MIRROR_KEY};
use crate::provider::{AuthStateEvent, IdentityProvider, ProfileUpdate};
use crate::session::types::{AuthState, Session};
use crate::storage::MirrorStore;
use crate::surface::{Navigator, Notifier};

type SharedMirror = Arc<Mutex<Box<dyn MirrorStore>>>;

/// The session context: five authentication operations plus the cached view
/// of the current principal.
///
/// Cheap to share (`Arc<SessionController>` is the read-many context value);
/// the method set is stable for the controller's lifetime. Session state is
/// written only by the observer task spawned at construction — the
/// operations trigger provider calls and UI side effects, and the resulting
/// state change always flows back through the provider's auth-state stream.
pub struct SessionController {
    provider: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: watch::Receiver<AuthState>,
}

impl SessionController {
    /// Build the controller: seed the initial state from the persisted
    /// mirror (parse-or-nothing, never an error), subscribe to the
    /// provider's auth-state stream and spawn the observer task that owns
    /// the state writer for the rest of the controller's life.
    pub async fn connect(
        provider: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        mirror: SharedMirror,
    ) -> Arc<Self> {
        let initial = seed_from_mirror(&mirror).await;
        let (state_tx, state_rx) = watch::channel(initial);

        let events = provider.subscribe();
        tokio::spawn(run_observer(events, state_tx, mirror));

        Arc::new(Self {
            provider,
            navigator,
            notifier,
            state: state_rx,
        })
    }

    /// Current session, or `None` when signed out or not yet determined.
    pub fn current_user(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    /// The full three-valued state, including `Unknown`.
    pub fn auth_state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// A receiver for reacting to state transitions.
    pub fn watch(&self) -> watch::Receiver<AuthState> {
        self.state.clone()
    }

    /// Create an account, attach the display name to the new principal, then
    /// navigate home and notify. Any failure aborts the remaining steps and
    /// surfaces the provider's message.
    pub async fn register(&self, email: &str, password: &str, display_name: &str) {
        let outcome = async {
            let principal = self.provider.create_account(email, password).await?;
            tracing::debug!("created account for {}", principal.email);
            self.provider
                .update_profile(ProfileUpdate {
                    display_name: Some(display_name.to_string()),
                    ..ProfileUpdate::default()
                })
                .await
        };

        match outcome.await {
            Ok(()) => {
                self.navigator.navigate_to(HOME_ROUTE.as_str());
                self.notifier.notify_success("Registered successfully!");
            }
            Err(err) => self.notifier.notify_error(&err.message),
        }
    }

    /// Sign in an existing account with email/password credentials.
    pub async fn sign_in(&self, email: &str, password: &str) {
        match self.provider.verify_credentials(email, password).await {
            Ok(principal) => {
                tracing::debug!("verified credentials for {}", principal.email);
                self.navigator.navigate_to(HOME_ROUTE.as_str());
                self.notifier.notify_success("Logged in successfully!");
            }
            Err(err) => self.notifier.notify_error(&err.message),
        }
    }

    /// End the provider-side session. The provider call is fire-and-forget:
    /// its failure is logged but never surfaced, and the notice is emitted
    /// unconditionally. Clearing of the cached state happens when the
    /// provider's stream reports the sign-out.
    pub async fn log_out(&self) {
        if let Err(err) = self.provider.sign_out().await {
            tracing::debug!("provider sign-out failed: {err}");
        }
        self.notifier.notify_success("Logged out successfully!");
    }

    /// Run the provider's interactive federated sign-in flow. Failures are
    /// logged but not notified; the user already saw the provider's own
    /// consent UI close.
    pub async fn sign_in_with_provider(&self) {
        match self.provider.federated_sign_in().await {
            Ok(principal) => {
                tracing::debug!("federated sign-in as {}", principal.email);
                self.navigator.navigate_to(HOME_ROUTE.as_str());
                self.notifier.notify_success("Logged in successfully!");
            }
            Err(err) => tracing::warn!("federated sign-in failed: {err}"),
        }
    }

    /// Request a password-reset email. Success is a warning-level notice:
    /// nothing has changed yet, the user still has to act on the mail.
    pub async fn forgot_password(&self, email: &str) {
        match self.provider.send_password_reset(email).await {
            Ok(()) => self.notifier.notify_warning("Please check your mail box!"),
            Err(err) => self.notifier.notify_error(&err.message),
        }
    }
}

/// Best-effort restore of the last known session. A missing, unreadable or
/// corrupt mirror yields `Unknown`, never an error.
async fn seed_from_mirror(mirror: &SharedMirror) -> AuthState {
    let slot = match mirror.lock().await.get(SESSION_MIRROR_KEY.as_str()).await {
        Ok(slot) => slot,
        Err(err) => {
            tracing::warn!("Failed to read session mirror: {err}");
            return AuthState::Unknown;
        }
    };

    match slot {
        Some(data) => match Session::try_from(data) {
            Ok(session) => AuthState::SignedIn(session),
            Err(err) => {
                tracing::warn!("Discarding corrupt session mirror: {err}");
                AuthState::Unknown
            }
        },
        None => AuthState::Unknown,
    }
}

/// The single writer of session state and the persisted mirror.
///
/// The mirror is updated before the state is published, so a reader woken by
/// a state change always finds the two in agreement.
async fn run_observer(
    mut events: mpsc::UnboundedReceiver<AuthStateEvent>,
    state: watch::Sender<AuthState>,
    mirror: SharedMirror,
) {
    while let Some(event) = events.recv().await {
        match event {
            AuthStateEvent::SignedIn(principal) => {
                let session = Session::from(&principal);
                if let Err(err) = mirror
                    .lock()
                    .await
                    .put(SESSION_MIRROR_KEY.as_str(), session.clone().into())
                    .await
                {
                    tracing::error!("Failed to persist session mirror: {err}");
                }
                tracing::debug!("auth state: signed in as {}", session.email);
                state.send_replace(AuthState::SignedIn(session));
            }
            AuthStateEvent::SignedOut => {
                if let Err(err) = mirror.lock().await.clear().await {
                    tracing::error!("Failed to clear session mirror: {err}");
                }
                tracing::debug!("auth state: signed out");
                state.send_replace(AuthState::SignedOut);
            }
        }
    }
    tracing::debug!("auth state stream closed; observer exiting");
}
