use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_session::{
    AuthState, Navigator, Notifier, SessionController, mirror_store_from_env,
};

mod provider;

use crate::provider::StubIdentityProvider;

/// Prints what a browser shell would render as route changes and toasts.
struct ConsoleSurface;

impl Navigator for ConsoleSurface {
    fn navigate_to(&self, path: &str) {
        println!("  [navigate] -> {path}");
    }
}

impl Notifier for ConsoleSurface {
    fn notify_success(&self, message: &str) {
        println!("  [success]  {message}");
    }

    fn notify_warning(&self, message: &str) {
        println!("  [warning]  {message}");
    }

    fn notify_error(&self, message: &str) {
        println!("  [error]    {message}");
    }
}

fn describe(state: &AuthState) -> String {
    match state {
        AuthState::Unknown => "not yet determined".to_string(),
        AuthState::SignedOut => "signed out".to_string(),
        AuthState::SignedIn(session) => {
            format!("signed in as {} <{}>", session.display_name, session.email)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = Arc::new(StubIdentityProvider::new());
    let surface = Arc::new(ConsoleSurface);
    let mirror = Arc::new(Mutex::new(mirror_store_from_env()?));

    let controller = SessionController::connect(
        provider.clone(),
        surface.clone(),
        surface.clone(),
        mirror,
    )
    .await;
    let mut state = controller.watch();

    println!("session: {}", describe(&controller.auth_state()));

    println!("\n== register ==");
    controller
        .register("alice@example.com", "pw123456", "Alice")
        .await;
    state
        .wait_for(|s| s.session().is_some_and(|u| u.display_name == "Alice"))
        .await?;
    println!("session: {}", describe(&controller.auth_state()));

    println!("\n== log out ==");
    controller.log_out().await;
    state.wait_for(|s| *s == AuthState::SignedOut).await?;
    println!("session: {}", describe(&controller.auth_state()));

    println!("\n== sign in with a wrong password ==");
    controller.sign_in("alice@example.com", "wrong").await;
    println!("session: {}", describe(&controller.auth_state()));

    println!("\n== sign in ==");
    controller.sign_in("alice@example.com", "pw123456").await;
    state.wait_for(|s| s.is_signed_in()).await?;
    println!("session: {}", describe(&controller.auth_state()));

    println!("\n== forgot password ==");
    controller.forgot_password("alice@example.com").await;

    Ok(())
}
