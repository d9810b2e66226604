use std::sync::LazyLock;

/// Name of the slot in the mirror store that holds the serialized session.
pub static SESSION_MIRROR_KEY: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_MIRROR_KEY")
        .ok()
        .unwrap_or("user".to_string())
});

/// Route every successful sign-in/registration navigates to.
pub static HOME_ROUTE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("HOME_ROUTE").ok().unwrap_or("/".to_string())
});
