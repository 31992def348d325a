//! One-shot bootstrap of the platform's identity SDK.
//!
//! The SDK is callback-based: it loads asynchronously, announces
//! readiness through a global hook, and reports login state through
//! callbacks. [`Session`] hides all of that behind plain futures that
//! resolve exactly once, and memoizes initialization so the SDK is
//! loaded at most once per handle regardless of how many callers race
//! on startup.

use catalog_core::{AuthResponse, LoginStatus};
use thiserror::Error;
use tokio::sync::{OnceCell, oneshot};
use tracing::instrument;

/// Scopes requested at login.
pub const LOGIN_SCOPE: &str = "catalog_management,business_management,pages_show_list";

/// Errors that can occur during session bootstrap.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The SDK script failed to load or its init hook threw.
    #[error("Identity SDK failed to load: {0}")]
    SdkLoad(String),

    /// A status/login/logout call was issued before `initialize`
    /// completed successfully.
    #[error("Identity SDK not initialized")]
    NotInitialized,
}

/// Callback to signal SDK readiness.
pub type ReadyCallback = Box<dyn FnOnce(Result<(), AuthError>) + Send>;
/// Callback carrying a login status.
pub type StatusCallback = Box<dyn FnOnce(LoginStatus) + Send>;
/// Callback signalling plain completion.
pub type DoneCallback = Box<dyn FnOnce() + Send>;

/// The identity SDK boundary.
///
/// Models the platform's callback-style JavaScript SDK: an async
/// script load followed by `init`, then status/login/logout calls that
/// answer through callbacks. Implementations must invoke each callback
/// exactly once. Keeping this a trait confines a future SDK swap to
/// one adapter.
pub trait IdentityProvider: Send + Sync {
    /// Load the SDK and run `init(app_id, cookie, xfbml, version)`,
    /// reporting the outcome through `on_ready`.
    fn load_sdk(&self, app_id: &str, on_ready: ReadyCallback);

    /// Query the current login state.
    fn login_status(&self, on_status: StatusCallback);

    /// Prompt for login with the given scopes.
    fn login(&self, scope: &str, on_status: StatusCallback);

    /// End the platform session.
    fn logout(&self, on_done: DoneCallback);
}

/// A bootstrapped identity session.
///
/// Owns the one process-wide memoized initialization handle from the
/// design: `initialize` runs the provider's `load_sdk` at most once,
/// and every caller - concurrent or repeated - observes that single
/// outcome. A failed load is terminal for this handle; a fresh handle
/// (or process) retries cleanly.
pub struct Session<P> {
    provider: P,
    init: OnceCell<Result<(), AuthError>>,
}

impl<P: IdentityProvider> Session<P> {
    /// Wrap an identity provider in an uninitialized session.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            init: OnceCell::new(),
        }
    }

    /// Initialize the SDK, memoizing the first attempt.
    ///
    /// # Errors
    ///
    /// [`AuthError::SdkLoad`] when the script fails to load; repeated
    /// calls return the same memoized outcome.
    #[instrument(skip(self))]
    pub async fn initialize(&self, app_id: &str) -> Result<(), AuthError> {
        self.init
            .get_or_init(|| async {
                let (tx, rx) = oneshot::channel();
                self.provider.load_sdk(
                    app_id,
                    Box::new(move |outcome| {
                        // A second invocation would hit the closed
                        // channel; FnOnce rules it out statically.
                        let _ = tx.send(outcome);
                    }),
                );
                rx.await.unwrap_or_else(|_| {
                    Err(AuthError::SdkLoad(
                        "SDK dropped the ready callback".to_string(),
                    ))
                })
            })
            .await
            .clone()
    }

    /// Check the current login status.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotInitialized`] before a successful `initialize`.
    pub async fn status(&self) -> Result<LoginStatus, AuthError> {
        self.ensure_ready()?;
        let (tx, rx) = oneshot::channel();
        self.provider.login_status(Box::new(move |status| {
            let _ = tx.send(status);
        }));
        rx.await
            .map_err(|_| AuthError::SdkLoad("SDK dropped the status callback".to_string()))
    }

    /// Prompt the user to log in with [`LOGIN_SCOPE`].
    ///
    /// # Errors
    ///
    /// [`AuthError::NotInitialized`] before a successful `initialize`.
    pub async fn login(&self) -> Result<LoginStatus, AuthError> {
        self.ensure_ready()?;
        let (tx, rx) = oneshot::channel();
        self.provider.login(
            LOGIN_SCOPE,
            Box::new(move |status| {
                let _ = tx.send(status);
            }),
        );
        rx.await
            .map_err(|_| AuthError::SdkLoad("SDK dropped the login callback".to_string()))
    }

    /// End the platform session.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotInitialized`] before a successful `initialize`.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.ensure_ready()?;
        let (tx, rx) = oneshot::channel();
        self.provider.logout(Box::new(move || {
            let _ = tx.send(());
        }));
        rx.await
            .map_err(|_| AuthError::SdkLoad("SDK dropped the logout callback".to_string()))
    }

    fn ensure_ready(&self) -> Result<(), AuthError> {
        match self.init.get() {
            Some(Ok(())) => Ok(()),
            Some(Err(err)) => Err(err.clone()),
            None => Err(AuthError::NotInitialized),
        }
    }
}

/// Headless provider backed by a pre-issued long-lived token.
///
/// The browser flow (script injection, login popup) has no equivalent
/// in a terminal process; operators instead issue a user token out of
/// band and hand it to this provider, which reports Connected with it.
pub struct StaticTokenProvider {
    auth: AuthResponse,
}

impl StaticTokenProvider {
    /// Build a provider from a pre-issued token and its user id.
    #[must_use]
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            auth: AuthResponse {
                access_token: access_token.into(),
                // Pre-issued long-lived tokens: nominal 60-day expiry.
                expires_in: 60 * 24 * 60 * 60,
                signed_request: String::new(),
                user_id: user_id.into(),
                graph_domain: "facebook".to_string(),
                data_access_expiration_time: 0,
            },
        }
    }
}

impl IdentityProvider for StaticTokenProvider {
    fn load_sdk(&self, _app_id: &str, on_ready: ReadyCallback) {
        on_ready(Ok(()));
    }

    fn login_status(&self, on_status: StatusCallback) {
        on_status(LoginStatus::Connected(self.auth.clone()));
    }

    fn login(&self, _scope: &str, on_status: StatusCallback) {
        on_status(LoginStatus::Connected(self.auth.clone()));
    }

    fn logout(&self, on_done: DoneCallback) {
        on_done();
    }
}
