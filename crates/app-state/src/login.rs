//! Login form state
//!
//! `LoginFormController` owns the login form's field values, keeps a
//! validity latch per field, gates the submit action and tracks the single
//! outstanding authentication attempt. The presentation layer reads
//! [`FormState`] snapshots and forwards keystrokes and presses back in.

use app_core::auth::{AuthError, Authenticator, Credentials};
use app_core::config::{AppConfig, DEFAULT_AUTH_TIMEOUT};
use app_core::validation::{is_valid_email, ValidationConfig, ValidityLatch};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Reasons a submit press is refused without contacting the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One of the fields is not valid yet
    #[error("Form is not ready to submit")]
    NotReady,

    /// An authentication attempt is already pending
    #[error("A login attempt is already in flight")]
    InFlight,

    /// The form already authenticated and handed off navigation
    #[error("Login already completed")]
    Completed,
}

/// Result type for submit operations
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Why an attempt failed without an answer from the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "error", rename_all = "camelCase")]
pub enum TransportFailure {
    /// The authentication service returned an error
    Transport(AuthError),
    /// No answer within the configured timeout
    TimedOut,
}

/// Resolution of a submitted attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credentials accepted; navigation has been signalled
    Authenticated,
    /// Credentials rejected; the failure notification is showing
    Rejected,
    /// The call failed outright; the user may retry
    TransportFailed(TransportFailure),
}

/// Receiver of the "proceed to next screen" signal
pub trait NavigationHost: Send + Sync {
    /// Called once after a successful login
    fn proceed(&self);
}

/// Read view of the login form
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Email as typed
    pub email: String,
    /// Latched email validity
    pub email_valid: bool,
    /// Password as typed
    #[serde(skip_serializing)]
    pub password: String,
    /// Latched password validity
    pub password_valid: bool,
    /// An authentication call is pending
    pub submission_in_flight: bool,
    /// The last completed attempt was rejected
    pub last_submission_failed: bool,
    /// The last attempt failed without an answer
    pub transport_failure: Option<TransportFailure>,
}

impl FormState {
    /// Both fields are valid
    pub fn can_submit(&self) -> bool {
        self.email_valid && self.password_valid
    }

    /// An error notification should be visible
    pub fn shows_failure(&self) -> bool {
        self.last_submission_failed || self.transport_failure.is_some()
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("email_valid", &self.email_valid)
            .field("password", &"<redacted>")
            .field("password_valid", &self.password_valid)
            .field("submission_in_flight", &self.submission_in_flight)
            .field("last_submission_failed", &self.last_submission_failed)
            .field("transport_failure", &self.transport_failure)
            .finish()
    }
}

#[derive(Default)]
struct Inner {
    email: String,
    email_latch: ValidityLatch,
    password: String,
    password_latch: ValidityLatch,
    in_flight: bool,
    last_failed: bool,
    transport_failure: Option<TransportFailure>,
    completed: bool,
}

impl Inner {
    fn can_submit(&self) -> bool {
        self.email_latch.is_valid() && self.password_latch.is_valid()
    }

    fn snapshot(&self) -> FormState {
        FormState {
            email: self.email.clone(),
            email_valid: self.email_latch.is_valid(),
            password: self.password.clone(),
            password_valid: self.password_latch.is_valid(),
            submission_in_flight: self.in_flight,
            last_submission_failed: self.last_failed,
            transport_failure: self.transport_failure.clone(),
        }
    }
}

/// Clears the in-flight flag if a submit future is dropped mid-call
struct InFlightGuard<'a> {
    state: &'a Mutex<Inner>,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.lock().in_flight = false;
        }
    }
}

/// Login form controller
///
/// Cloning yields another handle to the same form, so a pending
/// [`submit`](Self::submit) and the keystroke handlers can run side by side.
///
/// # Example
///
/// ```rust
/// use app_core::auth::StubAuthenticator;
/// use app_state::login::{LoginFormController, NavigationHost, SubmitOutcome};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// struct Proceed;
/// impl NavigationHost for Proceed {
///     fn proceed(&self) {}
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let auth = StubAuthenticator::new(Duration::ZERO).with_account("a@b.com", "secret");
///     let form = LoginFormController::new(Arc::new(auth), Arc::new(Proceed));
///
///     form.on_email_changed("a@b.com");
///     form.on_password_changed("secret");
///     assert!(form.can_submit());
///
///     assert_eq!(form.submit().await, Ok(SubmitOutcome::Authenticated));
/// }
/// ```
#[derive(Clone)]
pub struct LoginFormController {
    state: Arc<Mutex<Inner>>,
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn NavigationHost>,
    validation: ValidationConfig,
    auth_timeout: Duration,
}

impl LoginFormController {
    /// Create an empty form with default rules
    pub fn new(authenticator: Arc<dyn Authenticator>, navigator: Arc<dyn NavigationHost>) -> Self {
        Self {
            state: Arc::new(Mutex::new(Inner::default())),
            authenticator,
            navigator,
            validation: ValidationConfig::default(),
            auth_timeout: DEFAULT_AUTH_TIMEOUT,
        }
    }

    /// Apply validation rules and timeout from configuration
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.validation = config.validation;
        self.auth_timeout = config.login.auth_timeout();
        self
    }

    /// Override the authentication timeout
    pub fn with_auth_timeout(mut self, timeout: Duration) -> Self {
        self.auth_timeout = timeout;
        self
    }

    /// Configured authentication timeout
    pub fn auth_timeout(&self) -> Duration {
        self.auth_timeout
    }

    /// Handle a change to the email field
    pub fn on_email_changed(&self, input: &str) {
        let matches = is_valid_email(input);
        let mut state = self.state.lock();
        state.email = input.to_string();
        if state.email_latch.update(matches) {
            tracing::trace!(valid = state.email_latch.is_valid(), "email validity flipped");
        }
    }

    /// Handle a change to the password field
    pub fn on_password_changed(&self, input: &str) {
        let matches = self.validation.password_ok(input);
        let mut state = self.state.lock();
        state.password = input.to_string();
        if state.password_latch.update(matches) {
            tracing::trace!(valid = state.password_latch.is_valid(), "password validity flipped");
        }
    }

    /// Whether both fields are valid
    ///
    /// Does not look at the in-flight flag; [`submit`](Self::submit) guards
    /// re-entry itself.
    pub fn can_submit(&self) -> bool {
        self.state.lock().can_submit()
    }

    /// Whether an authentication call is pending
    pub fn is_submitting(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Copy of the current form state
    pub fn snapshot(&self) -> FormState {
        self.state.lock().snapshot()
    }

    /// Hide the failure notification, keeping fields and validity
    pub fn dismiss_failure_notification(&self) {
        let mut state = self.state.lock();
        state.last_failed = false;
        state.transport_failure = None;
    }

    /// Submit the form
    ///
    /// Issues at most one authentication call. The call is bounded by the
    /// configured timeout; expiry is reported as
    /// [`TransportFailure::TimedOut`].
    ///
    /// # Errors
    ///
    /// - `SubmitError::NotReady` - a field is not valid
    /// - `SubmitError::InFlight` - an earlier attempt is still pending
    /// - `SubmitError::Completed` - the form already logged in
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let credentials = {
            let mut state = self.state.lock();
            if state.completed {
                return Err(SubmitError::Completed);
            }
            if state.in_flight {
                tracing::debug!("submit ignored: attempt already in flight");
                return Err(SubmitError::InFlight);
            }
            if !state.can_submit() {
                return Err(SubmitError::NotReady);
            }
            state.in_flight = true;
            state.last_failed = false;
            state.transport_failure = None;
            Credentials::new(state.email.clone(), state.password.clone())
        };
        let mut guard = InFlightGuard {
            state: &self.state,
            armed: true,
        };

        tracing::info!(email = %credentials.email, "submitting login");
        let result = tokio::time::timeout(
            self.auth_timeout,
            self.authenticator
                .authenticate(&credentials.email, &credentials.password),
        )
        .await;

        let outcome = {
            let mut state = self.state.lock();
            state.in_flight = false;
            guard.armed = false;
            match result {
                Ok(Ok(true)) => {
                    state.last_failed = false;
                    state.completed = true;
                    SubmitOutcome::Authenticated
                }
                Ok(Ok(false)) => {
                    state.last_failed = true;
                    SubmitOutcome::Rejected
                }
                Ok(Err(error)) => {
                    let failure = TransportFailure::Transport(error);
                    state.transport_failure = Some(failure.clone());
                    SubmitOutcome::TransportFailed(failure)
                }
                Err(_) => {
                    state.transport_failure = Some(TransportFailure::TimedOut);
                    SubmitOutcome::TransportFailed(TransportFailure::TimedOut)
                }
            }
        };
        drop(guard);

        match &outcome {
            SubmitOutcome::Authenticated => {
                tracing::info!("login accepted");
                self.navigator.proceed();
            }
            SubmitOutcome::Rejected => tracing::info!("login rejected"),
            SubmitOutcome::TransportFailed(failure) => {
                tracing::warn!(?failure, "login attempt failed");
            }
        }

        Ok(outcome)
    }
}
