//! Authentication collaborator for Nestaway
//!
//! The login flow only needs one answer from the outside world: do these
//! credentials authenticate? This module defines that contract and a
//! fixed-delay in-memory implementation used for demos and tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::config::LoginConfig;

/// Authentication transport error types
///
/// A rejected credential pair is not an error: it resolves to `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum AuthError {
    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    Server {
        /// HTTP-like status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Service is unavailable
    #[error("Authentication service unavailable")]
    Unavailable,
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Credentials submitted by the login form
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address as typed
    pub email: String,
    /// Password as typed
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication service
///
/// Implementations must eventually resolve or fail; callers bound the
/// wait with their own timeout.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check a credential pair
    ///
    /// Returns `Ok(true)` when authenticated, `Ok(false)` when the
    /// credentials were rejected.
    async fn authenticate(&self, email: &str, password: &str) -> Result<bool>;
}

/// Default latency of [`StubAuthenticator`]
pub const DEFAULT_STUB_DELAY: Duration = Duration::from_millis(2000);

/// In-memory authenticator that answers after a fixed delay
///
/// # Example
///
/// ```rust
/// use app_core::auth::{Authenticator, StubAuthenticator};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let auth = StubAuthenticator::new(Duration::ZERO)
///         .with_account("alice@example.com", "hunter22");
///
///     assert!(auth.authenticate("alice@example.com", "hunter22").await.unwrap());
///     assert!(!auth.authenticate("alice@example.com", "wrong").await.unwrap());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    delay: Duration,
    accounts: HashMap<String, String>,
    outage: Option<AuthError>,
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_STUB_DELAY)
    }
}

impl StubAuthenticator {
    /// Create a stub with no accounts
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            accounts: HashMap::new(),
            outage: None,
        }
    }

    /// Create a stub with no accounts, answering after the configured delay
    pub fn from_config(config: &LoginConfig) -> Self {
        Self::new(config.stub_delay())
    }

    /// Register an account
    pub fn with_account(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.insert(email.into(), password.into());
        self
    }

    /// Make every call fail with `error` after the delay
    pub fn with_outage(mut self, error: AuthError) -> Self {
        self.outage = Some(error);
        self
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(error) = &self.outage {
            tracing::warn!(%error, "stub authenticator outage");
            return Err(error.clone());
        }

        let authenticated = self
            .accounts
            .get(email)
            .is_some_and(|expected| expected == password);
        tracing::debug!(email, authenticated, "stub authenticator resolved");
        Ok(authenticated)
    }
}
