//! Core application logic for Nestaway
//!
//! This crate contains the business rules shared by the screens: form
//! validation, the authentication contract, configuration, and the
//! explore catalogue.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod explore;
pub mod validation;

pub use auth::{AuthError, Authenticator, Credentials, StubAuthenticator};
pub use config::{AppConfig, ConfigError, LoginConfig};
pub use explore::{categories, search_categories, Category};
pub use validation::{is_valid_email, is_valid_password, ValidationConfig, ValidityLatch};
