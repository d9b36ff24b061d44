//! Application state management for Nestaway
//!
//! This crate owns screen state that outlives a single render: the login
//! form, its validity latches, and the lifecycle of an authentication
//! attempt.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod login;

pub use login::{
    FormState, LoginFormController, NavigationHost, SubmitError, SubmitOutcome, TransportFailure,
};
