//! Error types for the demo library

use thiserror::Error;

/// Error type for running a demo
#[derive(Debug, Error)]
pub enum DemoError {
    /// No demo is registered under the given name
    #[error("Demo '{0}' is not registered")]
    NotFound(String),
    /// A value checked by the demo did not match what it expected
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a second demo under a name that is already taken
    #[error("Duplicate demo registration for '{0}'")]
    DuplicateDemo(&'static str),
}
