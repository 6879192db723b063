//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Demo error (unknown name or failed demo)
    #[error("{0}")]
    Demo(#[from] tour_kit::DemoError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] tour_kit::RegistrationError),

    /// A selected demo failed
    #[error("Demo '{name}' failed: {source}")]
    DemoFailed {
        name: &'static str,
        #[source]
        source: tour_kit::DemoError,
    },
}
