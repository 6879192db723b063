//! Demo registry and runner plumbing
//!
//! A small framework for registering stateless demonstration routines and
//! running them in a fixed order.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Demo`] trait: a routine that writes lines to a [`Transcript`]
//! - A registry ([`RegistryBuilder`], [`DemoRegistry`]) that orders demos and
//!   rejects duplicate names
//! - Automatic plugin collection via `inventory`, usually through
//!   `#[derive(AutoRegisterDemo)]`
//! - Timed runs ([`DemoRun`])
//! - `#[decorate(...)]`, declarative application of function decorators
//!
//! # Quick Example
//!
//! ```
//! use tour_kit::{Demo, DemoError, RegistryBuilder, Transcript};
//!
//! struct Squares;
//!
//! impl Demo for Squares {
//!     fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
//!         for i in 1..=3 {
//!             transcript.line(i * i);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register("squares", 1, &["math"], Squares::run)
//!     .unwrap()
//!     .build();
//!
//! let run = registry.run("squares").unwrap();
//! assert!(run.is_ok());
//! assert_eq!(run.transcript.lines(), ["1", "4", "9"]);
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! ```ignore
//! #[derive(AutoRegisterDemo)]
//! #[demo(name = "args", order = 1, tags = ["functions"])]
//! struct ArgsDemo;
//! ```

mod demo;
mod error;
mod instance;
mod registry;
mod transcript;

// Re-export public API
pub use demo::Demo;
pub use error::{DemoError, RegistrationError};
pub use instance::{DemoFn, DemoRun};
pub use registry::{DemoInfo, DemoPlugin, DemoRegistry, RegisterableDemo, RegistryBuilder};
pub use transcript::Transcript;

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the macros
pub use tour_kit_macros::{AutoRegisterDemo, decorate};
