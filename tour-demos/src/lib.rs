//! Language-feature demos with automatic registration
//!
//! `utils` holds the building blocks (argument packing, lazy ranges, an
//! explicit iteration protocol, closures and decorators, memoization).
//! `demos` wires them into the three registered demos that the runner
//! executes in order: `args`, `iteration`, `closures`.

pub mod utils;

#[cfg(feature = "builtin-demos")]
pub mod demos;
