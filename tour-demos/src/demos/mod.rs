//! The registered demos, in run order.

pub mod args;
pub mod closures;
pub mod iteration;
