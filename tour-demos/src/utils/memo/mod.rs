//! Memoization with pluggable storage
//!
//! [`Memoized`] wraps a single-argument function and caches its result for
//! every distinct argument. The cache is private to the wrapper and is filled
//! lazily on the first miss for each argument; a stored value is never
//! replaced.
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: Supports arbitrary hashable arguments (used by [`memoise`])
//! - [`VecBackend`]: Efficient for dense, sequential `usize` arguments (auto-growing)
//! - [`NoCacheBackend`]: Never caches; shows what the function costs without memoization
//!
//! # Example: recursive Fibonacci
//!
//! ```rust
//! use tour_demos::utils::memo::{Memoized, VecBackend};
//!
//! let fib = Memoized::with_backend(
//!     VecBackend::new(),
//!     |fib: &dyn Fn(&usize) -> u128, n: &usize| {
//!         if *n <= 1 { *n as u128 } else { fib(&(n - 1)) + fib(&(n - 2)) }
//!     },
//! );
//!
//! assert_eq!(fib.get(&90), 2_880_067_194_370_816_120);
//! // 0..=90, each computed once
//! assert_eq!(fib.cached(), 91);
//! ```
//!
//! # Example: non-recursive function
//!
//! ```rust
//! use tour_demos::utils::memo::memoise_plain;
//!
//! let shout = memoise_plain(|s: &String| s.to_uppercase());
//! assert_eq!(shout.get(&"hey".to_string()), "HEY");
//! assert_eq!(shout.cached(), 1);
//! ```

mod backend;
mod memoized;

pub use backend::{Backend, HashMapBackend, NoCacheBackend, VecBackend};
pub use memoized::{Memoized, memoise, memoise_plain};
