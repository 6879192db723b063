//! Memoizing wrapper around a single-argument function.

use std::cell::RefCell;
use std::hash::Hash;
use std::marker::PhantomData;

use super::backend::{Backend, HashMapBackend};

/// A function whose results are cached per argument.
///
/// The wrapped function is written with open recursion: it receives a
/// `recurse` callback as its first argument and calls it for sub-problems, so
/// recursive calls go through the cache as well. Each distinct argument is
/// computed at most once.
///
/// # Type Parameters
///
/// - `I`: Argument type (must implement `Clone`)
/// - `K`: Result type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `F`: The wrapped function
///
/// # Warning: No Cycle Detection
///
/// A function that recurses into its own argument (directly or through a
/// cycle) never terminates.
///
/// # Example
///
/// ```rust
/// use tour_demos::utils::memo::{Memoized, VecBackend};
///
/// let factorial = Memoized::with_backend(
///     VecBackend::new(),
///     |recurse: &dyn Fn(&usize) -> u64, n: &usize| {
///         if *n == 0 { 1 } else { (*n as u64) * recurse(&(n - 1)) }
///     },
/// );
///
/// assert_eq!(factorial.get(&5), 120);
/// assert_eq!(factorial.cached(), 6);
/// ```
pub struct Memoized<I, K, B, F>
where
    B: Backend<I, K>,
    F: Fn(&dyn Fn(&I) -> K, &I) -> K,
{
    backend: RefCell<B>,
    func: F,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, F> Memoized<I, K, B, F>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    F: Fn(&dyn Fn(&I) -> K, &I) -> K,
{
    /// Wraps `func`, caching its results in `backend`.
    pub fn with_backend(backend: B, func: F) -> Self {
        Self {
            backend: RefCell::new(backend),
            func,
            _phantom: PhantomData,
        }
    }

    /// Returns `func(index)`, computing it only if it is not cached yet.
    pub fn get(&self, index: &I) -> K {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(index) {
            tracing::trace!("memo cache hit");
            return value.clone();
        }

        // No borrow is held while the function recurses back into `get`
        tracing::trace!("memo cache miss");
        let value = (self.func)(&|sub: &I| self.get(sub), index);

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || value)
            .clone()
    }

    /// Number of arguments with a cached result.
    pub fn cached(&self) -> usize {
        self.backend.borrow().len()
    }
}

/// Memoizes a recursive single-argument function over any hashable argument.
///
/// ```rust
/// use tour_demos::utils::memo::memoise;
///
/// let fib = memoise(|fib: &dyn Fn(&u64) -> u64, n: &u64| match *n {
///     0 => 0,
///     1 => 1,
///     n => fib(&(n - 1)) + fib(&(n - 2)),
/// });
///
/// assert_eq!(fib.get(&10), 55);
/// ```
pub fn memoise<I, K, F>(func: F) -> Memoized<I, K, HashMapBackend<I, K>, F>
where
    I: Hash + Eq + Clone,
    K: Clone,
    F: Fn(&dyn Fn(&I) -> K, &I) -> K,
{
    Memoized::with_backend(HashMapBackend::new(), func)
}

/// Memoizes a non-recursive single-argument function.
pub fn memoise_plain<I, K, G>(
    func: G,
) -> Memoized<I, K, HashMapBackend<I, K>, impl Fn(&dyn Fn(&I) -> K, &I) -> K>
where
    I: Hash + Eq + Clone,
    K: Clone,
    G: Fn(&I) -> K,
{
    memoise(move |_recurse: &dyn Fn(&I) -> K, index: &I| func(index))
}
