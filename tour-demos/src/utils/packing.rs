//! Variadic-style argument packing.
//!
//! Rust functions have fixed arity, so an open-ended argument list is carried
//! as a [`Packed`] value: an ordered list of positional values plus a mapping
//! of named values. The [`pack!`](crate::pack) macro builds one either from
//! literal arguments or by unpacking existing collections.

use std::collections::BTreeMap;

/// Positional and named arguments collected for a single call.
///
/// Named values iterate in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed<T> {
    positional: Vec<T>,
    named: BTreeMap<String, T>,
}

impl<T> Packed<T> {
    /// Creates an empty argument pack.
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            named: BTreeMap::new(),
        }
    }

    /// Builds a pack from an existing sequence and mapping.
    ///
    /// This is the unpacking side: any iterable of values and any iterable of
    /// `(key, value)` pairs is spread into a fresh pack.
    pub fn from_parts<A, N, K>(args: A, kwargs: N) -> Self
    where
        A: IntoIterator<Item = T>,
        N: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self {
            positional: args.into_iter().collect(),
            named: kwargs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Appends a positional value.
    pub fn push(&mut self, value: T) {
        self.positional.push(value);
    }

    /// Sets a named value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.named.insert(key.into(), value)
    }

    pub fn positional(&self) -> &[T] {
        &self.positional
    }

    pub fn named(&self) -> &BTreeMap<String, T> {
        &self.named
    }

    /// Positional values in order, then named values in key order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.positional.iter().chain(self.named.values())
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Splits the pack back into its sequence and mapping.
    pub fn into_parts(self) -> (Vec<T>, BTreeMap<String, T>) {
        (self.positional, self.named)
    }
}

impl<T> Default for Packed<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Packed`] argument list.
///
/// Literal form: positional values, then `;`, then `name = value` pairs.
/// Unpacking form: `*sequence`, optionally followed by `**mapping`.
///
/// ```
/// use std::collections::BTreeMap;
/// use tour_demos::pack;
///
/// let literal = pack!(1, 2, 3; a = 4, b = 5, c = 6);
///
/// let list = vec![1, 2, 3];
/// let dict = BTreeMap::from([("a", 4), ("b", 5), ("c", 6)]);
/// let unpacked = pack!(*list, **dict);
///
/// assert_eq!(literal, unpacked);
/// assert_eq!(literal.values().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! pack {
    (* $args:expr, ** $kwargs:expr $(,)?) => {
        $crate::utils::packing::Packed::from_parts($args, $kwargs)
    };
    (* $args:expr $(,)?) => {{
        let mut packed = $crate::utils::packing::Packed::new();
        for value in $args {
            packed.push(value);
        }
        packed
    }};
    ($($arg:expr),* $(,)? $(; $($key:ident = $value:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut packed = $crate::utils::packing::Packed::new();
        $(packed.push($arg);)*
        $($(packed.insert(stringify!($key), $value);)*)?
        packed
    }};
}
