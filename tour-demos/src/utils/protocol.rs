//! Explicit iteration protocol with an out-of-data signal.
//!
//! [`Protocol::next_item`] either hands out the next element or reports
//! [`Exhausted`]. Consumers such as [`for_each`] and the `Iterator` impl of
//! [`ItemCursor`] treat `Exhausted` as the normal end of the loop.

use thiserror::Error;

/// Signal that an iteration protocol has no more elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("iteration exhausted")]
pub struct Exhausted;

/// Stateful, one-element-at-a-time traversal.
pub trait Protocol {
    type Item;

    /// Produces the next element, or `Err(Exhausted)` once there is none.
    ///
    /// Once exhausted, every further call returns `Err(Exhausted)` again.
    fn next_item(&mut self) -> Result<Self::Item, Exhausted>;
}

/// Drives `protocol` to exhaustion, calling `f` on each element.
///
/// Exhaustion ends the loop and is not reported. Returns the number of
/// elements visited.
pub fn for_each<P, F>(mut protocol: P, mut f: F) -> usize
where
    P: Protocol,
    F: FnMut(P::Item),
{
    let mut visited = 0;
    loop {
        match protocol.next_item() {
            Ok(item) => {
                f(item);
                visited += 1;
            }
            Err(Exhausted) => return visited,
        }
    }
}

/// A cursor over a fixed sequence.
///
/// `index` never exceeds `items.len()`.
#[derive(Debug, Clone)]
pub struct ItemCursor<T> {
    index: usize,
    items: Vec<T>,
}

impl<T> ItemCursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { index: 0, items }
    }

    /// Zero-based position of the next element.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.index
    }

    /// Lazy view of the elements the cursor has not handed out yet.
    ///
    /// Yields exactly what `next_item` would, without moving the cursor.
    pub fn generator(&self) -> impl Iterator<Item = &T> + '_ {
        self.items[self.index..].iter()
    }
}

impl<T: Clone> Protocol for ItemCursor<T> {
    type Item = T;

    fn next_item(&mut self) -> Result<T, Exhausted> {
        let item = self.items.get(self.index).cloned().ok_or(Exhausted)?;
        self.index += 1;
        Ok(item)
    }
}

impl<T: Clone> Iterator for ItemCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next_item().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<T: Clone> ExactSizeIterator for ItemCursor<T> {}
