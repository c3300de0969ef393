//! Shared heap sequence counter.

use std::cell::Cell;
use std::rc::Rc;

/// A shared monotonically increasing counter for heap sequence numbers.
///
/// Cloning a counter yields another handle to the same underlying value, so
/// several [`crate::HeapGenerator`] instances can interleave their output
/// into one strictly increasing sequence space (fan-in ahead of a single
/// transport). Handles are single-threaded by construction; there is no
/// internal locking and the increment is not atomic.
#[derive(Debug, Clone)]
pub struct HeapCounter {
    value: Rc<Cell<u64>>,
}

impl HeapCounter {
    /// Creates a fresh counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Rc::new(Cell::new(1)),
        }
    }

    /// Returns the current counter value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value.get()
    }

    /// Advances the counter by exactly 1 and returns the pre-increment value.
    pub fn advance(&self) -> u64 {
        let value = self.value.get();
        self.value.set(value + 1);
        value
    }

    /// Overwrites the counter value.
    ///
    /// Caller obligation: never set a value below the current one. Sequence
    /// consumers assume heap numbers are unique and increasing, and nothing
    /// here checks for a backward write.
    pub fn set_value(&self, value: u64) {
        self.value.set(value);
    }

    /// Returns `true` if both handles refer to the same underlying counter.
    #[must_use]
    pub fn is_shared_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl Default for HeapCounter {
    fn default() -> Self {
        Self::new()
    }
}
