//! Monotonic identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues decimal string identifiers `"1"`, `"2"`, ... for one store.
///
/// Every call returns a value never returned before by the same generator,
/// including after the entity holding it has been deleted.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Take the next identifier.
    pub fn next(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
