//! A private counter as an explicit value type

/// Monotonic counter with an explicit reset. The count is private;
/// callers go through the three methods.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Fresh counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one and returns the new count.
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Current count, unchanged.
    pub fn value(&self) -> u64 {
        self.count
    }
}
