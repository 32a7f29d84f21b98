//! Chainable rupee-amount accumulator

const THOUSAND: u64 = 1_000;
const LAC: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Accumulates rupee amounts from Indian denominations through a
/// consuming chain: `Amount::new().crores(5).lacs(15).value()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    total: u64,
}

impl Amount {
    /// Zero rupees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` crores.
    pub fn crores(mut self, n: u64) -> Self {
        self.total += n * CRORE;
        self
    }

    /// Adds `n` lacs.
    pub fn lacs(mut self, n: u64) -> Self {
        self.total += n * LAC;
        self
    }

    /// Adds `n` thousand.
    pub fn thousand(mut self, n: u64) -> Self {
        self.total += n * THOUSAND;
        self
    }

    /// Total in rupees.
    pub fn value(&self) -> u64 {
        self.total
    }
}
