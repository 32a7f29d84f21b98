//! Unbounded result caching for pure callables
//!
//! This crate provides:
//! - [`memoize()`]: single-owner wrapper with hit/miss stats
//! - [`shared()`]: `Sync` wrapper over a concurrent map for cross-thread reuse
//!
//! Keys are structural. Multi-argument callables take tuples, so
//! distinct argument combinations can never collide the way joined
//! string keys do.

pub mod cache;
pub mod shared;

pub use cache::{memoize, MemoStats, Memoized};
pub use shared::{shared, SharedMemoized};
