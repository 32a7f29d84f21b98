//! Invocation pacing: debounce and throttle wrappers
//!
//! This crate provides:
//! - [`debounce()`]: trailing-edge collapsing of call bursts
//! - [`throttle()`]: leading-edge rate limiting with silent drops
//!
//! Both wrappers are fire-and-forget. The callback's return value is
//! discarded, nothing is ever queued, and debounce supersession is the
//! only cancellation in the system.

pub mod debounce;
pub mod throttle;

pub use debounce::{debounce, Debounced};
pub use throttle::{throttle, Throttled};
