//! CLI command implementations

pub mod config;
pub mod debounce;
pub mod list;
pub mod run;
pub mod throttle;
