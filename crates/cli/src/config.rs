//! Demo tuning loaded from an optional TOML file

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

fn default_debounce_delay_ms() -> u64 {
    300
}

fn default_throttle_delay_ms() -> u64 {
    2000
}

fn default_fibonacci_len() -> usize {
    10
}

fn default_memo_fib_depth() -> u64 {
    30
}

/// Tuning for the interactive pacing demos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaceSection {
    /// Quiet period for the debounce demo, in milliseconds.
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,

    /// Minimum interval for the throttle demo, in milliseconds.
    #[serde(default = "default_throttle_delay_ms")]
    pub throttle_delay_ms: u64,
}

impl Default for PaceSection {
    fn default() -> Self {
        Self {
            debounce_delay_ms: default_debounce_delay_ms(),
            throttle_delay_ms: default_throttle_delay_ms(),
        }
    }
}

/// Tuning for the canned `run` demos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    /// How many fibonacci numbers the fibonacci demo prints.
    #[serde(default = "default_fibonacci_len")]
    pub fibonacci_len: usize,

    /// Argument for the memoized-fibonacci timing demo.
    #[serde(default = "default_memo_fib_depth")]
    pub memo_fib_depth: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            fibonacci_len: default_fibonacci_len(),
            memo_fib_depth: default_memo_fib_depth(),
        }
    }
}

/// Root of the optional drill config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub pace: PaceSection,

    #[serde(default)]
    pub run: RunSection,
}

impl DemoConfig {
    /// Loads from `path`, or falls back to defaults when no path is
    /// given. A file that exists but fails to parse or validate is an
    /// error, never silently ignored.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Rejects values the demos cannot honor.
    pub fn validate(&self) -> Result<()> {
        const MAX_DELAY_MS: u64 = 600_000;
        if self.pace.debounce_delay_ms > MAX_DELAY_MS {
            bail!("pace.debounce_delay_ms must be at most {MAX_DELAY_MS}");
        }
        if self.pace.throttle_delay_ms > MAX_DELAY_MS {
            bail!("pace.throttle_delay_ms must be at most {MAX_DELAY_MS}");
        }
        // The u64 fibonacci sequence is exact through 94 terms.
        if self.run.fibonacci_len > 94 {
            bail!("run.fibonacci_len must be at most 94");
        }
        // Naive fibonacci past this depth takes minutes, not seconds.
        if self.run.memo_fib_depth > 45 {
            bail!("run.memo_fib_depth must be at most 45");
        }
        Ok(())
    }

    /// Commented sample config.
    pub fn example() -> &'static str {
        r#"# drill demo configuration

[pace]
# Quiet period for 'drill debounce', in milliseconds.
debounce_delay_ms = 300
# Minimum interval for 'drill throttle', in milliseconds.
throttle_delay_ms = 2000

[run]
# How many fibonacci numbers 'drill run fibonacci' prints (max 94).
fibonacci_len = 10
# Argument for the memoized-fibonacci timing demo (max 45).
memo_fib_depth = 30
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_means_defaults() {
        let config = DemoConfig::load(None).unwrap();
        assert_eq!(config.pace.debounce_delay_ms, 300);
        assert_eq!(config.pace.throttle_delay_ms, 2000);
        assert_eq!(config.run.fibonacci_len, 10);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[pace]\ndebounce_delay_ms = 150\n").unwrap();

        let config = DemoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.pace.debounce_delay_ms, 150);
        assert_eq!(config.pace.throttle_delay_ms, 2000);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[run]\nfibonacci_len = 500\n").unwrap();

        assert!(DemoConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(DemoConfig::load(Some(Path::new("/nonexistent/drill.toml"))).is_err());
    }

    #[test]
    fn test_example_parses_and_validates() {
        let config: DemoConfig = toml::from_str(DemoConfig::example()).unwrap();
        config.validate().unwrap();
    }
}
