//! # Retry Configuration Module
//!
//! Provides configuration management for the retry core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `RetryConfig` instance. Values can also be loaded from JSON or from
//! environment variables. Every construction path runs the same fail-fast
//! validation so an invalid budget is reported before any API call is made.
//!
//! ## Settings
//!
//! - `max_retry` - consecutive failed attempts allowed before the operator is
//!   asked whether to continue (default: 5)
//! - `interactive` - whether an operator prompt is available at all; when
//!   disabled an exhausted budget ends the call (default: true)
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::RetryConfig;
//!
//! let config = RetryConfig::builder()
//!     .max_retry(3)
//!     .interactive(false)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.max_retry, 3);
//! ```
//!
//! ## Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `MPC_RETRY_MAX` | retry budget (`1..=1000`) |
//! | `MPC_RETRY_INTERACTIVE` | `true`/`false`, `1`/`0`, `yes`/`no` |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of consecutive failures before prompting.
pub const DEFAULT_MAX_RETRY: u32 = 5;

/// Upper bound accepted by validation.
pub const MAX_RETRY_LIMIT: u32 = 1000;

pub const ENV_MAX_RETRY: &str = "MPC_RETRY_MAX";
pub const ENV_INTERACTIVE: &str = "MPC_RETRY_INTERACTIVE";

/// Retry behaviour shared by every invocation made through the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Consecutive failed attempts before the operator is consulted
    pub max_retry: u32,

    /// Whether an exhausted budget may be extended by an operator prompt
    pub interactive: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry: DEFAULT_MAX_RETRY,
            interactive: true,
        }
    }
}

impl RetryConfig {
    /// Creates a new builder for constructing a `RetryConfig`.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// A budget of zero is rejected here even though the invoker itself
    /// tolerates it: a configured budget of zero would never attempt a call.
    pub fn validate(&self) -> Result<()> {
        if self.max_retry == 0 {
            return Err(Error::Config(
                "Retry budget must be greater than 0. \
                 Set MPC_RETRY_MAX or max_retry to at least 1."
                    .to_string(),
            ));
        }

        if self.max_retry > MAX_RETRY_LIMIT {
            return Err(Error::Config(format!(
                "Retry budget exceeds maximum of {} attempts",
                MAX_RETRY_LIMIT
            )));
        }

        Ok(())
    }

    /// Parses and validates a JSON document.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// ```
    /// use core_runtime::config::RetryConfig;
    ///
    /// let config = RetryConfig::from_json_str(r#"{ "max_retry": 2 }"#).unwrap();
    /// assert_eq!(config.max_retry, 2);
    /// assert!(config.interactive);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid retry configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_MAX_RETRY) {
            let max_retry = raw.trim().parse::<u32>().map_err(|e| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got '{}': {}",
                    ENV_MAX_RETRY, raw, e
                ))
            })?;
            builder = builder.max_retry(max_retry);
        }

        if let Some(raw) = lookup(ENV_INTERACTIVE) {
            builder = builder.interactive(parse_flag(ENV_INTERACTIVE, &raw)?);
        }

        builder.build()
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean (true/false), got '{}'",
            key, other
        ))),
    }
}

/// Builder for constructing [`RetryConfig`] instances.
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    max_retry: Option<u32>,
    interactive: Option<bool>,
}

impl RetryConfigBuilder {
    /// Sets the retry budget.
    pub fn max_retry(mut self, max_retry: u32) -> Self {
        self.max_retry = Some(max_retry);
        self
    }

    /// Enables or disables the operator prompt.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the budget is outside `1..=1000`.
    pub fn build(self) -> Result<RetryConfig> {
        let defaults = RetryConfig::default();
        let config = RetryConfig {
            max_retry: self.max_retry.unwrap_or(defaults.max_retry),
            interactive: self.interactive.unwrap_or(defaults.interactive),
        };

        config.validate()?;
        Ok(config)
    }
}
