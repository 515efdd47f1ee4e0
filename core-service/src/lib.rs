//! Core service façade and bootstrap helpers.
//!
//! This crate wires the host-provided operator prompt and the runtime
//! configuration into a [`RetryingInvoker`]. Terminal applications typically
//! enable the `desktop-shims` feature (which depends on `bridge-desktop`) and
//! get a standard-input prompt by default; embedding hosts inject their own
//! [`OperatorPrompt`].

pub mod error;

pub use error::{CoreError, Result};

use std::fmt;
use std::sync::Arc;

use bridge_traits::prompt::{NonInteractive, OperatorPrompt};
use core_retry::{ApiCall, Outcome, RetryingInvoker};
use core_runtime::config::RetryConfig;
use tracing::debug;

#[cfg(feature = "desktop-shims")]
use core_runtime::logging::{init_logging, LoggingConfig};

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    invoker: RetryingInvoker,
}

impl fmt::Debug for CoreService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreService")
            .field("config", self.invoker.config())
            .finish()
    }
}

impl CoreService {
    /// Create a new service from a configuration and an optional prompt.
    ///
    /// Without an explicit prompt, non-interactive configurations never ask
    /// and interactive ones fall back to the platform default.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Runtime`] if the configuration fails validation
    /// - [`CoreError::CapabilityMissing`] if an interactive configuration has
    ///   no prompt and no platform default is compiled in
    pub fn new(config: RetryConfig, prompt: Option<Arc<dyn OperatorPrompt>>) -> Result<Self> {
        config.validate()?;
        let prompt = resolve_prompt(&config, prompt)?;

        debug!(
            max_retry = config.max_retry,
            interactive = config.interactive,
            "Core service created"
        );

        Ok(Self {
            invoker: RetryingInvoker::new(config, prompt),
        })
    }

    pub fn config(&self) -> &RetryConfig {
        self.invoker.config()
    }

    /// Access the invoker for closures and custom budgets.
    pub fn invoker(&self) -> &RetryingInvoker {
        &self.invoker
    }

    /// Run an arbitrary operation with the configured budget.
    pub fn invoke<T, E, F>(&self, operation: F) -> Outcome<T>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        self.invoker.invoke(operation)
    }

    /// Repeat a bound API call until it succeeds or the operator gives up.
    ///
    /// Returns the `(result, success)` pair; `result` is `None` whenever
    /// `success` is false.
    pub fn call_api<T>(&self, call: &mut ApiCall<'_, T>) -> (Option<T>, bool) {
        self.invoker.invoke_call(call).into_parts()
    }
}

fn resolve_prompt(
    config: &RetryConfig,
    prompt: Option<Arc<dyn OperatorPrompt>>,
) -> Result<Arc<dyn OperatorPrompt>> {
    match prompt {
        Some(prompt) => Ok(prompt),
        None if !config.interactive => Ok(Arc::new(NonInteractive)),
        None => default_prompt(),
    }
}

#[cfg(feature = "desktop-shims")]
fn default_prompt() -> Result<Arc<dyn OperatorPrompt>> {
    use bridge_desktop::ConsolePrompt;

    let prompt: Arc<dyn OperatorPrompt> = Arc::new(ConsolePrompt::stdio());
    Ok(prompt)
}

#[cfg(not(feature = "desktop-shims"))]
fn default_prompt() -> Result<Arc<dyn OperatorPrompt>> {
    Err(CoreError::CapabilityMissing {
        capability: "OperatorPrompt".to_string(),
        message: "Interactive retries need a way to ask the operator. \
                 Terminal: enable the 'desktop-shims' feature to use ConsolePrompt. \
                 Embedded hosts: inject an OperatorPrompt implementation, \
                 or set interactive = false."
            .to_string(),
    })
}

/// Convenience bootstrapper for terminal hosts.
///
/// Installs the global logging subscriber, reads the retry configuration
/// from the environment and prompts on standard input.
///
/// ```no_run
/// # fn example() -> core_service::Result<()> {
/// use core_runtime::logging::LoggingConfig;
/// use core_service::bootstrap_desktop;
///
/// let core = bootstrap_desktop(LoggingConfig::default())?;
/// let outcome = core.invoke(|| "7".parse::<u32>());
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop(logging: LoggingConfig) -> Result<CoreService> {
    init_logging(logging).map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    let config = RetryConfig::from_env()?;
    CoreService::new(config, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn config(max_retry: u32, interactive: bool) -> RetryConfig {
        RetryConfig::builder()
            .max_retry(max_retry)
            .interactive(interactive)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_with_explicit_prompt() {
        let asked = Arc::new(AtomicU32::new(0));
        let asked_clone = Arc::clone(&asked);
        let prompt: Arc<dyn OperatorPrompt> = Arc::new(move |_budget: u32| {
            asked_clone.fetch_add(1, Ordering::SeqCst);
            false
        });

        let service = CoreService::new(config(2, true), Some(prompt)).unwrap();
        let outcome = service.invoke(|| Err::<(), _>("unreachable host"));

        assert!(!outcome.is_success());
        assert_eq!(outcome.attempts(), 2);
        assert_eq!(asked.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_interactive_needs_no_prompt() {
        let service = CoreService::new(config(1, false), None).unwrap();

        assert!(!service.config().interactive);
        assert_eq!(service.invoke(|| Err::<(), _>("boom")).prompts(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let invalid = RetryConfig {
            max_retry: 0,
            interactive: false,
        };

        let result = CoreService::new(invalid, None);
        assert!(matches!(result, Err(CoreError::Runtime(_))));
    }

    #[test]
    fn test_call_api_returns_pair() {
        let service = CoreService::new(config(3, false), None).unwrap();
        let mut call = ApiCall::new("artist", |args| Ok(args.get::<String>("id")?))
            .arg("id", "0OdUWJ0sBjDrqHygGUXeCF");

        assert_eq!(
            service.call_api(&mut call),
            (Some("0OdUWJ0sBjDrqHygGUXeCF".to_string()), true)
        );
    }

    #[test]
    fn test_call_api_failure_returns_none() {
        let service = CoreService::new(config(2, false), None).unwrap();
        let mut call: ApiCall<'_, String> =
            ApiCall::new("artist", |_args| Err(anyhow::anyhow!("401 Unauthorized")));

        assert_eq!(service.call_api(&mut call), (None, false));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_interactive_without_prompt_is_missing_capability() {
        let result = CoreService::new(config(2, true), None);
        assert!(matches!(result, Err(CoreError::CapabilityMissing { .. })));
    }
}
