//! Bounded retry loop with operator-controlled extension.
//!
//! # Loop
//!
//! ```text
//! failures = 0
//! while failures < max_retry:
//!     call operation
//!         Ok(value)  -> return (value, true)
//!         Err / panic -> log, failures += 1
//!     if failures == max_retry:
//!         prompt says continue -> failures = 0
//!         otherwise            -> stop
//! return (None, false)
//! ```
//!
//! A budget of zero skips the loop entirely: no attempt, no prompt.

use crate::call::ApiCall;
use crate::outcome::Outcome;
use bridge_traits::prompt::{NonInteractive, OperatorPrompt};
use core_runtime::config::RetryConfig;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// Diagnostic emitted once per failed attempt.
pub const RETRY_LOG_MESSAGE: &str = "Error in API call; retrying";

const DEFAULT_LABEL: &str = "operation";

/// Repeats an operation until it succeeds or the operator stops it.
///
/// The invoker holds no per-call state, so one instance can serve any
/// number of sequential calls.
#[derive(Clone)]
pub struct RetryingInvoker {
    config: RetryConfig,
    prompt: Arc<dyn OperatorPrompt>,
}

impl fmt::Debug for RetryingInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryingInvoker")
            .field("config", &self.config)
            .field("prompt", &"OperatorPrompt { ... }")
            .finish()
    }
}

impl RetryingInvoker {
    pub fn new(config: RetryConfig, prompt: Arc<dyn OperatorPrompt>) -> Self {
        Self { config, prompt }
    }

    /// Invoker that stops as soon as a budget is spent.
    pub fn non_interactive(config: RetryConfig) -> Self {
        Self::new(config, Arc::new(NonInteractive))
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `operation` with the configured budget.
    pub fn invoke<T, E, F>(&self, operation: F) -> Outcome<T>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        self.run(DEFAULT_LABEL, self.config.max_retry, operation)
    }

    /// Run `operation` with an explicit budget instead of the configured one.
    pub fn invoke_with_budget<T, E, F>(&self, operation: F, max_retry: u32) -> Outcome<T>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        self.run(DEFAULT_LABEL, max_retry, operation)
    }

    /// Run `operation` with the configured budget, naming it in diagnostics.
    pub fn invoke_labeled<T, E, F>(&self, label: &str, operation: F) -> Outcome<T>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        self.run(label, self.config.max_retry, operation)
    }

    /// Run a bound API call with the configured budget.
    pub fn invoke_call<T>(&self, call: &mut ApiCall<'_, T>) -> Outcome<T> {
        let label = call.endpoint().to_string();
        debug!(
            endpoint = %label,
            args = %call.redacted_args(),
            "Invoking API call"
        );

        self.run(&label, self.config.max_retry, || call.execute())
    }

    fn run<T, E, F>(&self, label: &str, max_retry: u32, mut operation: F) -> Outcome<T>
    where
        F: FnMut() -> Result<T, E>,
        E: fmt::Display,
    {
        let span = info_span!(
            "retrying_invoke",
            operation = label,
            invocation_id = %Uuid::new_v4(),
            max_retry
        );
        let _enter = span.enter();

        let mut attempts: u32 = 0;
        let mut prompts: u32 = 0;
        let mut failures: u32 = 0;

        while failures < max_retry {
            attempts = attempts.saturating_add(1);

            match attempt(&mut operation) {
                Ok(value) => {
                    debug!(attempts, prompts, "Operation succeeded");
                    return Outcome::succeeded(value, attempts, prompts);
                }
                Err(reason) => {
                    failures += 1;
                    warn!(
                        operation = label,
                        attempt = failures,
                        max_retry,
                        error = %reason,
                        "{}",
                        RETRY_LOG_MESSAGE
                    );
                }
            }

            if failures >= max_retry {
                if self.extend_budget(max_retry, &mut prompts) {
                    failures = 0;
                } else {
                    break;
                }
            }
        }

        warn!(
            operation = label,
            attempts, prompts, "Giving up on operation"
        );
        Outcome::failed(attempts, prompts)
    }

    fn extend_budget(&self, max_retry: u32, prompts: &mut u32) -> bool {
        if !self.config.interactive {
            debug!("Retry budget exhausted in non-interactive mode");
            return false;
        }

        *prompts += 1;
        match self.prompt.should_continue(max_retry) {
            Ok(true) => {
                info!(max_retry, "Operator extended retry budget");
                true
            }
            Ok(false) => {
                info!("Operator declined further retries");
                false
            }
            Err(e) => {
                warn!(error = %e, "Operator prompt failed; stopping retries");
                false
            }
        }
    }
}

/// Call the operation once, folding errors and panics into a message.
fn attempt<T, E, F>(operation: &mut F) -> Result<T, String>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_passes_value_through() {
        let mut op = || Ok::<_, String>(7);
        assert_eq!(attempt(&mut op), Ok(7));
    }

    #[test]
    fn test_attempt_renders_error() {
        let mut op = || Err::<(), _>("503 Service Unavailable");
        assert_eq!(attempt(&mut op), Err("503 Service Unavailable".to_string()));
    }

    #[test]
    fn test_attempt_traps_panic() {
        let mut op = || -> Result<(), String> { panic!("client blew up") };
        assert_eq!(attempt(&mut op), Err("panicked: client blew up".to_string()));
    }

    #[test]
    fn test_panic_message_variants() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let other: Box<dyn Any + Send> = Box::new(42u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(other.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_non_interactive_prompt_stops_after_budget() {
        let config = RetryConfig::builder().max_retry(2).build().unwrap();
        let invoker = RetryingInvoker::non_interactive(config);

        let outcome = invoker.invoke(|| Err::<(), _>("timeout"));

        assert_eq!(outcome.attempts(), 2);
        assert_eq!(outcome.prompts(), 1);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_interactive_disabled_skips_prompt() {
        let config = RetryConfig::builder()
            .max_retry(2)
            .interactive(false)
            .build()
            .unwrap();
        let invoker = RetryingInvoker::new(config, Arc::new(|_budget: u32| true));

        let outcome = invoker.invoke(|| Err::<(), _>("timeout"));

        assert_eq!(outcome.attempts(), 2);
        assert_eq!(outcome.prompts(), 0);
        assert!(!outcome.is_success());
    }
}
