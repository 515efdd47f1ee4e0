//! Operator Confirmation
//!
//! When an operation has used up its retry budget the core asks a human (or a
//! policy standing in for one) whether to grant another round of attempts.
//! Hosts decide how that question is asked: a terminal prompt on desktop, a
//! dialog in a GUI, or a fixed answer in batch jobs.

use crate::{error::Result, platform::PlatformSendSync};

/// Decision callback consulted once a retry budget is exhausted.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::prompt::OperatorPrompt;
///
/// fn keep_going(prompt: &dyn OperatorPrompt) -> bool {
///     prompt.should_continue(5).unwrap_or(false)
/// }
/// ```
pub trait OperatorPrompt: PlatformSendSync {
    /// Ask whether another `budget` attempts should be made.
    ///
    /// Returning `Ok(false)` stops the retry loop. Errors (closed input,
    /// broken terminal) are treated by callers as a negative answer.
    fn should_continue(&self, budget: u32) -> Result<bool>;
}

/// Prompt for unattended contexts: never extends the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive;

impl OperatorPrompt for NonInteractive {
    fn should_continue(&self, _budget: u32) -> Result<bool> {
        Ok(false)
    }
}

impl<F> OperatorPrompt for F
where
    F: Fn(u32) -> bool + PlatformSendSync,
{
    fn should_continue(&self, budget: u32) -> Result<bool> {
        Ok(self(budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_non_interactive_always_stops() {
        let prompt = NonInteractive;
        assert!(!prompt.should_continue(5).unwrap());
        assert!(!prompt.should_continue(0).unwrap());
    }

    #[test]
    fn test_closure_prompt_receives_budget() {
        let seen = Arc::new(AtomicU32::new(0));
        let seen_clone = Arc::clone(&seen);
        let prompt = move |budget: u32| {
            seen_clone.store(budget, Ordering::SeqCst);
            true
        };

        assert!(prompt.should_continue(7).unwrap());
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_prompt_as_trait_object() {
        let prompt: Arc<dyn OperatorPrompt> = Arc::new(|_budget: u32| false);
        assert!(!prompt.should_continue(3).unwrap());
    }
}
