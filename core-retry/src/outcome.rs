//! Result of one retrying invocation.

/// Value-or-absent plus success flag, with attempt counters for diagnostics.
///
/// Success is derived from the presence of a value, so a failed outcome can
/// never carry a stale value from an earlier attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    value: Option<T>,
    attempts: u32,
    prompts: u32,
}

impl<T> Outcome<T> {
    pub(crate) fn succeeded(value: T, attempts: u32, prompts: u32) -> Self {
        Self {
            value: Some(value),
            attempts,
            prompts,
        }
    }

    pub(crate) fn failed(attempts: u32, prompts: u32) -> Self {
        Self {
            value: None,
            attempts,
            prompts,
        }
    }

    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Total number of times the operation was invoked
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of times the operator was asked to extend the budget
    pub fn prompts(&self) -> u32 {
        self.prompts
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Split into the `(value, success)` pair.
    pub fn into_parts(self) -> (Option<T>, bool) {
        let success = self.value.is_some();
        (self.value, success)
    }
}

impl<T> From<Outcome<T>> for (Option<T>, bool) {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_outcome() {
        let outcome = Outcome::succeeded("track", 3, 1);

        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&"track"));
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(outcome.prompts(), 1);
        assert_eq!(outcome.into_parts(), (Some("track"), true));
    }

    #[test]
    fn test_failed_outcome_has_no_value() {
        let outcome: Outcome<String> = Outcome::failed(4, 2);

        assert!(!outcome.is_success());
        assert_eq!(outcome.value(), None);
        let (value, success): (Option<String>, bool) = outcome.into();
        assert_eq!(value, None);
        assert!(!success);
    }
}
