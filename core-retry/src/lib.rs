//! # Retry Module
//!
//! Wraps calls into a streaming service's client library with a bounded,
//! operator-extendable retry loop.
//!
//! ## Overview
//!
//! This module handles:
//! - Repeating a failing operation up to a retry budget
//! - Asking an [`OperatorPrompt`](bridge_traits::OperatorPrompt) whether to
//!   grant another budget once the current one is spent
//! - Binding client functions to named arguments ([`ApiCall`])
//!
//! Failures are never classified: network errors, authentication errors and
//! malformed arguments all count as one failed attempt. The only failure
//! signal a caller receives is [`Outcome::is_success`].
//!
//! ## Usage
//!
//! ```
//! use core_retry::RetryingInvoker;
//! use core_runtime::RetryConfig;
//!
//! let invoker = RetryingInvoker::non_interactive(RetryConfig::default());
//! let outcome = invoker.invoke(|| "42".parse::<u32>());
//!
//! assert_eq!(outcome.into_parts(), (Some(42), true));
//! ```

pub mod call;
pub mod error;
pub mod invoker;
pub mod outcome;

pub use call::{ApiCall, CallArgs};
pub use error::{CallError, Result};
pub use invoker::{RetryingInvoker, RETRY_LOG_MESSAGE};
pub use outcome::Outcome;
