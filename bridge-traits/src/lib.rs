//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host.
//!
//! ## Overview
//!
//! This crate defines the contract between the core library and host-specific
//! implementations. Each trait represents a capability the core requires but
//! that must be provided differently per host (terminal, desktop GUI, batch
//! job).
//!
//! ## Traits
//!
//! - [`OperatorPrompt`](prompt::OperatorPrompt) - Ask an operator whether to
//!   extend an exhausted retry budget
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Host     | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Terminal | `bridge-desktop`    | ✅ |
//! | Batch    | [`NonInteractive`](prompt::NonInteractive) | ✅ |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Host implementations should convert their own
//! errors (I/O, closed input) into `BridgeError`.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` on native targets (see
//! [`PlatformSendSync`](platform::PlatformSendSync)) so that a single
//! implementation can be shared behind an `Arc`.
//!
//! ## Examples
//!
//! ### Implementing OperatorPrompt
//!
//! ```ignore
//! use bridge_traits::error::Result;
//! use bridge_traits::prompt::OperatorPrompt;
//!
//! pub struct DialogPrompt;
//!
//! impl OperatorPrompt for DialogPrompt {
//!     fn should_continue(&self, budget: u32) -> Result<bool> {
//!         Ok(show_yes_no_dialog(&format!("Retry {} more times?", budget)))
//!     }
//! }
//! ```

pub mod error;
pub mod logging;
pub mod platform;
pub mod prompt;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use prompt::{NonInteractive, OperatorPrompt};
