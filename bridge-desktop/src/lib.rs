//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop and terminal hosts
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `OperatorPrompt` using a blocking line read from standard input
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::ConsolePrompt;
//! use bridge_traits::OperatorPrompt;
//! use std::sync::Arc;
//!
//! let prompt: Arc<dyn OperatorPrompt> = Arc::new(ConsolePrompt::stdio());
//! // Use in core configuration
//! ```

mod prompt;

pub use prompt::ConsolePrompt;
