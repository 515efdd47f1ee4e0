//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the retry core:
//! - Logging and tracing infrastructure
//! - Retry configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that other modules depend on.
//! It establishes the logging conventions and the configuration surface
//! (retry budget, interactivity) used throughout the workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use config::RetryConfig;
pub use error::{Error, Result};
