//! Workspace façade crate.
//!
//! Re-exports the retry core so hosts can depend on `mpc-retry` alone and
//! toggle the documented features (`desktop-shims`) without wiring each
//! workspace crate individually.
//!
//! ```no_run
//! use mpc_retry::{ApiCall, CoreService, RetryConfig};
//!
//! # fn main() -> mpc_retry::Result<()> {
//! let core = CoreService::new(RetryConfig::default(), None)?;
//! let mut call = ApiCall::new("playlist", |args| {
//!     let id: String = args.get("playlist_id")?;
//!     Ok(id)
//! })
//! .arg("playlist_id", "37i9dQZF1DXcBWIGoYBM5M");
//!
//! let (playlist, success) = core.call_api(&mut call);
//! # Ok(())
//! # }
//! ```

pub use bridge_traits::{NonInteractive, OperatorPrompt};
pub use core_retry::{ApiCall, CallArgs, CallError, Outcome, RetryingInvoker};
pub use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
pub use core_runtime::RetryConfig;
pub use core_service::{CoreError, CoreService, Result};

#[cfg(feature = "desktop-shims")]
pub use core_service::bootstrap_desktop;
