//! GBX Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the GBX workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`GbxError`] and the [`Result`] alias used by every crate
//! - **Logging**: `tracing` subscriber setup driven by [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use gbx_common::logging::{init_logging, LogConfig};
//! use gbx_common::{GbxError, Result};
//!
//! fn run() -> Result<()> {
//!     let config = LogConfig::from_env().map_err(|e| GbxError::Config(e.to_string()))?;
//!     init_logging(&config).map_err(|e| GbxError::Config(e.to_string()))?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{GbxError, Result};
