//! memwidget Common - Shared utilities for memwidget crates
//!
//! - **Initialization**: [`init_tracing`] for stderr logging with verbosity levels
//! - **Configuration**: [`find_config_file`] for project-local or global config lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use memwidget_common::{find_config_file, init_tracing};
//!
//! init_tracing("memwidget", 1)?;
//! if let Some(path) = find_config_file(".memwidget.toml", "memwidget") {
//!     tracing::info!("Using config {}", path.display());
//! }
//! ```

pub mod config;
pub mod init;

pub use config::{find_config_file, find_config_file_from};
pub use init::{init_tracing, level_for_verbosity};
