//! Command handlers module
//!
//! Handler functions for CLI commands. [`CommandContext`] resolves settings
//! with priority CLI flag > config file > built-in default.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::config::WidgetFileConfig;
use crate::output::{renderer_for, OutputFormat, WidgetRenderer};
use crate::timeline::WidgetKind;

mod sample;
mod total;
mod watch;

pub use sample::run_sample;
pub use total::run_total;
pub use watch::run_watch;

/// Shared context for command handlers
pub struct CommandContext {
    pub json: bool,
    pub file_config: WidgetFileConfig,
}

impl CommandContext {
    pub fn new(json: bool, file_config: WidgetFileConfig) -> Self {
        Self { json, file_config }
    }

    /// Output format, `--json` winning over the config file
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.file_config.output.format
        }
    }

    pub fn renderer(&self) -> Box<dyn WidgetRenderer> {
        renderer_for(self.output_format(), self.file_config.memory.bar_width)
    }

    /// Refresh interval for `kind`, from the CLI flag or the config file
    pub fn interval_for(&self, kind: WidgetKind, cli_interval: Option<u64>) -> Result<Duration> {
        let secs = cli_interval.unwrap_or(match kind {
            WidgetKind::Memory => self.file_config.memory.interval,
            WidgetKind::Demo => self.file_config.demo.interval,
        });
        if secs == 0 {
            bail!("{} widget interval must be at least 1 second", kind.name());
        }
        Ok(Duration::from_secs(secs))
    }
}
