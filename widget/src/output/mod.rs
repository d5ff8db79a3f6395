//! Widget rendering
//!
//! Formatting helpers plus a [`WidgetRenderer`] trait that decouples
//! timeline entries from how they are displayed. [`PlainRenderer`] draws
//! text rows with usage bars; [`JsonRenderer`] emits one JSON object per
//! entry for scripts.

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod json;
mod plain;

pub use json::JsonRenderer;
pub use plain::PlainRenderer;

use crate::timeline::{DemoEntry, MemoryEntry};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Output format for widget entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Turns timeline entries into displayable text
pub trait WidgetRenderer: Send + Sync {
    fn render_memory(&self, entry: &MemoryEntry) -> Result<String>;

    fn render_demo(&self, entry: &DemoEntry) -> Result<String>;
}

/// An entry that knows which renderer method draws it
pub trait Renderable {
    fn render(&self, renderer: &dyn WidgetRenderer) -> Result<String>;
}

/// Create a renderer for the given format
pub fn renderer_for(format: OutputFormat, bar_width: usize) -> Box<dyn WidgetRenderer> {
    match format {
        OutputFormat::Text => Box::new(PlainRenderer::new(bar_width)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Format a byte count as megabytes with two decimals, e.g. `"1024.00 MB"`
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// `part / total`, or 0.0 when `total` is zero
pub fn fraction_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}

/// Clamp a progress value into `[0, 1]`; NaN becomes 0
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// A `width`-cell text bar filled to `progress`
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = (clamp_progress(progress) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
