//! JSON widget rendering (one object per line)

use anyhow::Result;
use serde::Serialize;

use super::WidgetRenderer;
use crate::timeline::{DemoEntry, MemoryEntry};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    widget: &'static str,
    #[serde(flatten)]
    entry: &'a T,
}

impl WidgetRenderer for JsonRenderer {
    fn render_memory(&self, entry: &MemoryEntry) -> Result<String> {
        Ok(serde_json::to_string(&Tagged {
            widget: "memory",
            entry,
        })?)
    }

    fn render_demo(&self, entry: &DemoEntry) -> Result<String> {
        Ok(serde_json::to_string(&Tagged {
            widget: "demo",
            entry,
        })?)
    }
}
