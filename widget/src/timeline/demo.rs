//! Clock-style demo widget

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::{RefreshPolicy, Timeline, TimelineEntry, TimelineProvider, WidgetKind};
use crate::output::{Renderable, WidgetRenderer};

#[derive(Debug, Clone, Serialize)]
pub struct DemoEntry {
    pub date: DateTime<Local>,
}

impl TimelineEntry for DemoEntry {
    fn date(&self) -> DateTime<Local> {
        self.date
    }
}

impl Renderable for DemoEntry {
    fn render(&self, renderer: &dyn WidgetRenderer) -> anyhow::Result<String> {
        renderer.render_demo(self)
    }
}

/// Emits the current time once per interval
#[derive(Debug, Clone)]
pub struct DemoProvider {
    interval: Duration,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new(WidgetKind::Demo.default_interval())
    }
}

impl DemoProvider {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl TimelineProvider for DemoProvider {
    type Entry = DemoEntry;

    fn kind(&self) -> WidgetKind {
        WidgetKind::Demo
    }

    fn placeholder(&self) -> DemoEntry {
        DemoEntry { date: Local::now() }
    }

    fn snapshot(&self) -> DemoEntry {
        DemoEntry { date: Local::now() }
    }

    fn timeline(&self, now: DateTime<Local>) -> Timeline<DemoEntry> {
        Timeline::new(
            vec![DemoEntry { date: now }],
            RefreshPolicy::after_interval(now, self.interval),
        )
    }
}
