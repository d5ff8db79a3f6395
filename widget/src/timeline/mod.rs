//! Widget timelines
//!
//! A provider hands out a [`Timeline`] of entries plus a [`RefreshPolicy`]
//! saying when to ask again. The [`Scheduler`] drives that loop and renders
//! each entry.

mod demo;
mod memory;
mod scheduler;

pub use demo::{DemoEntry, DemoProvider};
pub use memory::{EntryState, MemoryEntry, MemoryProvider};
pub use scheduler::Scheduler;

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::output::Renderable;

/// Available widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Memory statistics, refreshed every 5 seconds
    Memory,
    /// Clock placeholder, refreshed every minute
    Demo,
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Memory => "memory",
            WidgetKind::Demo => "demo",
        }
    }

    pub fn default_interval(&self) -> Duration {
        match self {
            WidgetKind::Memory => Duration::from_secs(5),
            WidgetKind::Demo => Duration::from_secs(60),
        }
    }
}

/// A single renderable point on a timeline
pub trait TimelineEntry: Renderable {
    fn date(&self) -> DateTime<Local>;
}

/// When the provider should be asked for the next timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Refresh at the given instant
    After(DateTime<Local>),
    /// Never refresh
    Never,
}

impl RefreshPolicy {
    /// Refresh `interval` after `now`, or never if that date is out of range
    pub fn after_interval(now: DateTime<Local>, interval: Duration) -> Self {
        TimeDelta::from_std(interval)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .map(RefreshPolicy::After)
            .unwrap_or(RefreshPolicy::Never)
    }
}

/// Entries to display and the policy for refreshing them
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    pub entries: Vec<E>,
    pub policy: RefreshPolicy,
}

impl<E> Timeline<E> {
    pub fn new(entries: Vec<E>, policy: RefreshPolicy) -> Self {
        Self { entries, policy }
    }
}

/// Source of timeline entries for one widget
pub trait TimelineProvider: Send + Sync {
    type Entry: TimelineEntry + Send;

    fn kind(&self) -> WidgetKind;

    /// Entry shown before any data is available
    fn placeholder(&self) -> Self::Entry;

    /// A single entry for the current moment
    fn snapshot(&self) -> Self::Entry;

    /// The timeline starting at `now`
    fn timeline(&self, now: DateTime<Local>) -> Timeline<Self::Entry>;
}
