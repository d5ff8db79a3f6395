//! Memory statistics widget

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;
use vmstat_sampler::{HostKernel, KernelSource, MemorySampler, MemorySnapshot};

use super::{RefreshPolicy, Timeline, TimelineEntry, TimelineProvider, WidgetKind};
use crate::output::{Renderable, WidgetRenderer};

/// What a memory entry has to show
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryState {
    /// No sample yet
    Placeholder,
    /// A successful sample
    Sampled { snapshot: MemorySnapshot },
    /// The sample failed; the reason is shown instead of data
    Unavailable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryEntry {
    pub date: DateTime<Local>,
    pub total_physical_bytes: u64,
    #[serde(flatten)]
    pub state: EntryState,
}

impl MemoryEntry {
    pub fn snapshot(&self) -> Option<&MemorySnapshot> {
        match &self.state {
            EntryState::Sampled { snapshot } => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.state, EntryState::Unavailable { .. })
    }
}

impl TimelineEntry for MemoryEntry {
    fn date(&self) -> DateTime<Local> {
        self.date
    }
}

impl Renderable for MemoryEntry {
    fn render(&self, renderer: &dyn WidgetRenderer) -> anyhow::Result<String> {
        renderer.render_memory(self)
    }
}

/// Samples memory once per timeline refresh
#[derive(Debug, Clone)]
pub struct MemoryProvider<K: KernelSource = HostKernel> {
    sampler: MemorySampler<K>,
    interval: Duration,
}

impl Default for MemoryProvider<HostKernel> {
    fn default() -> Self {
        Self::new(MemorySampler::new(), WidgetKind::Memory.default_interval())
    }
}

impl<K: KernelSource> MemoryProvider<K> {
    pub fn new(sampler: MemorySampler<K>, interval: Duration) -> Self {
        Self { sampler, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn entry_at(&self, date: DateTime<Local>) -> MemoryEntry {
        match self.sampler.sample_memory() {
            Ok(snapshot) => MemoryEntry {
                date,
                total_physical_bytes: snapshot.total_physical_bytes(),
                state: EntryState::Sampled { snapshot },
            },
            Err(e) => {
                tracing::warn!(error = %e, "Memory sample unavailable");
                MemoryEntry {
                    date,
                    total_physical_bytes: self.sampler.total_physical_memory(),
                    state: EntryState::Unavailable {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}

impl<K: KernelSource> TimelineProvider for MemoryProvider<K> {
    type Entry = MemoryEntry;

    fn kind(&self) -> WidgetKind {
        WidgetKind::Memory
    }

    fn placeholder(&self) -> MemoryEntry {
        MemoryEntry {
            date: Local::now(),
            total_physical_bytes: self.sampler.total_physical_memory(),
            state: EntryState::Placeholder,
        }
    }

    fn snapshot(&self) -> MemoryEntry {
        self.entry_at(Local::now())
    }

    fn timeline(&self, now: DateTime<Local>) -> Timeline<MemoryEntry> {
        Timeline::new(
            vec![self.entry_at(now)],
            RefreshPolicy::after_interval(now, self.interval),
        )
    }
}
