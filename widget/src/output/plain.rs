//! Plain text widget rendering
//!
//! No colors; one labelled row per category followed by a usage bar
//! against total physical memory.

use anyhow::Result;

use super::{format_megabytes, fraction_of, progress_bar, WidgetRenderer};
use crate::timeline::{DemoEntry, EntryState, MemoryEntry};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const NO_DATA: &str = "--";

#[derive(Debug, Clone)]
pub struct PlainRenderer {
    bar_width: usize,
}

impl Default for PlainRenderer {
    fn default() -> Self {
        Self::new(20)
    }
}

impl PlainRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    fn row(title: &str, desc: &str) -> String {
        format!("{:<10}{:>16}", format!("{}:", title), desc)
    }
}

impl WidgetRenderer for PlainRenderer {
    fn render_memory(&self, entry: &MemoryEntry) -> Result<String> {
        let total = entry.total_physical_bytes;
        let mut lines = vec![format!(
            "[{}] Memory statistics",
            entry.date.format(DATE_FORMAT)
        )];

        match &entry.state {
            EntryState::Sampled { snapshot } => {
                for (title, bytes) in [
                    ("Free", snapshot.free_bytes()),
                    ("Active", snapshot.active_bytes()),
                    ("Inactive", snapshot.inactive_bytes()),
                    ("Wire", snapshot.wired_bytes()),
                ] {
                    lines.push(Self::row(title, &format_megabytes(bytes)));
                    lines.push(progress_bar(fraction_of(bytes, total), self.bar_width));
                }
            }
            EntryState::Placeholder => {
                for title in ["Free", "Active", "Inactive", "Wire"] {
                    lines.push(Self::row(title, NO_DATA));
                    lines.push(progress_bar(0.0, self.bar_width));
                }
            }
            EntryState::Unavailable { reason } => {
                lines.push(format!("Memory statistics unavailable: {}", reason));
            }
        }

        lines.push(Self::row("Total", &format_megabytes(total)));
        Ok(lines.join("\n"))
    }

    fn render_demo(&self, entry: &DemoEntry) -> Result<String> {
        Ok(format!("Demo {}", entry.date.format(DATE_FORMAT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};
    use vmstat_sampler::{MemorySnapshot, PageCounts};

    const GIB: u64 = 1024 * 1024 * 1024;

    fn sampled_entry() -> MemoryEntry {
        let pages = PageCounts::new(GIB / 4096, 0, 2 * GIB / 4096, 256);
        let snapshot = MemorySnapshot::from_pages(Utc::now(), pages, 4096, 16 * GIB).unwrap();
        MemoryEntry {
            date: Local::now(),
            total_physical_bytes: 16 * GIB,
            state: EntryState::Sampled { snapshot },
        }
    }

    #[test]
    fn test_render_sampled() {
        let text = PlainRenderer::new(16).render_memory(&sampled_entry()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("Memory statistics"));
        assert_eq!(lines[1], PlainRenderer::row("Free", "1024.00 MB"));
        assert_eq!(lines[2], "[#---------------]");
        assert_eq!(lines[3], PlainRenderer::row("Active", "0.00 MB"));
        assert_eq!(lines[4], "[----------------]");
        assert_eq!(lines[5], PlainRenderer::row("Inactive", "2048.00 MB"));
        assert_eq!(lines[7], PlainRenderer::row("Wire", "1.00 MB"));
        assert_eq!(lines[9], PlainRenderer::row("Total", "16384.00 MB"));
    }

    #[test]
    fn test_render_placeholder_shows_no_zeros() {
        let entry = MemoryEntry {
            date: Local::now(),
            total_physical_bytes: GIB,
            state: EntryState::Placeholder,
        };
        let text = PlainRenderer::default().render_memory(&entry).unwrap();

        assert!(text.contains(&PlainRenderer::row("Free", NO_DATA)));
        assert!(!text.contains("0.00 MB"));
        assert!(text.contains("1024.00 MB"));
    }

    #[test]
    fn test_render_unavailable() {
        let entry = MemoryEntry {
            date: Local::now(),
            total_physical_bytes: GIB,
            state: EntryState::Unavailable {
                reason: "kernel statistics query failed with status 5".into(),
            },
        };
        let text = PlainRenderer::default().render_memory(&entry).unwrap();

        assert!(text.contains("unavailable: kernel statistics query failed with status 5"));
        assert!(!text.contains("Free:"));
    }

    #[test]
    fn test_render_demo() {
        let entry = DemoEntry { date: Local::now() };
        let text = PlainRenderer::default().render_demo(&entry).unwrap();
        assert!(text.starts_with("Demo "));
    }
}
