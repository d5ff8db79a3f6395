//! Timeline driver
//!
//! Renders the placeholder, then repeatedly asks the provider for a
//! timeline, renders its entries and waits for the refresh date.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use tokio::time::Instant;

use super::{RefreshPolicy, TimelineProvider};
use crate::output::{Renderable, WidgetRenderer};

pub struct Scheduler<P: TimelineProvider, W: Write> {
    provider: P,
    renderer: Box<dyn WidgetRenderer>,
    out: W,
    max_refreshes: Option<usize>,
    show_placeholder: bool,
}

impl<P: TimelineProvider, W: Write> Scheduler<P, W> {
    pub fn new(provider: P, renderer: Box<dyn WidgetRenderer>, out: W) -> Self {
        Self {
            provider,
            renderer,
            out,
            max_refreshes: None,
            show_placeholder: true,
        }
    }

    /// Stop after this many timeline refreshes
    pub fn with_max_refreshes(mut self, max: Option<usize>) -> Self {
        self.max_refreshes = max;
        self
    }

    /// Whether to render the placeholder entry before the first refresh
    pub fn with_placeholder(mut self, show: bool) -> Self {
        self.show_placeholder = show;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until Ctrl+C, the refresh limit, or a `Never` policy
    pub async fn run(&mut self) -> Result<usize> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Cannot listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Run until `shutdown` resolves, the refresh limit, or a `Never` policy.
    ///
    /// Returns the number of refreshes performed. A limit of zero renders
    /// nothing.
    pub async fn run_until<F: Future<Output = ()>>(&mut self, shutdown: F) -> Result<usize> {
        tokio::pin!(shutdown);
        let kind = self.provider.kind();

        if self.limit_reached(0) {
            return Ok(0);
        }

        tracing::info!(widget = kind.name(), "Starting widget timeline");

        if self.show_placeholder {
            let placeholder = self.provider.placeholder();
            self.emit(&placeholder)?;
        }

        let mut refreshes = 0;
        loop {
            let started = Instant::now();
            let now = Local::now();
            let timeline = self.provider.timeline(now);
            for entry in &timeline.entries {
                self.emit(entry)?;
            }
            refreshes += 1;
            tracing::debug!(widget = kind.name(), refreshes, "Timeline refreshed");

            if self.limit_reached(refreshes) {
                break;
            }

            let Some(delay) = refresh_delay(&timeline.policy, now) else {
                tracing::debug!(widget = kind.name(), "Timeline will not refresh");
                break;
            };

            tokio::select! {
                _ = tokio::time::sleep_until(started + delay) => {}
                _ = &mut shutdown => {
                    tracing::info!(widget = kind.name(), "Stopping widget timeline");
                    break;
                }
            }
        }

        Ok(refreshes)
    }

    fn limit_reached(&self, refreshes: usize) -> bool {
        self.max_refreshes.is_some_and(|max| refreshes >= max)
    }

    fn emit(&mut self, entry: &impl Renderable) -> Result<()> {
        let rendered = entry.render(self.renderer.as_ref())?;
        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Delay from `now` until the policy's refresh date, `None` for `Never`.
///
/// Measured against the `now` the timeline was built from, so a wall-clock
/// change after the refresh cannot stretch the wait past the interval.
fn refresh_delay(policy: &RefreshPolicy, now: DateTime<Local>) -> Option<Duration> {
    match policy {
        RefreshPolicy::After(next) => Some((*next - now).to_std().unwrap_or(Duration::ZERO)),
        RefreshPolicy::Never => None,
    }
}
