//! Watch command handler
//!
//! Run a widget timeline on stdout until interrupted.

use anyhow::Result;
use vmstat_sampler::{FixedKernel, MemorySampler};

use super::CommandContext;
use crate::output::OutputFormat;
use crate::timeline::{DemoProvider, MemoryProvider, Scheduler, TimelineProvider, WidgetKind};

/// Handle the `watch` command
pub async fn run_watch(
    ctx: &CommandContext,
    widget: WidgetKind,
    interval: Option<u64>,
    count: Option<usize>,
    demo_data: bool,
) -> Result<()> {
    let interval = ctx.interval_for(widget, interval)?;

    let refreshes = match widget {
        WidgetKind::Memory if demo_data => {
            let sampler = MemorySampler::with_kernel(FixedKernel::demo());
            drive(ctx, MemoryProvider::new(sampler, interval), count).await?
        }
        WidgetKind::Memory => {
            drive(ctx, MemoryProvider::new(MemorySampler::new(), interval), count).await?
        }
        WidgetKind::Demo => drive(ctx, DemoProvider::new(interval), count).await?,
    };

    tracing::info!(widget = widget.name(), refreshes, "Widget stopped");
    Ok(())
}

async fn drive<P: TimelineProvider>(
    ctx: &CommandContext,
    provider: P,
    count: Option<usize>,
) -> Result<usize> {
    // The placeholder frame is only useful to a human watching.
    let show_placeholder = ctx.output_format() == OutputFormat::Text;
    let mut scheduler = Scheduler::new(provider, ctx.renderer(), std::io::stdout())
        .with_max_refreshes(count)
        .with_placeholder(show_placeholder);
    scheduler.run().await
}
