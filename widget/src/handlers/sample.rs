//! Sample command handler
//!
//! Take one memory sample and print it.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use vmstat_sampler::{FixedKernel, KernelSource, MemorySampler};

use super::CommandContext;
use crate::output::WidgetRenderer;
use crate::timeline::{EntryState, MemoryEntry};

/// Handle the `sample` command
pub fn run_sample(ctx: &CommandContext, demo_data: bool) -> Result<()> {
    let renderer = ctx.renderer();
    let mut stdout = std::io::stdout().lock();
    if demo_data {
        let sampler = MemorySampler::with_kernel(FixedKernel::demo());
        sample_once(&sampler, renderer.as_ref(), &mut stdout)
    } else {
        sample_once(&MemorySampler::new(), renderer.as_ref(), &mut stdout)
    }
}

/// Sample once and write the rendered entry; a failed sample is an error
pub fn sample_once<K: KernelSource>(
    sampler: &MemorySampler<K>,
    renderer: &dyn WidgetRenderer,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = sampler
        .sample_memory()
        .context("Memory sampling failed")?;

    let entry = MemoryEntry {
        date: DateTime::<Local>::from(snapshot.timestamp()),
        total_physical_bytes: snapshot.total_physical_bytes(),
        state: EntryState::Sampled { snapshot },
    };
    writeln!(out, "{}", renderer.render_memory(&entry)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{JsonRenderer, PlainRenderer};
    use vmstat_sampler::{PageCounts, SamplingFailure};

    #[test]
    fn test_sample_once_renders_text() {
        let sampler = MemorySampler::with_kernel(FixedKernel::demo());
        let mut out = Vec::new();
        sample_once(&sampler, &PlainRenderer::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Free:"));
        assert!(text.contains("16384.00 MB"));
    }

    #[test]
    fn test_sample_once_renders_json() {
        let kernel = FixedKernel::new(PageCounts::new(100, 0, 0, 0), 4096, 1 << 30);
        let mut out = Vec::new();
        sample_once(&MemorySampler::with_kernel(kernel), &JsonRenderer, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["snapshot"]["free_bytes"], 409_600);
    }

    #[test]
    fn test_sample_once_propagates_failure() {
        let sampler = MemorySampler::with_kernel(FixedKernel::failing("denied", 1 << 30));
        let mut out = Vec::new();
        let err = sample_once(&sampler, &PlainRenderer::default(), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(err.downcast_ref::<SamplingFailure>().is_some());
    }
}
