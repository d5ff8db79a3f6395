//! E2E test: widget timelines through the library API

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use memwidget::output::{JsonRenderer, PlainRenderer};
use memwidget::timeline::{MemoryProvider, Scheduler, WidgetKind};
use vmstat_sampler::{KernelSource, MemorySampler, PageCounts, SamplingFailure};

const GIB: u64 = 1024 * 1024 * 1024;

/// Kernel that fails every other statistics query
struct FlakyKernel {
    calls: AtomicUsize,
}

impl KernelSource for FlakyKernel {
    fn vm_statistics(&self) -> Result<PageCounts, SamplingFailure> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call % 2 == 1 {
            return Err(SamplingFailure::KernelStatus { code: 5 });
        }
        Ok(PageCounts::new(GIB / 4096, 0, 0, 0))
    }

    fn page_size(&self) -> Result<u64, SamplingFailure> {
        Ok(4096)
    }

    fn physical_memory(&self) -> u64 {
        16 * GIB
    }
}

fn flaky_provider() -> MemoryProvider<FlakyKernel> {
    let kernel = FlakyKernel {
        calls: AtomicUsize::new(0),
    };
    MemoryProvider::new(
        MemorySampler::with_kernel(kernel),
        WidgetKind::Memory.default_interval(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_flaky_kernel_alternates_entries() {
    let mut scheduler = Scheduler::new(flaky_provider(), Box::new(JsonRenderer), Vec::new())
        .with_max_refreshes(Some(4))
        .with_placeholder(false);

    let refreshes = scheduler
        .run_until(std::future::pending())
        .await
        .expect("Timeline failed");
    assert_eq!(refreshes, 4);

    let output = String::from_utf8(scheduler.into_output()).unwrap();
    let states: Vec<String> = output
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["state"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        states,
        ["sampled", "unavailable", "sampled", "unavailable"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_entries_never_show_zero_rows() {
    let mut scheduler = Scheduler::new(flaky_provider(), Box::new(PlainRenderer::default()), Vec::new())
        .with_max_refreshes(Some(2))
        .with_placeholder(false);
    scheduler.run_until(std::future::pending()).await.unwrap();

    let output = String::from_utf8(scheduler.into_output()).unwrap();
    // One sampled frame with a 1 GiB free row, one failure frame without rows.
    assert_eq!(output.matches("Free:").count(), 1);
    assert!(output.contains("1024.00 MB"));
    assert!(output.contains("unavailable: kernel statistics query failed with status 5"));
}

#[tokio::test(start_paused = true)]
async fn test_waits_for_refresh_interval() {
    let provider = MemoryProvider::new(
        MemorySampler::with_kernel(FlakyKernel {
            calls: AtomicUsize::new(0),
        }),
        Duration::from_secs(5),
    );
    let mut scheduler = Scheduler::new(provider, Box::new(JsonRenderer), Vec::new())
        .with_max_refreshes(Some(3))
        .with_placeholder(false);

    let start = tokio::time::Instant::now();
    scheduler.run_until(std::future::pending()).await.unwrap();
    let elapsed = start.elapsed();

    // Two sleeps between three refreshes.
    assert!(elapsed >= Duration::from_secs(9), "elapsed {:?}", elapsed);
    assert!(elapsed <= Duration::from_secs(11), "elapsed {:?}", elapsed);
}
