//! Memory sampling

use chrono::Utc;

use crate::error::SamplingFailure;
use crate::kernel::{HostKernel, KernelSource};
use crate::types::MemorySnapshot;

/// Samples memory statistics from a [`KernelSource`].
///
/// Holds no state beyond the source; every call queries the kernel afresh.
#[derive(Debug, Clone, Default)]
pub struct MemorySampler<K: KernelSource = HostKernel> {
    kernel: K,
}

impl MemorySampler<HostKernel> {
    pub fn new() -> Self {
        Self { kernel: HostKernel }
    }
}

impl<K: KernelSource> MemorySampler<K> {
    /// Sample through a custom kernel source
    pub fn with_kernel(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Take a snapshot of the current memory breakdown.
    ///
    /// Any failed kernel query is returned as an error; no partial or
    /// zeroed snapshot is ever produced.
    pub fn sample_memory(&self) -> Result<MemorySnapshot, SamplingFailure> {
        let result = self.try_sample();
        match &result {
            Ok(snapshot) => tracing::trace!(
                free = snapshot.free_bytes(),
                active = snapshot.active_bytes(),
                inactive = snapshot.inactive_bytes(),
                wired = snapshot.wired_bytes(),
                page_size = snapshot.page_size(),
                "Memory sampled"
            ),
            Err(e) => tracing::debug!(error = %e, "Memory sampling failed"),
        }
        result
    }

    /// Installed physical memory in bytes
    pub fn total_physical_memory(&self) -> u64 {
        self.kernel.physical_memory()
    }

    fn try_sample(&self) -> Result<MemorySnapshot, SamplingFailure> {
        let timestamp = Utc::now();
        let pages = self.kernel.vm_statistics()?;
        let page_size = self.kernel.page_size()?;
        MemorySnapshot::from_pages(timestamp, pages, page_size, self.total_physical_memory())
    }
}

/// Sample the host kernel
pub fn sample_memory() -> Result<MemorySnapshot, SamplingFailure> {
    MemorySampler::new().sample_memory()
}

/// Installed physical memory of the host in bytes
pub fn total_physical_memory() -> u64 {
    MemorySampler::new().total_physical_memory()
}
