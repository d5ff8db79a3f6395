//! Fixed-value kernel source for tests and demos

use super::KernelSource;
use crate::error::SamplingFailure;
use crate::types::PageCounts;

/// A [`KernelSource`] that always reports the same values.
///
/// Built with [`FixedKernel::failing`], every statistics query fails with
/// [`SamplingFailure::Simulated`] instead.
#[derive(Debug, Clone)]
pub struct FixedKernel {
    pages: PageCounts,
    page_size: u64,
    physical_memory: u64,
    failure: Option<String>,
}

impl FixedKernel {
    pub fn new(pages: PageCounts, page_size: u64, physical_memory: u64) -> Self {
        Self {
            pages,
            page_size,
            physical_memory,
            failure: None,
        }
    }

    /// A source whose statistics query always fails
    pub fn failing(reason: impl Into<String>, physical_memory: u64) -> Self {
        Self {
            pages: PageCounts::default(),
            page_size: 4096,
            physical_memory,
            failure: Some(reason.into()),
        }
    }

    /// A plausible 16 GiB machine with 4 KiB pages
    pub fn demo() -> Self {
        Self::new(
            PageCounts::new(262_144, 1_310_720, 1_048_576, 524_288),
            4096,
            16 * 1024 * 1024 * 1024,
        )
    }
}

impl KernelSource for FixedKernel {
    fn vm_statistics(&self) -> Result<PageCounts, SamplingFailure> {
        match &self.failure {
            Some(reason) => Err(SamplingFailure::Simulated(reason.clone())),
            None => Ok(self.pages),
        }
    }

    fn page_size(&self) -> Result<u64, SamplingFailure> {
        Ok(self.page_size)
    }

    fn physical_memory(&self) -> u64 {
        self.physical_memory
    }
}
