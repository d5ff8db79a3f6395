//! Kernel statistics sources
//!
//! [`KernelSource`] is the narrow seam between the sampler and the host.
//! [`HostKernel`] talks to the real kernel; [`FixedKernel`] replays fixed
//! values for tests and demos.

mod fixed;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(any(target_os = "macos", target_os = "ios"))]
mod mach;

pub use fixed::FixedKernel;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::{parse_vmstat, ProcVmstat};

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::error::SamplingFailure;
use crate::types::PageCounts;

/// Source of raw memory statistics
pub trait KernelSource: Send + Sync {
    /// Query the free/active/inactive/wired page counters
    fn vm_statistics(&self) -> Result<PageCounts, SamplingFailure>;

    /// Query the kernel page size in bytes
    fn page_size(&self) -> Result<u64, SamplingFailure>;

    /// Installed physical memory in bytes
    fn physical_memory(&self) -> u64;
}

/// The running host's kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct HostKernel;

impl KernelSource for HostKernel {
    fn vm_statistics(&self) -> Result<PageCounts, SamplingFailure> {
        host_vm_statistics()
    }

    fn page_size(&self) -> Result<u64, SamplingFailure> {
        host_page_size()
    }

    fn physical_memory(&self) -> u64 {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
        );
        sys.total_memory()
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn host_vm_statistics() -> Result<PageCounts, SamplingFailure> {
    mach::vm_statistics()
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn host_vm_statistics() -> Result<PageCounts, SamplingFailure> {
    ProcVmstat::default().read()
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "linux",
    target_os = "android"
)))]
fn host_vm_statistics() -> Result<PageCounts, SamplingFailure> {
    Err(SamplingFailure::Unsupported {
        os: std::env::consts::OS,
    })
}

#[cfg(unix)]
fn host_page_size() -> Result<u64, SamplingFailure> {
    // SAFETY: sysconf has no preconditions and only reads a constant.
    let value = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if value <= 0 {
        return Err(SamplingFailure::InvalidPageSize {
            value: value as i64,
        });
    }
    Ok(value as u64)
}

#[cfg(not(unix))]
fn host_page_size() -> Result<u64, SamplingFailure> {
    Err(SamplingFailure::Unsupported {
        os: std::env::consts::OS,
    })
}
