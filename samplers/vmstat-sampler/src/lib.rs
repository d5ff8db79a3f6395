//! VM Statistics Sampler
//!
//! Reads the kernel's virtual-memory page counters (free, active, inactive,
//! wired) and converts them to byte counts, alongside total installed RAM.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vmstat_sampler::{sample_memory, total_physical_memory};
//!
//! match sample_memory() {
//!     Ok(snapshot) => println!("free: {} bytes", snapshot.free_bytes()),
//!     Err(e) => eprintln!("sampling failed: {}", e),
//! }
//! println!("total: {} bytes", total_physical_memory());
//! ```
//!
//! # Testing against a fake kernel
//!
//! ```rust
//! use vmstat_sampler::{FixedKernel, MemorySampler, PageCounts};
//!
//! let kernel = FixedKernel::new(PageCounts::new(100, 0, 0, 0), 4096, 1 << 30);
//! let snapshot = MemorySampler::with_kernel(kernel).sample_memory().unwrap();
//! assert_eq!(snapshot.free_bytes(), 409_600);
//! ```

pub mod error;
pub mod kernel;
pub mod sampler;
pub mod types;

pub use error::SamplingFailure;
pub use kernel::{FixedKernel, HostKernel, KernelSource};
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use kernel::ProcVmstat;
pub use sampler::{sample_memory, total_physical_memory, MemorySampler};
pub use types::{MemorySnapshot, PageCounts};
