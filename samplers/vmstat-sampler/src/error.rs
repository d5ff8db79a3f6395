//! Sampling failure type
//!
//! Every way a memory sample can go wrong is a [`SamplingFailure`]. The
//! sampler never substitutes a zeroed snapshot for a failed query.

use std::path::PathBuf;

/// Error returned when the kernel memory statistics cannot be read
#[derive(Debug, thiserror::Error)]
pub enum SamplingFailure {
    /// The kernel query returned a non-success status code
    #[error("kernel statistics query failed with status {code}")]
    KernelStatus { code: i32 },

    /// The statistics source could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required counter was absent from the kernel report
    #[error("counter '{name}' missing from kernel report")]
    MissingCounter { name: &'static str },

    /// A counter was present but not a valid page count
    #[error("counter '{name}' has invalid value '{value}'")]
    InvalidCounter { name: String, value: String },

    /// The platform reported a non-positive page size
    #[error("invalid page size reported by platform: {value}")]
    InvalidPageSize { value: i64 },

    /// Converting pages to bytes does not fit in 64 bits
    #[error("{category} byte count overflows u64 ({pages} pages of {page_size} bytes)")]
    Overflow {
        category: &'static str,
        pages: u64,
        page_size: u64,
    },

    /// No kernel statistics interface is known for this target
    #[error("memory sampling is not supported on {os}")]
    Unsupported { os: &'static str },

    /// Failure injected by a fake kernel source
    #[error("simulated failure: {0}")]
    Simulated(String),
}
