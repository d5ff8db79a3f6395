//! Memory snapshot type

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PageCounts;
use crate::error::SamplingFailure;

/// A single point-in-time reading of memory statistics.
///
/// Page-derived fields are exact multiples of `page_size`. Their sum is not
/// expected to equal `total_physical_bytes`: the kernel tracks other
/// categories (speculative, compressed, purgeable) that are not reported here.
///
/// Only [`MemorySnapshot::from_pages`] builds one, so it is serialized for
/// output but never deserialized:
///
/// ```compile_fail
/// let snapshot: vmstat_sampler::MemorySnapshot =
///     serde_json::from_str(r#"{"page_size":4096,"free_bytes":7}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    timestamp: DateTime<Utc>,
    page_size: u64,
    free_bytes: u64,
    active_bytes: u64,
    inactive_bytes: u64,
    wired_bytes: u64,
    total_physical_bytes: u64,
}

impl MemorySnapshot {
    /// Build a snapshot by converting page counts to bytes.
    ///
    /// Fails with [`SamplingFailure::InvalidPageSize`] for a zero page size
    /// and with [`SamplingFailure::Overflow`] when a count times the page
    /// size does not fit in 64 bits.
    pub fn from_pages(
        timestamp: DateTime<Utc>,
        pages: PageCounts,
        page_size: u64,
        total_physical_bytes: u64,
    ) -> Result<Self, SamplingFailure> {
        if page_size == 0 {
            return Err(SamplingFailure::InvalidPageSize { value: 0 });
        }

        Ok(Self {
            timestamp,
            page_size,
            free_bytes: pages_to_bytes("free", pages.free, page_size)?,
            active_bytes: pages_to_bytes("active", pages.active, page_size)?,
            inactive_bytes: pages_to_bytes("inactive", pages.inactive, page_size)?,
            wired_bytes: pages_to_bytes("wired", pages.wired, page_size)?,
            total_physical_bytes,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn free_bytes(&self) -> u64 {
        self.free_bytes
    }

    pub fn active_bytes(&self) -> u64 {
        self.active_bytes
    }

    pub fn inactive_bytes(&self) -> u64 {
        self.inactive_bytes
    }

    pub fn wired_bytes(&self) -> u64 {
        self.wired_bytes
    }

    pub fn total_physical_bytes(&self) -> u64 {
        self.total_physical_bytes
    }

    /// Sum of the four reported categories (saturating).
    ///
    /// Informational only; usually less than `total_physical_bytes`.
    pub fn accounted_bytes(&self) -> u64 {
        self.free_bytes
            .saturating_add(self.active_bytes)
            .saturating_add(self.inactive_bytes)
            .saturating_add(self.wired_bytes)
    }
}

fn pages_to_bytes(category: &'static str, pages: u64, page_size: u64) -> Result<u64, SamplingFailure> {
    pages
        .checked_mul(page_size)
        .ok_or(SamplingFailure::Overflow {
            category,
            pages,
            page_size,
        })
}
