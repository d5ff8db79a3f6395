//! `/proc/vmstat` page counters (Linux, Android)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SamplingFailure;
use crate::types::PageCounts;

const DEFAULT_PATH: &str = "/proc/vmstat";

/// Reader for the kernel's `/proc/vmstat` report
#[derive(Debug, Clone)]
pub struct ProcVmstat {
    path: PathBuf,
}

impl Default for ProcVmstat {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl ProcVmstat {
    /// Read counters from a different file (fixtures, chroots)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the report
    pub fn read(&self) -> Result<PageCounts, SamplingFailure> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| SamplingFailure::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        parse_vmstat(&content)
    }
}

/// Parse `/proc/vmstat` content into page counts.
///
/// Active and inactive combine the anon and file LRU lists; wired maps to
/// the unevictable list.
pub fn parse_vmstat(content: &str) -> Result<PageCounts, SamplingFailure> {
    let counters: HashMap<&str, &str> = content
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            Some((parts.next()?, parts.next()?))
        })
        .collect();

    let get = |name: &'static str| -> Result<u64, SamplingFailure> {
        let raw = counters
            .get(name)
            .ok_or(SamplingFailure::MissingCounter { name })?;
        raw.parse::<u64>().map_err(|_| SamplingFailure::InvalidCounter {
            name: name.to_string(),
            value: raw.to_string(),
        })
    };

    let sum = |a: &'static str, b: &'static str| -> Result<u64, SamplingFailure> {
        let (x, y) = (get(a)?, get(b)?);
        x.checked_add(y).ok_or_else(|| SamplingFailure::InvalidCounter {
            name: format!("{} + {}", a, b),
            value: format!("{} + {}", x, y),
        })
    };

    Ok(PageCounts {
        free: get("nr_free_pages")?,
        active: sum("nr_active_anon", "nr_active_file")?,
        inactive: sum("nr_inactive_anon", "nr_inactive_file")?,
        wired: get("nr_unevictable")?,
    })
}
