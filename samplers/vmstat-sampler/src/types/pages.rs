//! Raw page counter types

use serde::{Deserialize, Serialize};

/// Page counts as reported by the kernel, before byte conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCounts {
    /// Pages not allocated to any use
    pub free: u64,
    /// Pages recently accessed
    pub active: u64,
    /// Pages not recently accessed, eligible for reclamation
    pub inactive: u64,
    /// Pages locked in physical memory
    pub wired: u64,
}

impl PageCounts {
    pub fn new(free: u64, active: u64, inactive: u64, wired: u64) -> Self {
        Self {
            free,
            active,
            inactive,
            wired,
        }
    }
}
