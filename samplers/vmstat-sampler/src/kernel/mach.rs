//! Mach host statistics (macOS, iOS)

#![allow(deprecated)]

use std::mem;

use libc::{
    c_int, host_statistics64, mach_host_self, mach_msg_type_number_t, vm_statistics64,
    HOST_VM_INFO64, HOST_VM_INFO64_COUNT,
};

use crate::error::SamplingFailure;
use crate::types::PageCounts;

const KERN_SUCCESS: c_int = 0;

/// Query `HOST_VM_INFO64` for the current page counters
pub(super) fn vm_statistics() -> Result<PageCounts, SamplingFailure> {
    // SAFETY: vm_statistics64 is plain old data; all-zero is a valid value.
    let mut vm_stat: vm_statistics64 = unsafe { mem::zeroed() };
    let mut count: mach_msg_type_number_t = HOST_VM_INFO64_COUNT as _;

    // SAFETY: the buffer is a vm_statistics64 and `count` holds its size in
    // integer_t units, as host_statistics64 requires for HOST_VM_INFO64.
    let kr = unsafe {
        host_statistics64(
            mach_host_self(),
            HOST_VM_INFO64 as c_int,
            &mut vm_stat as *mut vm_statistics64 as *mut _,
            &mut count,
        )
    };

    if kr != KERN_SUCCESS {
        tracing::debug!(status = kr, "host_statistics64 failed");
        return Err(SamplingFailure::KernelStatus { code: kr });
    }

    Ok(PageCounts {
        free: vm_stat.free_count as u64,
        active: vm_stat.active_count as u64,
        inactive: vm_stat.inactive_count as u64,
        wired: vm_stat.wire_count as u64,
    })
}
