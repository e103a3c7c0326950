// macOS backend: Mach host statistics and statvfs disks

#![allow(deprecated)] // libc marks the mach port helpers deprecated in favor of mach2

use std::mem;
use std::ptr;

use super::unix::statvfs_disk;
use crate::core::system_monitor::{CpuTimes, DiskSnapshot, MemorySnapshot, SystemBackend};
use crate::error::{DashError, Result};

extern "C" {
    fn vm_deallocate(
        target_task: libc::vm_map_t,
        address: libc::vm_address_t,
        size: libc::vm_size_t,
    ) -> libc::kern_return_t;
}

#[derive(Debug, Default)]
pub struct MacosBackend;

impl MacosBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SystemBackend for MacosBackend {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        let mut num_cpus: libc::natural_t = 0;
        let mut info: libc::processor_info_array_t = ptr::null_mut();
        let mut info_count: libc::mach_msg_type_number_t = 0;

        // SAFETY: all out-pointers are valid for the duration of the call
        let kr = unsafe {
            libc::host_processor_info(
                libc::mach_host_self(),
                libc::PROCESSOR_CPU_LOAD_INFO,
                &mut num_cpus,
                &mut info,
                &mut info_count,
            )
        };
        if kr != libc::KERN_SUCCESS || info.is_null() {
            return Err(DashError::metric_collection(format!(
                "host_processor_info failed: {}",
                kr
            )));
        }

        let (mut user, mut nice, mut system, mut idle) = (0u64, 0u64, 0u64, 0u64);
        // SAFETY: the kernel returned `num_cpus` load-info records at `info`
        unsafe {
            let loads = std::slice::from_raw_parts(
                info as *const libc::processor_cpu_load_info,
                num_cpus as usize,
            );
            for load in loads {
                user += load.cpu_ticks[libc::CPU_STATE_USER as usize] as u64;
                nice += load.cpu_ticks[libc::CPU_STATE_NICE as usize] as u64;
                system += load.cpu_ticks[libc::CPU_STATE_SYSTEM as usize] as u64;
                idle += load.cpu_ticks[libc::CPU_STATE_IDLE as usize] as u64;
            }
            vm_deallocate(
                libc::mach_task_self(),
                info as libc::vm_address_t,
                info_count as libc::vm_size_t * mem::size_of::<libc::integer_t>() as libc::vm_size_t,
            );
        }

        Ok(CpuTimes::Ticks {
            user,
            nice,
            system,
            idle,
        })
    }

    fn memory(&mut self) -> Result<MemorySnapshot> {
        let total = physical_memory()?;

        let mut stats: libc::vm_statistics64 = unsafe { mem::zeroed() };
        let mut count = libc::HOST_VM_INFO64_COUNT;
        // SAFETY: `stats` is large enough for HOST_VM_INFO64_COUNT integers
        let kr = unsafe {
            libc::host_statistics64(
                libc::mach_host_self(),
                libc::HOST_VM_INFO64,
                &mut stats as *mut _ as libc::host_info64_t,
                &mut count,
            )
        };
        if kr != libc::KERN_SUCCESS {
            return Err(DashError::metric_collection(format!(
                "host_statistics64 failed: {}",
                kr
            )));
        }

        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64;
        let used_pages = stats.active_count as u64
            + stats.wire_count as u64
            + stats.compressor_page_count as u64;
        let used = (used_pages * page_size).min(total);

        Ok(MemorySnapshot::from_used(total, used))
    }

    fn disk(&mut self, mount_point: &str) -> Result<DiskSnapshot> {
        statvfs_disk(mount_point)
    }
}

fn physical_memory() -> Result<u64> {
    let mut total: u64 = 0;
    let mut len = mem::size_of::<u64>();
    // SAFETY: name is NUL-terminated and `total` has room for a u64
    let rc = unsafe {
        libc::sysctlbyname(
            c"hw.memsize".as_ptr(),
            &mut total as *mut u64 as *mut libc::c_void,
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 || total == 0 {
        return Err(DashError::metric_collection("sysctl hw.memsize failed"));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_backend_reads() {
        let mut backend = MacosBackend::new();
        assert!(matches!(backend.cpu_times().unwrap(), CpuTimes::Ticks { .. }));
        let mem = backend.memory().unwrap();
        assert!(mem.total_bytes > 0);
        assert!(mem.used_bytes <= mem.total_bytes);
    }
}
