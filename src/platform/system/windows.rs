// Windows backend: GetSystemTimes, GlobalMemoryStatusEx, GetDiskFreeSpaceExW

use std::mem;
use std::ptr;

use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;
use windows_sys::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};
use windows_sys::Win32::System::Threading::GetSystemTimes;

use crate::core::system_monitor::{CpuTimes, DiskSnapshot, MemorySnapshot, SystemBackend};
use crate::error::{DashError, Result};

#[derive(Debug, Default)]
pub struct WindowsBackend;

impl WindowsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SystemBackend for WindowsBackend {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        let mut idle: FILETIME = unsafe { mem::zeroed() };
        let mut kernel: FILETIME = unsafe { mem::zeroed() };
        let mut user: FILETIME = unsafe { mem::zeroed() };

        // SAFETY: all three out-pointers are valid FILETIMEs
        let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };
        if ok == 0 {
            return Err(DashError::metric_collection(format!(
                "GetSystemTimes failed: {}",
                std::io::Error::last_os_error()
            )));
        }

        Ok(CpuTimes::KernelUser {
            idle: filetime_to_u64(&idle),
            kernel: filetime_to_u64(&kernel),
            user: filetime_to_u64(&user),
        })
    }

    fn memory(&mut self) -> Result<MemorySnapshot> {
        let mut status: MEMORYSTATUSEX = unsafe { mem::zeroed() };
        status.dwLength = mem::size_of::<MEMORYSTATUSEX>() as u32;

        // SAFETY: dwLength is set as the API requires
        let ok = unsafe { GlobalMemoryStatusEx(&mut status) };
        if ok == 0 {
            return Err(DashError::metric_collection(format!(
                "GlobalMemoryStatusEx failed: {}",
                std::io::Error::last_os_error()
            )));
        }

        let total = status.ullTotalPhys;
        let used = total.saturating_sub(status.ullAvailPhys);
        Ok(MemorySnapshot::from_used(total, used))
    }

    fn disk(&mut self, mount_point: &str) -> Result<DiskSnapshot> {
        let wide = to_wide(mount_point);
        let mut free_to_caller = 0u64;
        let mut total = 0u64;

        // SAFETY: `wide` is NUL-terminated; the total-free out-param is optional
        let ok = unsafe {
            GetDiskFreeSpaceExW(wide.as_ptr(), &mut free_to_caller, &mut total, ptr::null_mut())
        };
        if ok == 0 {
            return Err(DashError::metric_collection(format!(
                "GetDiskFreeSpaceExW({}) failed: {}",
                mount_point,
                std::io::Error::last_os_error()
            )));
        }

        Ok(DiskSnapshot::from_free(mount_point, total, free_to_caller))
    }
}

fn filetime_to_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
