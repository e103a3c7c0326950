// Filesystem usage shared by the unix backends

use std::ffi::CString;
use std::mem::MaybeUninit;

use crate::core::system_monitor::DiskSnapshot;
use crate::error::{DashError, Result};

/// Disk usage for the filesystem containing `mount_point`.
///
/// Free space is what unprivileged users can still allocate (`f_bavail`).
pub fn statvfs_disk(mount_point: &str) -> Result<DiskSnapshot> {
    let path = CString::new(mount_point)
        .map_err(|_| DashError::metric_collection(format!("Invalid path: {:?}", mount_point)))?;

    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: `path` is NUL-terminated and `stat` is a valid out-pointer
    let rc = unsafe { libc::statvfs(path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(DashError::metric_collection(format!(
            "statvfs({}) failed: {}",
            mount_point,
            std::io::Error::last_os_error()
        )));
    }
    // SAFETY: statvfs returned success, so the struct is initialized
    let stat = unsafe { stat.assume_init() };

    let block_size = stat.f_frsize as u64;
    let total = (stat.f_blocks as u64).saturating_mul(block_size);
    let free = (stat.f_bavail as u64).saturating_mul(block_size);

    Ok(DiskSnapshot::from_free(mount_point, total, free))
}
