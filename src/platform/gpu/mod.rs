//! GPU-specific platform code.
//!
//! Only NVIDIA (via NVML) is supported. Discovery happens once at startup.

mod nvidia;

pub use nvidia::NvidiaGpuProvider;

use crate::core::system_monitor::GpuProvider;
use crate::error::{DashError, Result};

/// Attempt to get an available GPU provider
///
/// Returns error if no GPU is available.
pub fn get_gpu_provider() -> Result<Box<dyn GpuProvider>> {
    match NvidiaGpuProvider::new() {
        Ok(provider) => Ok(Box::new(provider)),
        Err(e) => Err(DashError::gpu_not_available(format!(
            "No supported GPU found ({})",
            e
        ))),
    }
}
