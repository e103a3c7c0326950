#[cfg(feature = "nvml")]
use nvml_wrapper::{enum_wrappers::device::TemperatureSensor, Device, Nvml};

use crate::core::system_monitor::{percent_of, GpuProvider, GpuSnapshot, GpuVendor};
use crate::error::{DashError, Result};

/// NVIDIA GPU provider using NVML
///
/// NVML itself locates `libnvidia-ml` / `nvml.dll` at runtime, so a machine
/// without the driver simply fails discovery.
pub struct NvidiaGpuProvider {
    #[cfg(feature = "nvml")]
    nvml: Option<Nvml>,
    #[cfg_attr(not(feature = "nvml"), allow(dead_code))]
    device_index: u32,
}

impl NvidiaGpuProvider {
    /// Initialize NVML and select the first GPU
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init()
                .map_err(|e| DashError::gpu_not_available(format!("Failed to init NVML: {}", e)))?;

            let count = nvml.device_count().map_err(|e| {
                DashError::gpu_not_available(format!("Failed to count GPUs: {}", e))
            })?;
            if index >= count {
                return Err(DashError::gpu_not_available(format!(
                    "GPU {} not found ({} device(s))",
                    index, count
                )));
            }

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                DashError::gpu_not_available(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml: Some(nvml),
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(DashError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn get_device(&self) -> Result<Device<'_>> {
        let nvml = self
            .nvml
            .as_ref()
            .ok_or_else(|| DashError::metric_collection("NVML already shut down"))?;
        nvml.device_by_index(self.device_index)
            .map_err(|e| DashError::metric_collection(format!("Failed to get GPU device: {}", e)))
    }
}

impl GpuProvider for NvidiaGpuProvider {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn sample(&mut self) -> Result<GpuSnapshot> {
        #[cfg(feature = "nvml")]
        {
            let device = self.get_device()?;

            let name = device
                .name()
                .unwrap_or_else(|_| "NVIDIA GPU".to_string());

            let utilization = device.utilization_rates().map(|u| u.gpu).unwrap_or(0);

            let (memory_total, memory_used) = device
                .memory_info()
                .map(|m| (m.total, m.used))
                .unwrap_or((0, 0));

            let temperature = device
                .temperature(TemperatureSensor::Gpu)
                .ok()
                .map(|t| t as i32);

            let power = device
                .power_usage()
                .map(|p| p / 1000) // mW to W
                .ok();

            Ok(GpuSnapshot {
                name,
                utilization_percent: utilization,
                memory_total,
                memory_used,
                memory_percent: percent_of(memory_used, memory_total),
                temperature_celsius: temperature,
                power_watts: power,
                available: true,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(DashError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    fn shutdown(&mut self) {
        #[cfg(feature = "nvml")]
        if let Some(nvml) = self.nvml.take() {
            if let Err(e) = nvml.shutdown() {
                log::warn!("NVML shutdown failed: {}", e);
            }
        }
    }
}
