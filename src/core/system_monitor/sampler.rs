//! Delta-based metric sampling on top of a platform backend.
//!
//! A [`SystemBackend`] only reads raw OS counters. The [`Sampler`] owns the
//! previous CPU counter snapshot and turns consecutive reads into the
//! normalized percentage model shared by every platform.

use log::debug;

use super::metrics::{CpuSnapshot, DiskSnapshot, DiskSnapshotList, MemorySnapshot, MAX_DISKS};
use crate::error::{DashError, Result};

/// Raw cumulative CPU counters as exposed by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuTimes {
    /// Per-state tick counters (Linux `/proc/stat`, macOS `host_processor_info`)
    Ticks {
        user: u64,
        nice: u64,
        system: u64,
        idle: u64,
    },
    /// Windows `GetSystemTimes` model: `kernel` already includes `idle`
    KernelUser { idle: u64, kernel: u64, user: u64 },
}

/// Interval percentages computed from two counter reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuUsage {
    pub user_percent: f64,
    pub system_percent: f64,
    pub idle_percent: f64,
}

impl CpuTimes {
    /// Usage over the interval `prev -> self`.
    ///
    /// Returns `None` when the counters did not advance or when the two reads
    /// come from different counter models.
    pub fn usage_since(&self, prev: &CpuTimes) -> Option<CpuUsage> {
        match (*self, *prev) {
            (
                CpuTimes::Ticks {
                    user,
                    nice,
                    system,
                    idle,
                },
                CpuTimes::Ticks {
                    user: prev_user,
                    nice: prev_nice,
                    system: prev_system,
                    idle: prev_idle,
                },
            ) => {
                let user_delta = user.saturating_sub(prev_user) + nice.saturating_sub(prev_nice);
                let system_delta = system.saturating_sub(prev_system);
                let idle_delta = idle.saturating_sub(prev_idle);
                split(user_delta, system_delta, idle_delta, user_delta + system_delta + idle_delta)
            }
            (
                CpuTimes::KernelUser { idle, kernel, user },
                CpuTimes::KernelUser {
                    idle: prev_idle,
                    kernel: prev_kernel,
                    user: prev_user,
                },
            ) => {
                let idle_delta = idle.saturating_sub(prev_idle);
                let kernel_delta = kernel.saturating_sub(prev_kernel);
                let user_delta = user.saturating_sub(prev_user);
                // kernel time counts idle time too
                let system_delta = kernel_delta.saturating_sub(idle_delta);
                split(user_delta, system_delta, idle_delta, kernel_delta + user_delta)
            }
            _ => None,
        }
    }
}

fn split(user: u64, system: u64, idle: u64, total: u64) -> Option<CpuUsage> {
    if total == 0 {
        return None;
    }
    let total = total as f64;
    Some(CpuUsage {
        user_percent: user as f64 / total * 100.0,
        system_percent: system as f64 / total * 100.0,
        idle_percent: idle as f64 / total * 100.0,
    })
}

/// Platform source of the mandatory metric domains.
///
/// One implementation exists per target OS (see `crate::platform`).
pub trait SystemBackend {
    /// Read the cumulative CPU counters
    fn cpu_times(&mut self) -> Result<CpuTimes>;

    /// Package temperature in Celsius, if the platform exposes one
    fn cpu_temperature(&mut self) -> Option<i32> {
        None
    }

    fn memory(&mut self) -> Result<MemorySnapshot>;

    fn disk(&mut self, mount_point: &str) -> Result<DiskSnapshot>;
}

/// Stateful sampler owning the CPU tick baseline
pub struct Sampler<B: SystemBackend> {
    backend: B,
    previous: Option<CpuTimes>,
}

impl<B: SystemBackend> Sampler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            previous: None,
        }
    }

    /// Record the CPU baseline and, when `check_memory` is set, check that
    /// memory can be read.
    ///
    /// A failure here means the dashboard has nothing to show.
    pub fn init(&mut self, check_memory: bool) -> Result<()> {
        self.sample_cpu()
            .map_err(|e| DashError::system_monitor(format!("CPU counters unavailable: {}", e)))?;
        if check_memory {
            self.backend
                .memory()
                .map_err(|e| DashError::system_monitor(format!("memory query failed: {}", e)))?;
        }
        Ok(())
    }

    /// Sample CPU usage since the previous call.
    ///
    /// The first call after construction only stores the baseline and reports
    /// an idle snapshot.
    pub fn sample_cpu(&mut self) -> Result<CpuSnapshot> {
        let current = self.backend.cpu_times()?;
        let previous = self.previous.replace(current);

        let mut snapshot = match previous.and_then(|prev| current.usage_since(&prev)) {
            Some(usage) => CpuSnapshot {
                user_percent: usage.user_percent,
                system_percent: usage.system_percent,
                idle_percent: usage.idle_percent,
                temperature_celsius: None,
            },
            None => CpuSnapshot::idle(),
        };
        snapshot.temperature_celsius = self.backend.cpu_temperature();
        Ok(snapshot)
    }

    pub fn sample_memory(&mut self) -> Result<MemorySnapshot> {
        self.backend.memory()
    }

    pub fn sample_disk(&mut self, mount_point: &str) -> Result<DiskSnapshot> {
        self.backend.disk(mount_point)
    }

    /// Sample up to `max` (never more than [`MAX_DISKS`]) mount points.
    ///
    /// Mount points that fail to resolve are skipped. Fails only when none resolved.
    pub fn sample_disks<S: AsRef<str>>(
        &mut self,
        mount_points: &[S],
        max: usize,
    ) -> Result<DiskSnapshotList> {
        let limit = max.min(MAX_DISKS);
        let mut disks = DiskSnapshotList::with_capacity(limit.min(mount_points.len()));

        for mount_point in mount_points.iter().take(limit) {
            match self.sample_disk(mount_point.as_ref()) {
                Ok(disk) => disks.push(disk),
                Err(e) => debug!("Skipping disk {}: {}", mount_point.as_ref(), e),
            }
        }

        if disks.is_empty() {
            return Err(DashError::metric_collection(format!(
                "none of {} mount point(s) could be read",
                mount_points.len().min(limit)
            )));
        }
        Ok(disks)
    }

}
