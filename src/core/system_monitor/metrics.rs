/// Maximum number of disks sampled in a single refresh
pub const MAX_DISKS: usize = 16;

/// CPU utilization split, all values in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuSnapshot {
    pub user_percent: f64,
    pub system_percent: f64,
    pub idle_percent: f64,
    /// Package temperature when the backend can read one
    pub temperature_celsius: Option<i32>,
}

impl CpuSnapshot {
    /// Snapshot reported when no delta is available yet (first read, or counters did not advance)
    pub fn idle() -> Self {
        Self {
            user_percent: 0.0,
            system_percent: 0.0,
            idle_percent: 100.0,
            temperature_celsius: None,
        }
    }

    /// Busy time: user + system
    pub fn total_percent(&self) -> f64 {
        self.user_percent + self.system_percent
    }
}

impl Default for CpuSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

impl MemorySnapshot {
    /// Build a snapshot from total and used bytes; free is the remainder
    pub fn from_used(total_bytes: u64, used_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            free_bytes: total_bytes.saturating_sub(used_bytes),
            used_percent: percent_of(used_bytes, total_bytes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSnapshot {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

impl DiskSnapshot {
    /// Build a snapshot from total and available bytes; used is the remainder
    pub fn from_free(mount_point: impl Into<String>, total_bytes: u64, free_bytes: u64) -> Self {
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        Self {
            mount_point: mount_point.into(),
            total_bytes,
            used_bytes,
            free_bytes,
            used_percent: percent_of(used_bytes, total_bytes),
        }
    }
}

/// Ordered list of resolved disks, never longer than [`MAX_DISKS`]
pub type DiskSnapshotList = Vec<DiskSnapshot>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuSnapshot {
    pub name: String,
    pub utilization_percent: u32,
    pub memory_total: u64,
    pub memory_used: u64,
    pub memory_percent: f64,
    /// `None` when the provider cannot measure it
    pub temperature_celsius: Option<i32>,
    /// `None` when the provider cannot measure it
    pub power_watts: Option<u32>,
    /// `false` means there is no GPU capability at all, not a failed sample
    pub available: bool,
}

impl GpuSnapshot {
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// `used / total * 100`, or 0.0 when total is zero
pub fn percent_of(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}
