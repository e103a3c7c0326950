// Linux backend: procfs counters, sysfs temperatures, statvfs disks

use std::fs;
use std::path::Path;

use super::unix::statvfs_disk;
use crate::core::system_monitor::{CpuTimes, DiskSnapshot, MemorySnapshot, SystemBackend};
use crate::error::{DashError, Result};

const PROC_STAT: &str = "/proc/stat";
const PROC_MEMINFO: &str = "/proc/meminfo";
const HWMON_DIR: &str = "/sys/class/hwmon";
const THERMAL_ZONE0: &str = "/sys/class/thermal/thermal_zone0/temp";

/// hwmon driver names that report the CPU package temperature
const CPU_HWMON_DRIVERS: &[&str] = &["coretemp", "k10temp", "zenpower", "cpu_thermal"];

#[derive(Debug, Default)]
pub struct LinuxBackend;

impl LinuxBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SystemBackend for LinuxBackend {
    fn cpu_times(&mut self) -> Result<CpuTimes> {
        let content = fs::read_to_string(PROC_STAT)?;
        parse_proc_stat(&content)
    }

    fn cpu_temperature(&mut self) -> Option<i32> {
        hwmon_cpu_temperature().or_else(|| read_millidegrees(Path::new(THERMAL_ZONE0)))
    }

    fn memory(&mut self) -> Result<MemorySnapshot> {
        let content = fs::read_to_string(PROC_MEMINFO)?;
        parse_meminfo(&content)
    }

    fn disk(&mut self, mount_point: &str) -> Result<DiskSnapshot> {
        statvfs_disk(mount_point)
    }
}

/// Parse the aggregate `cpu` line of `/proc/stat`.
///
/// irq, softirq and steal count as system time; iowait counts as idle.
/// guest time is already included in user time by the kernel.
pub fn parse_proc_stat(content: &str) -> Result<CpuTimes> {
    let line = content
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| DashError::metric_collection("no aggregate cpu line in /proc/stat"))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse::<u64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| DashError::metric_collection(format!("bad /proc/stat field: {}", e)))?;

    if fields.len() < 4 {
        return Err(DashError::metric_collection(format!(
            "expected at least 4 cpu fields, got {}",
            fields.len()
        )));
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or(0);
    let (user, nice, system, idle) = (field(0), field(1), field(2), field(3));
    let (iowait, irq, softirq, steal) = (field(4), field(5), field(6), field(7));

    Ok(CpuTimes::Ticks {
        user,
        nice,
        system: system + irq + softirq + steal,
        idle: idle + iowait,
    })
}

/// Parse `/proc/meminfo`; used memory is everything not available to new allocations
pub fn parse_meminfo(content: &str) -> Result<MemorySnapshot> {
    let mut total = None;
    let mut available = None;
    let mut free = 0u64;
    let mut buffers = 0u64;
    let mut cached = 0u64;

    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(kib) = value.parse::<u64>() else {
            continue;
        };
        let bytes = kib.saturating_mul(1024);
        match key {
            "MemTotal:" => total = Some(bytes),
            "MemAvailable:" => available = Some(bytes),
            "MemFree:" => free = bytes,
            "Buffers:" => buffers = bytes,
            "Cached:" => cached = bytes,
            _ => {}
        }
    }

    let total = total.ok_or_else(|| DashError::metric_collection("MemTotal missing"))?;
    // Kernels before 3.14 lack MemAvailable
    let available = available.unwrap_or(free.saturating_add(buffers).saturating_add(cached)).min(total);

    Ok(MemorySnapshot::from_used(total, total - available))
}

fn hwmon_cpu_temperature() -> Option<i32> {
    let entries = fs::read_dir(HWMON_DIR).ok()?;
    for entry in entries.flatten() {
        let dir = entry.path();
        let Ok(name) = fs::read_to_string(dir.join("name")) else {
            continue;
        };
        if CPU_HWMON_DRIVERS.contains(&name.trim()) {
            if let Some(temp) = read_millidegrees(&dir.join("temp1_input")) {
                return Some(temp);
            }
        }
    }
    None
}

fn read_millidegrees(path: &Path) -> Option<i32> {
    let raw = fs::read_to_string(path).ok()?;
    raw.trim().parse::<i64>().ok().map(|m| (m / 1000) as i32)
}
