//! System monitoring core functionality.
//!
//! Snapshots, the delta-based sampler, the optional GPU capability, the
//! per-channel history ring buffers and the threshold tiers.

mod gpu;
mod history;
mod metrics;
mod sampler;
pub mod thresholds;

pub use gpu::{GpuProvider, GpuSampler, GpuVendor};
pub use history::{HistoryChannel, MetricsHistory, RingBuffer, HISTORY_CAPACITY};
pub use metrics::{
    percent_of, CpuSnapshot, DiskSnapshot, DiskSnapshotList, GpuSnapshot, MemorySnapshot,
    MAX_DISKS,
};
pub use sampler::{CpuTimes, CpuUsage, Sampler, SystemBackend};
pub use thresholds::{temperature_tier, tier_for, Thresholds, Tier};

#[cfg(test)]
pub(crate) use sampler::tests::ScriptedBackend;
