use std::io;
use thiserror::Error;

/// Custom error type for the dashboard
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("System monitor error: {0}")]
    SystemMonitor(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    pub fn system_monitor<S: Into<String>>(msg: S) -> Self {
        DashError::SystemMonitor(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        DashError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        DashError::MetricCollection(msg.into())
    }

    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        DashError::Terminal(msg.into())
    }
}
