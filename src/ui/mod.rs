// UI and formatting module

pub mod dashboard;
pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use dashboard::{run_dashboard, DashboardApp, FrameData, Renderer};
pub use formatters::format_bytes;
