//! Live terminal dashboard.
//!
//! Plain crossterm output: the cursor is homed every cycle and rows are
//! overwritten in place.

mod app;
pub mod layout;
mod render;
mod terminal;
pub mod widgets;

pub use app::{run_dashboard, DashboardApp};
pub use render::{FrameData, Renderer};
pub use terminal::{terminal_size, TerminalSession};
