// UI components for the TUI

pub mod log;
pub mod panel;
pub mod status;

pub use log::LogComponent;
pub use panel::PanelComponent;
pub use status::StatusComponent;
