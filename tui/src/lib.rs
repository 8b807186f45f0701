//! Terminal front end for the tool panel: renders the panel next to a session log
//! and drives a scripted realtime session from the keyboard.

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod utils;

// Re-export main types for convenience
pub use app::App;
