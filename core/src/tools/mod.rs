pub mod types;
pub mod handlers;
pub mod registry;

#[cfg(test)]
pub mod tests;

pub use types::*;
pub use handlers::{HandlerRegistry, ToolError, ToolHandler};
pub use registry::ToolRegistry;
