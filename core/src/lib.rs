pub mod config;
pub mod events;
pub mod prompter;
pub mod protocol;
pub mod session;
pub mod store;
pub mod tools;
pub mod view;
pub mod watcher;

// Re-export main types for convenience
pub use config::{BufferOrder, ConfigError, PanelConfig};
pub use events::{outbound_channel, AppEvent, EventBus, EventSendError, EventSender, EventSink, OutboundSender};
pub use prompter::{ResponsePrompter, FOLLOW_UP_DELAY};
pub use protocol::{ClientEvent, FunctionCall, OutputItem, SessionEvent};
pub use session::{MockSession, UserTurn};
pub use store::ResultStore;
pub use tools::{Emotion, HandlerRegistry, ToolError, ToolName, ToolRegistry};
pub use view::{PalettePane, PanelView};
pub use watcher::{DispatchReport, EventWatcher, WatchError};
