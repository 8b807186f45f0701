use std::sync::Arc;
use tokio::sync::mpsc;
use toolpanel_core::{
    outbound_channel, AppEvent, ClientEvent, EventBus, EventWatcher, MockSession, PanelConfig,
    PanelView, SessionEvent,
};

/// Kind of a session log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Server event received from the session
    Inbound,
    /// Client event sent to the session
    Outbound,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
}

/// Application state
pub struct AppState {
    /// Tool dispatch for the current session
    pub watcher: EventWatcher,

    /// Scripted realtime session
    pub session: MockSession,

    /// Full server event buffer in the configured order
    pub events: Vec<SessionEvent>,

    /// Event receiver for handling app events
    pub event_receiver: mpsc::UnboundedReceiver<AppEvent>,

    /// Events the panel sent to the session
    pub outbound_receiver: mpsc::UnboundedReceiver<ClientEvent>,

    /// Session log shown next to the panel
    pub log: Vec<LogEntry>,

    /// Log scroll state
    pub log_scroll: usize,

    /// Whether to auto-scroll the log to bottom on new entries
    pub auto_scroll_log: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: &PanelConfig, event_bus: EventBus) -> Self {
        let (sink, outbound_receiver) = outbound_channel();
        let watcher = EventWatcher::new(Arc::new(sink)).with_order(config.buffer_order);
        let session = MockSession::new(event_bus.sender());

        Self {
            watcher,
            session,
            events: Vec::new(),
            event_receiver: event_bus.into_receiver(),
            outbound_receiver,
            log: Vec::new(),
            log_scroll: 0,
            auto_scroll_log: true,
            should_quit: false,
        }
    }

    /// What the panel should show right now
    pub fn panel_view(&self) -> PanelView {
        let store = self.watcher.store();
        PanelView::build(self.watcher.is_active(), store.palette(), store.emotions())
    }

    pub fn push_log(&mut self, kind: LogKind, text: impl Into<String>) {
        self.log.push(LogEntry {
            kind,
            text: text.into(),
        });
        self.auto_scroll_log = true;
    }
}
