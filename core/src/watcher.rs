//! Reacts to the session's event buffer: registers tools once per session and
//! dispatches function calls from completed responses to their handlers.

use crate::config::BufferOrder;
use crate::events::{EventSendError, EventSink};
use crate::prompter::ResponsePrompter;
use crate::protocol::{OutputItem, ResponseBody, SessionEvent};
use crate::store::ResultStore;
use crate::tools::{HandlerRegistry, ToolError, ToolName, ToolRegistry};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors surfaced from a single event-handling pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatchError {
    #[error("Tool registration failed: {0}")]
    Registration(#[from] EventSendError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// What one `on_events` pass did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchReport {
    pub registration_sent: bool,
    pub handled: Vec<ToolName>,
    /// Function names with no handler
    pub ignored: Vec<String>,
    pub errors: Vec<WatchError>,
    /// The newest response was already processed in this session
    pub duplicate: bool,
}

impl DispatchReport {
    pub fn is_noop(&self) -> bool {
        !self.registration_sent
            && self.handled.is_empty()
            && self.ignored.is_empty()
            && self.errors.is_empty()
    }
}

/// State that lives exactly as long as one session
#[derive(Debug, Default)]
pub struct PanelSession {
    registered: bool,
    store: ResultStore,
    processed: HashSet<String>,
}

impl PanelSession {
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn reset(&mut self) {
        self.registered = false;
        self.store.clear();
        self.processed.clear();
    }
}

/// Watches the session event buffer and drives tool dispatch
pub struct EventWatcher {
    registry: ToolRegistry,
    handlers: HandlerRegistry,
    sink: Arc<dyn EventSink>,
    prompter: ResponsePrompter,
    order: BufferOrder,
    session: PanelSession,
    active: bool,
}

impl EventWatcher {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            registry: ToolRegistry::new(),
            handlers: HandlerRegistry::new(),
            prompter: ResponsePrompter::new(sink.clone()),
            sink,
            order: BufferOrder::default(),
            session: PanelSession::default(),
            active: false,
        }
    }

    pub fn with_order(mut self, order: BufferOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> BufferOrder {
        self.order
    }

    pub fn session(&self) -> &PanelSession {
        &self.session
    }

    pub fn store(&self) -> &ResultStore {
        &self.session.store
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending_prompts(&mut self) -> usize {
        self.prompter.pending()
    }

    /// Track session activity; going inactive cancels pending prompts and resets all state
    pub fn set_session_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;

        if active {
            info!("Session active");
        } else {
            let cancelled = self.prompter.cancel_all();
            self.session.reset();
            info!("Session ended, state reset ({} pending prompts cancelled)", cancelled);
        }
    }

    /// Handle the full event buffer, ordered according to the configured [`BufferOrder`].
    /// Follow-up prompts are only scheduled when a tokio runtime is available.
    pub fn on_events(&mut self, events: &[SessionEvent]) -> DispatchReport {
        let mut report = DispatchReport::default();
        if events.is_empty() {
            return report;
        }

        if let Some(first) = self.order.oldest(events) {
            if !self.session.registered && first.is_session_created() {
                self.register(&mut report);
            }
        }

        if let Some(SessionEvent::ResponseDone { event_id, response }) = self.order.newest(events) {
            let key = response
                .id
                .clone()
                .or_else(|| event_id.clone())
                .unwrap_or_else(|| format!("#{}", events.len() - 1));

            if self.session.processed.insert(key.clone()) {
                self.dispatch(response, &mut report);
            } else {
                debug!("Response {} already processed, skipping", key);
                report.duplicate = true;
            }
        }

        report
    }

    fn register(&mut self, report: &mut DispatchReport) {
        match self.sink.send_event(self.registry.session_update()) {
            Ok(()) => {
                self.session.registered = true;
                report.registration_sent = true;
                info!("Registered {} tools with the session", self.registry.specs().len());
            }
            Err(e) => {
                warn!("Tool registration not sent: {}", e);
                report.errors.push(e.into());
            }
        }
    }

    fn dispatch(&mut self, response: &ResponseBody, report: &mut DispatchReport) {
        for item in &response.output {
            let OutputItem::FunctionCall(call) = item else {
                continue;
            };

            let Some(handler) = self.handlers.get(&call.name) else {
                debug!("Ignoring call to unknown tool {}", call.name);
                report.ignored.push(call.name.clone());
                continue;
            };

            debug!("Model called {} with arguments: {}", call.name, call.arguments);
            match handler.handle(call) {
                Ok(result) => {
                    let tool = result.tool();
                    self.session.store.apply(result);
                    self.prompter.schedule(handler.follow_up());
                    report.handled.push(tool);
                }
                Err(e) => {
                    error!("{}", e);
                    report.errors.push(e.into());
                }
            }
        }
    }
}
