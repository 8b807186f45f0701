use crate::events::EventSink;
use crate::protocol::ClientEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Delay between handling a function call and asking the model to continue,
/// so the call's output settles before the next turn starts
pub const FOLLOW_UP_DELAY: Duration = Duration::from_millis(500);

/// Schedules delayed `response.create` prompts tied to the current session
pub struct ResponsePrompter {
    sink: Arc<dyn EventSink>,
    pending: Vec<JoinHandle<()>>,
}

impl ResponsePrompter {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            pending: Vec::new(),
        }
    }

    /// Send `instructions` after [`FOLLOW_UP_DELAY`]. Outside a tokio runtime the prompt is skipped.
    pub fn schedule(&mut self, instructions: impl Into<String>) -> bool {
        self.schedule_after(instructions, FOLLOW_UP_DELAY)
    }

    /// Returns whether the prompt was scheduled
    pub fn schedule_after(&mut self, instructions: impl Into<String>, delay: Duration) -> bool {
        self.prune();

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Follow-up prompt skipped, no async runtime: {}", e);
                return false;
            }
        };

        let sink = self.sink.clone();
        let instructions = instructions.into();
        debug!("Scheduling follow-up prompt in {}ms", delay.as_millis());

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = sink.send_event(ClientEvent::response_create(instructions)) {
                warn!("Follow-up prompt dropped: {}", e);
            }
        });
        self.pending.push(handle);
        true
    }

    /// Abort every prompt that has not fired yet, returning how many were aborted
    pub fn cancel_all(&mut self) -> usize {
        self.prune();
        let cancelled = self.pending.len();
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if cancelled > 0 {
            debug!("Cancelled {} pending follow-up prompts", cancelled);
        }
        cancelled
    }

    /// Number of prompts still waiting to fire
    pub fn pending(&mut self) -> usize {
        self.prune();
        self.pending.len()
    }

    fn prune(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
    }
}

impl Drop for ResponsePrompter {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.abort();
        }
    }
}
