use crate::protocol::{ClientEvent, SessionEvent};
use tokio::sync::mpsc;

/// Events that flow through the application
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A server event arrived from the realtime session
    Server(SessionEvent),

    /// The session became active
    SessionStarted,

    /// The session ended (user stopped it or the transport closed)
    SessionEnded,

    /// Session-side notice, logged only
    Background(String),
}

/// Event bus for communication between components
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a sender handle for the event bus
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: self.sender.clone(),
        }
    }

    /// Get the receiver (should only be used by the main event loop)
    pub fn into_receiver(self) -> mpsc::UnboundedReceiver<AppEvent> {
        self.receiver
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for sending events to the event bus
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::UnboundedSender<AppEvent>,
}

impl EventSender {
    /// Send an event to the bus
    pub fn send(&self, event: AppEvent) -> Result<(), EventSendError> {
        self.inner
            .send(event)
            .map_err(|_| EventSendError::ChannelClosed)
    }

    /// Forward a server event
    pub fn send_server_event(&self, event: SessionEvent) -> Result<(), EventSendError> {
        self.send(AppEvent::Server(event))
    }
}

/// Outgoing side of the realtime session.
///
/// Sends are fire-and-forget: the caller learns only whether the event was
/// accepted, never how the session reacted to it.
pub trait EventSink: Send + Sync {
    fn send_event(&self, event: ClientEvent) -> Result<(), EventSendError>;
}

/// Channel-backed sink; the transport owns the receiving end
#[derive(Debug, Clone)]
pub struct OutboundSender {
    inner: mpsc::UnboundedSender<ClientEvent>,
}

impl EventSink for OutboundSender {
    fn send_event(&self, event: ClientEvent) -> Result<(), EventSendError> {
        self.inner
            .send(event)
            .map_err(|_| EventSendError::ChannelClosed)
    }
}

/// Create an outgoing sink and the receiver the transport drains
pub fn outbound_channel() -> (OutboundSender, mpsc::UnboundedReceiver<ClientEvent>) {
    let (inner, receiver) = mpsc::unbounded_channel();
    (OutboundSender { inner }, receiver)
}

/// Errors that can occur when sending events
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventSendError {
    #[error("Event channel is closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut receiver = bus.into_receiver();

        sender.send_server_event(SessionEvent::Other).unwrap();

        let event = receiver.recv().await.unwrap();
        match event {
            AppEvent::Server(SessionEvent::Other) => {}
            _ => panic!("Expected Server event"),
        }
    }

    #[tokio::test]
    async fn test_outbound_sink_reports_closed_channel() {
        let (sink, receiver) = outbound_channel();
        drop(receiver);

        let result = sink.send_event(ClientEvent::response_create("hello"));
        assert_eq!(result, Err(EventSendError::ChannelClosed));
    }
}
