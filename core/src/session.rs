//! Scripted stand-in for the realtime transport so the panel can be driven
//! without a network connection.

use crate::events::{AppEvent, EventSender};
use crate::protocol::{ClientEvent, FunctionCall, MessageItem, OutputItem, ResponseBody, SessionEvent};
use crate::tools::{Emotion, ToolName};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const PALETTES: &[(&str, [&str; 5])] = &[
    ("ocean", ["#03045e", "#0077b6", "#00b4d8", "#90e0ef", "#caf0f8"]),
    ("forest", ["#081c15", "#1b4332", "#2d6a4f", "#52b788", "#b7e4c7"]),
    ("sunset", ["#ff4800", "#ff6d00", "#ff9e00", "#ffc300", "#ffe066"]),
];

/// What the simulated user does on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTurn {
    AskForPalette,
    Speak(Emotion),
    /// The model calls a tool the panel does not know
    UnknownTool,
    /// The model produces arguments that do not match the schema
    Garbled,
}

/// Mock realtime session that answers user turns and client events with server events
pub struct MockSession {
    event_sender: EventSender,
    delay: Duration,
    turns: u64,
    generation: Arc<AtomicU64>,
    active: bool,
}

impl MockSession {
    pub fn new(event_sender: EventSender) -> Self {
        Self {
            event_sender,
            delay: Duration::from_millis(300), // Simulate model latency
            turns: 0,
            generation: Arc::new(AtomicU64::new(0)),
            active: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.turns = 0;
        let _ = self.event_sender.send(AppEvent::SessionStarted);
        self.emit_later(SessionEvent::SessionCreated {
            event_id: Some(new_id("event")),
            session: Some(json!({ "id": new_id("sess"), "object": "realtime.session" })),
        });
    }

    /// End the session; replies still in flight are dropped
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.generation.fetch_add(1, Ordering::SeqCst);
        let _ = self.event_sender.send(AppEvent::SessionEnded);
    }

    pub fn user_turn(&mut self, turn: UserTurn) {
        if !self.active {
            return;
        }
        let event = Self::response_for(turn, self.turns);
        self.turns += 1;
        self.emit_later(event);
    }

    /// React to an event the panel sent to the session
    pub fn handle_client_event(&mut self, event: &ClientEvent) {
        if !self.active {
            debug!("Dropping {} sent after the session ended", event.type_name());
            return;
        }
        match event {
            ClientEvent::SessionUpdate { session, .. } => {
                let tools: Vec<&str> = session.tools.iter().map(|t| t.name.as_str()).collect();
                let _ = self
                    .event_sender
                    .send(AppEvent::Background(format!("session.update: {}", tools.join(", "))));
                self.emit_later(SessionEvent::SessionUpdated {
                    event_id: Some(new_id("event")),
                    session: serde_json::to_value(session).ok(),
                });
            }
            ClientEvent::ResponseCreate { response, .. } => {
                let _ = self.event_sender.send(AppEvent::Background(format!(
                    "response.create: {}",
                    response.instructions.trim()
                )));
                self.emit_later(assistant_message(&format!(
                    "(following instructions) {}",
                    response.instructions.trim()
                )));
            }
        }
    }

    /// The `response.done` the model would produce for a user turn
    pub fn response_for(turn: UserTurn, index: u64) -> SessionEvent {
        let call = match turn {
            UserTurn::AskForPalette => {
                let (theme, colors) = PALETTES[index as usize % PALETTES.len()];
                function_call(
                    ToolName::DisplayColorPalette.as_str(),
                    json!({ "theme": theme, "colors": colors }).to_string(),
                )
            }
            UserTurn::Speak(emotion) => function_call(
                ToolName::RecordUserEmotion.as_str(),
                json!({ "user_emotion": emotion }).to_string(),
            ),
            UserTurn::UnknownTool => {
                function_call("set_room_lighting", json!({ "brightness": 40 }).to_string())
            }
            UserTurn::Garbled => function_call(
                ToolName::RecordUserEmotion.as_str(),
                "{\"user_emotion\": ".to_string(),
            ),
        };

        SessionEvent::ResponseDone {
            event_id: Some(new_id("event")),
            response: ResponseBody {
                id: Some(new_id("resp")),
                status: Some("completed".to_string()),
                output: vec![OutputItem::FunctionCall(call)],
            },
        }
    }

    fn emit_later(&self, event: SessionEvent) {
        let sender = self.event_sender.clone();
        let generation = self.generation.clone();
        let expected = generation.load(Ordering::SeqCst);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == expected {
                let _ = sender.send_server_event(event);
            }
        });
    }
}

fn function_call(name: &str, arguments: String) -> FunctionCall {
    FunctionCall {
        id: Some(new_id("item")),
        call_id: Some(new_id("call")),
        name: name.to_string(),
        arguments,
        status: Some("completed".to_string()),
        extra: [("object".to_string(), json!("realtime.item"))].into_iter().collect(),
    }
}

fn assistant_message(text: &str) -> SessionEvent {
    SessionEvent::ResponseDone {
        event_id: Some(new_id("event")),
        response: ResponseBody {
            id: Some(new_id("resp")),
            status: Some("completed".to_string()),
            output: vec![OutputItem::Message(MessageItem {
                id: Some(new_id("item")),
                role: Some("assistant".to_string()),
                content: vec![json!({ "type": "text", "text": text })],
            })],
        },
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}
