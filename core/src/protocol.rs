//! Realtime session wire types.
//!
//! Server events (received from the session):
//! - session.created - Session created
//! - session.updated - Session configuration updated
//! - response.done - Response complete, carries the output items
//!
//! Client events (sent to the session):
//! - session.update - Register tools and instructions
//! - response.create - Ask the model for a new response
//!
//! Every other server event type decodes as `Other` and is never inspected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Session Configuration
// =============================================================================

/// Declaration of a single function-call tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool type (always "function")
    #[serde(rename = "type")]
    pub kind: String,
    /// Function name
    pub name: String,
    /// Function description
    pub description: String,
    /// Function parameters JSON schema
    pub parameters: Value,
    /// Whether the model must follow the parameter schema exactly
    pub strict: bool,
}

/// Tool choice strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    Auto,
    None,
    Required,
}

/// Session configuration sent once per session with `session.update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub tools: Vec<ToolSchema>,
    pub instructions: String,
    pub tool_choice: ToolChoice,
}

/// Body of a `response.create` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseConfig {
    pub instructions: String,
}

// =============================================================================
// Output Items
// =============================================================================

/// A function call emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    pub name: String,
    /// JSON-encoded arguments, decoded by the matching tool handler
    pub arguments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any other fields of the item (`object`, server additions), in arrival order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: None,
            call_id: None,
            name: name.into(),
            arguments: arguments.into(),
            status: None,
            extra: Map::new(),
        }
    }

    /// The call as it appeared in the response, including its `type` tag
    pub fn to_raw(&self) -> Value {
        serde_json::to_value(OutputItem::FunctionCall(self.clone())).unwrap_or(Value::Null)
    }
}

/// An assistant or user message item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Vec<Value>,
}

impl MessageItem {
    /// Concatenated text or transcript parts
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| {
                part.get("text")
                    .or_else(|| part.get("transcript"))
                    .and_then(Value::as_str)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Item in a completed response's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputItem {
    #[serde(rename = "function_call")]
    FunctionCall(FunctionCall),
    #[serde(rename = "message")]
    Message(MessageItem),
    #[serde(other)]
    Other,
}

/// Body of a `response.done` event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

// =============================================================================
// Events
// =============================================================================

/// Events received from the realtime session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    #[serde(rename = "session.created")]
    SessionCreated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<Value>,
    },
    #[serde(rename = "session.updated")]
    SessionUpdated {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<Value>,
    },
    #[serde(rename = "response.done")]
    ResponseDone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        response: ResponseBody,
    },
    #[serde(other)]
    Other,
}

impl SessionEvent {
    /// Wire name of the event, `"other"` for unrecognized types
    pub fn type_name(&self) -> &'static str {
        match self {
            SessionEvent::SessionCreated { .. } => "session.created",
            SessionEvent::SessionUpdated { .. } => "session.updated",
            SessionEvent::ResponseDone { .. } => "response.done",
            SessionEvent::Other => "other",
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        match self {
            SessionEvent::SessionCreated { event_id, .. }
            | SessionEvent::SessionUpdated { event_id, .. }
            | SessionEvent::ResponseDone { event_id, .. } => event_id.as_deref(),
            SessionEvent::Other => None,
        }
    }

    pub fn is_session_created(&self) -> bool {
        matches!(self, SessionEvent::SessionCreated { .. })
    }
}

/// Events sent to the realtime session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "session.update")]
    SessionUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        session: SessionConfig,
    },
    #[serde(rename = "response.create")]
    ResponseCreate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_id: Option<String>,
        response: ResponseConfig,
    },
}

impl ClientEvent {
    pub fn session_update(session: SessionConfig) -> Self {
        ClientEvent::SessionUpdate {
            event_id: Some(new_event_id()),
            session,
        }
    }

    pub fn response_create(instructions: impl Into<String>) -> Self {
        ClientEvent::ResponseCreate {
            event_id: Some(new_event_id()),
            response: ResponseConfig {
                instructions: instructions.into(),
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ClientEvent::SessionUpdate { .. } => "session.update",
            ClientEvent::ResponseCreate { .. } => "response.create",
        }
    }
}

fn new_event_id() -> String {
    format!("evt_{}", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_response_done_with_function_call() {
        let raw = json!({
            "type": "response.done",
            "event_id": "event_42",
            "response": {
                "id": "resp_1",
                "status": "completed",
                "output": [
                    {
                        "type": "function_call",
                        "id": "item_1",
                        "call_id": "call_1",
                        "name": "record_user_emotion",
                        "arguments": "{\"user_emotion\":\"sad\"}",
                        "status": "completed"
                    },
                    {
                        "type": "message",
                        "role": "assistant",
                        "content": [{ "type": "audio", "transcript": "I hear you." }]
                    },
                    { "type": "reasoning", "summary": [] }
                ]
            }
        });

        let event: SessionEvent = serde_json::from_value(raw).unwrap();
        let SessionEvent::ResponseDone { event_id, response } = event else {
            panic!("Expected ResponseDone");
        };
        assert_eq!(event_id.as_deref(), Some("event_42"));
        assert_eq!(response.id.as_deref(), Some("resp_1"));
        assert_eq!(response.output.len(), 3);

        match &response.output[0] {
            OutputItem::FunctionCall(call) => {
                assert_eq!(call.name, "record_user_emotion");
                assert_eq!(call.call_id.as_deref(), Some("call_1"));
            }
            other => panic!("Expected FunctionCall, got {:?}", other),
        }
        match &response.output[1] {
            OutputItem::Message(message) => assert_eq!(message.text(), "I hear you."),
            other => panic!("Expected Message, got {:?}", other),
        }
        assert_eq!(response.output[2], OutputItem::Other);
    }

    #[test]
    fn test_unknown_event_types_decode_as_other() {
        let event: SessionEvent = serde_json::from_value(json!({
            "type": "input_audio_buffer.speech_started",
            "audio_start_ms": 120
        }))
        .unwrap();
        assert_eq!(event, SessionEvent::Other);
        assert_eq!(event.type_name(), "other");
    }

    #[test]
    fn test_response_done_without_output() {
        let event: SessionEvent = serde_json::from_value(json!({
            "type": "response.done",
            "response": { "status": "cancelled" }
        }))
        .unwrap();
        match event {
            SessionEvent::ResponseDone { response, .. } => assert!(response.output.is_empty()),
            other => panic!("Expected ResponseDone, got {:?}", other),
        }
    }

    #[test]
    fn test_response_create_wire_shape() {
        let event = ClientEvent::response_create("acknowledge the emotion");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "response.create");
        assert_eq!(value["response"]["instructions"], "acknowledge the emotion");
        assert!(value["event_id"].as_str().unwrap().starts_with("evt_"));
    }

    #[test]
    fn test_function_call_raw_keeps_type_tag() {
        let call = FunctionCall::new("display_color_palette", "{}");
        let raw = call.to_raw();
        assert_eq!(raw["type"], "function_call");
        assert_eq!(raw["name"], "display_color_palette");
        assert!(raw.get("call_id").is_none());
    }

    #[test]
    fn test_function_call_raw_keeps_unmodelled_fields() {
        let item = serde_json::json!({
            "id": "item_7",
            "object": "realtime.item",
            "type": "function_call",
            "status": "completed",
            "name": "display_color_palette",
            "call_id": "call_7",
            "arguments": "{}",
            "server_hint": { "latency_ms": 12 }
        });

        let OutputItem::FunctionCall(call) = serde_json::from_value(item.clone()).unwrap() else {
            panic!("Expected FunctionCall");
        };
        assert_eq!(call.extra["object"], "realtime.item");
        assert!(call.extra.get("type").is_none());

        // Same fields and values as received
        assert_eq!(call.to_raw(), item);
    }
}
