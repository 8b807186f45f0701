use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use toolpanel_core::{
    outbound_channel, BufferOrder, ClientEvent, EventWatcher, PanelView, SessionEvent,
    FOLLOW_UP_DELAY,
};
use tracing::{debug, info};

/// Result of replaying a recorded event buffer
#[derive(Debug)]
pub struct ReplayOutcome {
    /// Plain-text panel after the last event
    pub panel: Vec<String>,
    /// Events the panel sent to the session, in send order
    pub sent: Vec<ClientEvent>,
    pub errors: Vec<String>,
}

/// Load a recorded buffer: a JSON array of server events
pub fn load_events(path: &Path) -> Result<Vec<SessionEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let events: Vec<SessionEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of session events", path.display()))?;
    Ok(events)
}

/// Deliver the recording one event at a time, the way the transport would,
/// then wait for pending follow-up prompts before collecting what was sent
pub async fn replay(recorded: Vec<SessionEvent>, order: BufferOrder) -> ReplayOutcome {
    let (sink, mut receiver) = outbound_channel();
    let mut watcher = EventWatcher::new(Arc::new(sink)).with_order(order);
    watcher.set_session_active(true);

    let chronological: Vec<SessionEvent> = match order {
        BufferOrder::NewestFirst => recorded.into_iter().rev().collect(),
        BufferOrder::OldestFirst => recorded,
    };
    info!("Replaying {} events", chronological.len());

    let mut buffer = Vec::with_capacity(chronological.len());
    let mut errors = Vec::new();
    for event in chronological {
        debug!("Delivering {}", event.type_name());
        order.push(&mut buffer, event);
        let report = watcher.on_events(&buffer);
        errors.extend(report.errors.iter().map(|e| e.to_string()));
    }

    if watcher.pending_prompts() > 0 {
        tokio::time::sleep(FOLLOW_UP_DELAY + Duration::from_millis(50)).await;
    }

    let mut sent = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        sent.push(event);
    }

    let store = watcher.store();
    let panel = PanelView::build(true, store.palette(), store.emotions()).to_lines();

    ReplayOutcome { panel, sent, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn recording() -> serde_json::Value {
        // Newest first, as the transport delivers it
        json!([
            {
                "type": "response.done",
                "response": {
                    "id": "resp_2",
                    "output": [{
                        "type": "function_call",
                        "name": "record_user_emotion",
                        "arguments": "{\"user_emotion\":\"happy\"}"
                    }]
                }
            },
            { "type": "response.audio.done" },
            {
                "type": "response.done",
                "response": {
                    "id": "resp_1",
                    "output": [{
                        "type": "function_call",
                        "name": "display_color_palette",
                        "arguments": "{\"theme\":\"ocean\",\"colors\":[\"#001\",\"#002\",\"#003\",\"#004\",\"#005\"]}"
                    }]
                }
            },
            { "type": "session.created", "session": { "id": "sess_1" } }
        ])
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_recording() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", recording()).unwrap();

        let events = load_events(file.path()).unwrap();
        assert_eq!(events.len(), 4);

        let outcome = replay(events, BufferOrder::NewestFirst).await;
        assert!(outcome.errors.is_empty());

        let types: Vec<&str> = outcome.sent.iter().map(|e| e.type_name()).collect();
        assert_eq!(types, vec!["session.update", "response.create", "response.create"]);

        assert_eq!(outcome.panel[1], "Theme: ocean");
        assert!(outcome.panel.contains(&"  [#005]".to_string()));
        assert_eq!(outcome.panel.last().unwrap(), "Recorded Emotion: happy");
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_reports_malformed_arguments() {
        let events = vec![
            SessionEvent::SessionCreated { event_id: None, session: None },
            serde_json::from_value(json!({
                "type": "response.done",
                "response": {
                    "output": [{
                        "type": "function_call",
                        "name": "record_user_emotion",
                        "arguments": "{}"
                    }]
                }
            }))
            .unwrap(),
        ];

        let outcome = replay(events, BufferOrder::OldestFirst).await;
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.sent.len(), 1);
        assert_eq!(
            outcome.panel,
            vec!["Color Palette Tool", "Ask for advice on a color palette..."]
        );
    }

    #[test]
    fn test_load_events_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"type\":\"session.created\"}}").unwrap();

        let err = load_events(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a JSON array"));
    }
}
