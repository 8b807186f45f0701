use crate::state::{AppState, LogKind};
use toolpanel_core::{AppEvent, ClientEvent, DispatchReport, OutputItem, SessionEvent};
use tracing::debug;

/// Handles application events from the session
pub struct EventHandler;

impl EventHandler {
    /// Handle application events
    pub fn handle_event(state: &mut AppState, event: AppEvent) {
        debug!("Handling app event: {:?}", event);
        match event {
            AppEvent::Server(server_event) => {
                if !state.watcher.is_active() {
                    debug!("Dropping {} received while inactive", server_event.type_name());
                    return;
                }
                state.push_log(LogKind::Inbound, Self::describe_server_event(&server_event));

                let order = state.watcher.order();
                order.push(&mut state.events, server_event);
                let report = state.watcher.on_events(&state.events);
                Self::log_report(state, &report);
            }
            AppEvent::SessionStarted => {
                state.events.clear();
                state.watcher.set_session_active(true);
                state.push_log(LogKind::Info, "Session started");
            }
            AppEvent::SessionEnded => {
                state.events.clear();
                state.watcher.set_session_active(false);
                state.push_log(LogKind::Info, "Session ended");
            }
            AppEvent::Background(message) => {
                debug!("Background: {}", message);
            }
        }
    }

    /// Forward an event the panel sent to the session and record it
    pub fn handle_outbound(state: &mut AppState, event: ClientEvent) {
        let text = match &event {
            ClientEvent::SessionUpdate { session, .. } => {
                format!("session.update ({} tools)", session.tools.len())
            }
            ClientEvent::ResponseCreate { response, .. } => {
                format!("response.create: {}", response.instructions.trim())
            }
        };
        state.push_log(LogKind::Outbound, text);
        state.session.handle_client_event(&event);
    }

    fn describe_server_event(event: &SessionEvent) -> String {
        match event {
            SessionEvent::ResponseDone { response, .. } => {
                let items: Vec<String> = response
                    .output
                    .iter()
                    .map(|item| match item {
                        OutputItem::FunctionCall(call) => format!("{}({})", call.name, call.arguments),
                        OutputItem::Message(message) => format!("\"{}\"", message.text()),
                        OutputItem::Other => "other".to_string(),
                    })
                    .collect();
                format!("response.done [{}]", items.join(", "))
            }
            other => other.type_name().to_string(),
        }
    }

    fn log_report(state: &mut AppState, report: &DispatchReport) {
        if report.registration_sent {
            state.push_log(LogKind::Info, "Tools registered");
        }
        for tool in &report.handled {
            state.push_log(LogKind::Info, format!("Handled {}", tool));
        }
        for name in &report.ignored {
            state.push_log(LogKind::Info, format!("Ignored unknown tool {}", name));
        }
        for err in &report.errors {
            state.push_log(LogKind::Error, err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LogEntry;
    use toolpanel_core::{Emotion, EventBus, MockSession, PanelConfig, UserTurn};

    fn new_state() -> AppState {
        AppState::new(&PanelConfig::default(), EventBus::new())
    }

    fn created() -> SessionEvent {
        SessionEvent::SessionCreated { event_id: None, session: None }
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_session_flow() {
        let mut state = new_state();

        EventHandler::handle_event(&mut state, AppEvent::SessionStarted);
        EventHandler::handle_event(&mut state, AppEvent::Server(created()));
        assert!(state.watcher.session().is_registered());

        let outbound = state.outbound_receiver.try_recv().unwrap();
        assert!(matches!(outbound, ClientEvent::SessionUpdate { .. }));

        let turn = MockSession::response_for(UserTurn::Speak(Emotion::Sad), 0);
        EventHandler::handle_event(&mut state, AppEvent::Server(turn));
        assert_eq!(state.watcher.store().emotions(), &[Emotion::Sad]);
        assert_eq!(state.events.len(), 2);
        assert!(state.events[1].is_session_created());

        assert!(state
            .log
            .iter()
            .any(|entry| entry.text == "Handled record_user_emotion"));

        EventHandler::handle_event(&mut state, AppEvent::SessionEnded);
        assert!(state.events.is_empty());
        assert!(state.watcher.store().is_empty());
        assert!(!state.watcher.session().is_registered());
    }

    #[tokio::test]
    async fn test_server_events_dropped_while_inactive() {
        let mut state = new_state();

        EventHandler::handle_event(&mut state, AppEvent::Server(created()));
        assert!(state.events.is_empty());
        assert!(state.log.is_empty());
        assert!(state.outbound_receiver.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_and_unknown_tools_logged() {
        let mut state = new_state();
        EventHandler::handle_event(&mut state, AppEvent::SessionStarted);

        let garbled = MockSession::response_for(UserTurn::Garbled, 0);
        EventHandler::handle_event(&mut state, AppEvent::Server(garbled));
        let unknown = MockSession::response_for(UserTurn::UnknownTool, 1);
        EventHandler::handle_event(&mut state, AppEvent::Server(unknown));

        let errors: Vec<&LogEntry> = state.log.iter().filter(|e| e.kind == LogKind::Error).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("record_user_emotion"));
        assert!(state
            .log
            .iter()
            .any(|entry| entry.text == "Ignored unknown tool set_room_lighting"));
        assert!(state.watcher.store().is_empty());
    }
}
