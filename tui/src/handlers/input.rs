use crate::state::AppState;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use toolpanel_core::{Emotion, UserTurn};

/// Handles input events for the application
pub struct InputHandler;

impl InputHandler {
    /// Handle input events (keyboard and mouse)
    pub fn handle_event(state: &mut AppState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(state, key.code, key.modifiers);
            }
            Event::Mouse(mouse_event) => {
                Self::handle_mouse_event(state, mouse_event);
            }
            _ => {}
        }
    }

    fn handle_key_event(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        match key_code {
            KeyCode::Char('q') => {
                state.should_quit = true;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.should_quit = true;
            }
            KeyCode::Char('s') => {
                if state.session.is_active() {
                    state.session.stop();
                } else {
                    state.session.start();
                }
            }
            KeyCode::Char('p') => state.session.user_turn(UserTurn::AskForPalette),
            KeyCode::Char('u') => state.session.user_turn(UserTurn::UnknownTool),
            KeyCode::Char('g') => state.session.user_turn(UserTurn::Garbled),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                state.session.user_turn(UserTurn::Speak(Emotion::ALL[index]));
            }
            KeyCode::Up => Self::scroll_up(state, 1),
            KeyCode::Down => Self::scroll_down(state, 1),
            KeyCode::PageUp => Self::scroll_up(state, 10),
            KeyCode::PageDown => Self::scroll_down(state, 10),
            KeyCode::End => {
                state.auto_scroll_log = true;
            }
            _ => {}
        }
    }

    fn handle_mouse_event(state: &mut AppState, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::ScrollUp => Self::scroll_up(state, 3), // Scroll 3 lines at a time
            MouseEventKind::ScrollDown => Self::scroll_down(state, 3),
            _ => {}
        }
    }

    fn scroll_up(state: &mut AppState, lines: usize) {
        if state.log_scroll > 0 {
            state.log_scroll = state.log_scroll.saturating_sub(lines);
            // Disable auto-scroll when user manually scrolls
            state.auto_scroll_log = false;
        }
    }

    fn scroll_down(state: &mut AppState, lines: usize) {
        state.log_scroll = state.log_scroll.saturating_add(lines);
        state.auto_scroll_log = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use toolpanel_core::{EventBus, PanelConfig};

    fn press(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        InputHandler::handle_event(state, Event::Key(KeyEvent::new(code, modifiers)));
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut state = AppState::new(&PanelConfig::default(), EventBus::new());
        press(&mut state, KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.should_quit);

        let mut state = AppState::new(&PanelConfig::default(), EventBus::new());
        press(&mut state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(state.should_quit);
    }
}
