use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use crate::state::AppState;

/// Component for rendering the status line
pub struct StatusComponent;

impl StatusComponent {
    /// Render the status line
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let pending = state.watcher.pending_prompts();

        let status_text = if state.watcher.is_active() {
            let prompts = if pending > 0 {
                format!(" | {} follow-up pending", pending)
            } else {
                String::new()
            };
            format!(
                "● Session active{} | 's' stop, 'p' palette, 1-4 happy/sad/confused/frustrated, 'u' unknown tool, 'g' garbled, 'q' quit",
                prompts
            )
        } else {
            "Session inactive | 's' to start, 'q' to quit".to_string()
        };

        let status = Paragraph::new(status_text).style(if state.watcher.is_active() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        });

        f.render_widget(status, area);
    }
}
