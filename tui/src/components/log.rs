use crate::state::{AppState, LogKind};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Component for rendering the session event log
pub struct LogComponent;

impl LogComponent {
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Session Log ");

        if state.log.is_empty() {
            let placeholder = Paragraph::new("No events yet\n\nPress 's' to start the session")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let available_width = area.width.saturating_sub(2) as usize;
        let mut all_lines = Vec::new();
        for entry in &state.log {
            let (marker, color) = match entry.kind {
                LogKind::Inbound => ("<- ", Color::Green),
                LogKind::Outbound => ("-> ", Color::Blue),
                LogKind::Info => ("   ", Color::Gray),
                LogKind::Error => ("!! ", Color::Red),
            };
            // Long payloads are cut rather than wrapped so scrolling stays line-accurate
            let text: String = entry.text.chars().take(available_width.saturating_sub(3)).collect();
            all_lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(text, Style::default().fg(color)),
            ]));
        }

        let content_height = all_lines.len();
        let visible_height = area.height.saturating_sub(2) as usize; // Account for borders
        let max_scroll = content_height.saturating_sub(visible_height);

        let scroll_pos = if state.auto_scroll_log {
            max_scroll
        } else {
            state.log_scroll.min(max_scroll)
        };
        state.log_scroll = scroll_pos;

        let visible_lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_pos)
            .take(visible_height)
            .collect();

        f.render_widget(Paragraph::new(Text::from(visible_lines)).block(block), area);

        if content_height > visible_height {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state = ScrollbarState::new(max_scroll.max(1)).position(scroll_pos);
            f.render_stateful_widget(
                scrollbar,
                area.inner(&Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }
}
