use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use toolpanel_core::{PalettePane, PanelView};
use toolpanel_core::view::{AWAITING_PALETTE_PROMPT, INACTIVE_PROMPT};

/// Component for rendering the tool panel
pub struct PanelComponent;

impl PanelComponent {
    /// Render the panel for the current session state
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        Self::render_view(&state.panel_view(), f, area);
    }

    pub fn render_view(view: &PanelView, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        match &view.palette {
            PalettePane::Inactive => {
                lines.push(Line::from(Span::styled(
                    INACTIVE_PROMPT,
                    Style::default().fg(Color::DarkGray),
                )));
            }
            PalettePane::AwaitingPalette => {
                lines.push(Line::from(AWAITING_PALETTE_PROMPT));
            }
            PalettePane::Palette { theme, swatches, raw_json } => {
                lines.push(Line::from(format!("Theme: {}", theme)));
                lines.push(Line::from(""));

                for swatch in swatches {
                    let block_style = match swatch.rgb {
                        Some((r, g, b)) => Style::default().bg(Color::Rgb(r, g, b)),
                        None => Style::default(),
                    };
                    lines.push(Line::from(vec![
                        Span::styled("        ", block_style),
                        Span::raw(" "),
                        Span::styled(
                            swatch.code.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]));
                }

                lines.push(Line::from(""));
                for json_line in raw_json.lines() {
                    lines.push(Line::from(Span::styled(
                        json_line.to_string(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }

        if !view.emotions.is_empty() {
            lines.push(Line::from(""));
            for emotion in &view.emotions {
                lines.push(Line::from(Span::styled(
                    PanelView::emotion_label(emotion),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
        }

        let title = format!(" {} ", view.title);
        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });

        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use toolpanel_core::tools::{PaletteArgs, PaletteResult};
    use toolpanel_core::{Emotion, FunctionCall};

    fn render_to_string(view: &PanelView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|f| PanelComponent::render_view(view, f, f.size()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_inactive() {
        let out = render_to_string(&PanelView::build(false, None, &[]));
        assert!(out.contains("Color Palette Tool"));
        assert!(out.contains(INACTIVE_PROMPT));
    }

    #[test]
    fn test_render_palette_and_emotions() {
        let result = PaletteResult {
            call: FunctionCall::new("display_color_palette", "{}"),
            args: PaletteArgs {
                theme: "ocean".to_string(),
                colors: vec!["#03045e".to_string(), "#0077b6".to_string()],
            },
        };
        let out = render_to_string(&PanelView::build(
            true,
            Some(&result),
            &[Emotion::Happy, Emotion::Sad],
        ));

        assert!(out.contains("Theme: ocean"));
        assert!(out.contains("#03045e"));
        assert!(out.contains("\"type\": \"function_call\""));

        let happy = out.find("Recorded Emotion: happy").unwrap();
        let sad = out.find("Recorded Emotion: sad").unwrap();
        assert!(happy < sad);
    }
}
