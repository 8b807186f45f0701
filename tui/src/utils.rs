/// Terminal setup and layout helpers

/// Terminal management utilities
pub mod terminal {
    use anyhow::Result;
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        event::{DisableMouseCapture, EnableMouseCapture},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    /// Setup terminal for TUI mode
    pub fn setup() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore terminal to normal mode
    pub fn restore<B: ratatui::backend::Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Layout calculation utilities
pub mod layout {
    use ratatui::layout::{Constraint, Direction, Layout, Rect};

    /// Create the main application layout
    pub fn create_main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),     // Panel + log
                Constraint::Length(1),  // Status line
            ].as_ref())
            .split(area)
            .to_vec()
    }

    /// Create the top layout (tool panel + session log)
    pub fn create_top_panel_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Tool panel
                Constraint::Percentage(45), // Session log
            ].as_ref())
            .split(area)
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::layout;
    use ratatui::layout::Rect;

    #[test]
    fn test_layout_splits() {
        let main = layout::create_main_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(main.len(), 2);
        assert_eq!(main[1].height, 1);

        let top = layout::create_top_panel_layout(main[0]);
        assert_eq!(top.len(), 2);
        assert!(top[0].width > top[1].width);
    }
}
