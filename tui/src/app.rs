use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Duration;
use toolpanel_core::{EventBus, PanelConfig};
use tracing::info;

use crate::{
    components::{LogComponent, PanelComponent, StatusComponent},
    handlers::{EventHandler, InputHandler},
    state::AppState,
    utils::{layout, terminal},
};

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &PanelConfig, event_bus: EventBus) -> Self {
        Self {
            state: AppState::new(config, event_bus),
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        let mut terminal = terminal::setup()?;

        info!("TUI initialized, starting main loop");

        let result = self.run_app(&mut terminal).await;

        // Restore terminal
        terminal::restore(&mut terminal)?;

        result
    }

    /// Main application loop
    async fn run_app<B: Backend + std::io::Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.ui(f))?;

            tokio::select! {
                // Handle terminal events (keyboard input)
                terminal_event = async {
                    if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        event::read().ok()
                    } else {
                        None
                    }
                } => {
                    if let Some(event) = terminal_event {
                        InputHandler::handle_event(&mut self.state, event);
                    }
                },

                // Handle application events (server events, session lifecycle)
                app_event = self.state.event_receiver.recv() => {
                    if let Some(event) = app_event {
                        EventHandler::handle_event(&mut self.state, event);
                    }
                },

                // Events the panel sent to the session
                outbound = self.state.outbound_receiver.recv() => {
                    if let Some(event) = outbound {
                        EventHandler::handle_outbound(&mut self.state, event);
                    }
                },

                // Timeout to ensure regular UI updates
                _ = tokio::time::sleep(Duration::from_millis(50)) => {},
            }

            if self.state.should_quit {
                break;
            }
        }

        self.state.session.stop();
        Ok(())
    }

    /// Draw the user interface
    fn ui(&mut self, f: &mut Frame) {
        let main_chunks = layout::create_main_layout(f.size());
        let top_chunks = layout::create_top_panel_layout(main_chunks[0]);

        PanelComponent::render(&self.state, f, top_chunks[0]);
        LogComponent::render(&mut self.state, f, top_chunks[1]);
        StatusComponent::render(&mut self.state, f, main_chunks[1]);
    }
}
