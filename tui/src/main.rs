use anyhow::Result;
use toolpanel_core::{EventBus, PanelConfig};
use toolpanel_tui::App;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional: load .env (ignore errors if missing)
    let _ = dotenvy::dotenv();
    let config = PanelConfig::from_env()?;

    // Only log to stderr; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level).into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!("Starting tool panel TUI");

    let event_bus = EventBus::new();
    let mut app = App::new(&config, event_bus);
    app.run().await?;

    info!("Tool panel TUI shutting down");
    Ok(())
}
