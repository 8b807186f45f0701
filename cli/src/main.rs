use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolpanel_core::{EventBus, PanelConfig};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod replay;

#[derive(Parser, Debug)]
#[command(
    name = "toolpanel",
    version,
    about = "Function-call tool panel for a realtime voice session"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive panel driven by a scripted session (default)
    Tui,
    /// Feed a recorded event buffer through the panel and print the result
    Replay {
        /// JSON array of server events, in the configured buffer order
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

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
    info!("Starting toolpanel");

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut app = toolpanel_tui::App::new(&config, EventBus::new());
            app.run().await?;
        }
        Command::Replay { file } => {
            let events = replay::load_events(&file)?;
            let outcome = replay::replay(events, config.buffer_order).await;

            for line in &outcome.panel {
                println!("{}", line);
            }
            println!();
            for event in &outcome.sent {
                println!("{}", serde_json::to_string(event)?);
            }
            for err in &outcome.errors {
                eprintln!("error: {}", err);
            }
        }
    }

    info!("toolpanel shutting down");
    Ok(())
}
