mod api;
mod app;
mod cli;
mod config;
mod logging;
mod notify;
mod runtime;
mod store;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::StudyLogConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env.study-log").ok();

    let cli = Cli::parse();
    let cfg = StudyLogConfig::load()?;

    match cli.command {
        Commands::ConfigPath => {
            let path = StudyLogConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => {
            if cfg.api_key.trim().is_empty() {
                anyhow::bail!(
                    "No API key configured. Set api_key in {} or STUDY_LOG_API_KEY.",
                    StudyLogConfig::config_path()?.display()
                );
            }
            logging::init(&StudyLogConfig::log_path()?)?;
            let gateway = api::RestGateway::new(&cfg.api_url, &cfg.api_key)
                .context("Failed to set up the study log API client")?;
            info!(api_url = %cfg.api_url, "starting against remote store");
            run(App::new(Box::new(gateway), &cfg)).await
        }
        Commands::Dev => {
            logging::init(&StudyLogConfig::log_path()?)?;
            info!("starting with in-memory dev backend");
            run(App::new(Box::new(api::DevBackend::new()), &cfg)).await
        }
    }
}

async fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "event loop failed");
    }
    res
}
