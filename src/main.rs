//! Cortex TUI - Entry Point

use clap::Parser;
use cortex_tui::backend::{CommandGateway, DummyDataSource};
use cortex_tui::config::{self, ConfigError, KeyBindings, ResolvedConfig};
use cortex_tui::state::AppState;
use cortex_tui::view::{ColorConfig, UiStyles};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Cortex TUI - ask questions about your projects from the terminal
#[derive(Parser, Debug)]
#[command(name = "cortex-tui")]
#[command(version)]
#[command(about = "Terminal chat interface for querying an assistant about software projects")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the data source (overrides config and CORTEX_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log level filter, e.g. "debug" or "cortex_tui=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Resolve configuration: Defaults → Config File → Env Vars → CLI Args.
///
/// A broken config file is reported on stderr and skipped. The error is
/// handed back so it can be logged once logging is up.
fn resolve_config(args: &Args) -> (ResolvedConfig, Option<ConfigError>) {
    let (config_file, error) = match config::load_config_with_precedence(args.config.clone()) {
        Ok(file) => (file, None),
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            (None, Some(e))
        }
    };
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    let resolved =
        config::apply_cli_overrides(with_env, args.api_url.clone(), args.log_level.clone());
    (resolved, error)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, config_error) = resolve_config(&args);

    // Logging is optional: the TUI runs without a log file
    if let Err(e) = cortex_tui::logging::init(&config.log_file_path, &config.log_level) {
        eprintln!("Warning: logging disabled: {e}");
    }

    info!(config = ?config, "Cortex TUI starting");
    if let Some(e) = &config_error {
        warn!(error = %e, "Config file ignored, using defaults");
    }
    if config.username.is_empty() {
        warn!(api_url = %config.api_url, "No credentials configured");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("cortex-worker")
        .build()?;

    let source = Arc::new(DummyDataSource::new(config.latency));
    let (gateway, completions) = CommandGateway::new(runtime.handle().clone(), source);

    let state = AppState::new(KeyBindings::default());
    let styles = UiStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    let result = cortex_tui::view::run(state, gateway, completions, styles);

    // Outstanding requests are abandoned
    runtime.shutdown_background();
    info!("Cortex TUI shutting down");

    result?;
    Ok(())
}
