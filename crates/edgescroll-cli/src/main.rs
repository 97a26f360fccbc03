use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use edgescroll_core::AppConfig;

mod commands;

use commands::simulate::SimulateArgs;

#[derive(Parser)]
#[command(name = "edgescroll")]
#[command(author, version, about = "Auto-scroll a panel while the pointer rests near its edges")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.config/edgescroll/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive terminal demo
    Run,
    /// Replay pointer positions against an in-memory surface
    Simulate(SimulateArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; only commands that need it fail on a bad file
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let loaded = AppConfig::load_from(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()));

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    match &loaded {
        Ok(config) => init_logging(config, interactive)?,
        Err(e) => {
            init_logging(&AppConfig::default(), interactive)?;
            tracing::warn!("{e:#}");
        }
    }

    execute(cli.command, &config_path, loaded).await
}

async fn execute(
    command: Option<Commands>,
    config_path: &Path,
    loaded: Result<AppConfig>,
) -> Result<()> {
    match command {
        Some(Commands::Run) | None => commands::run::run(Arc::new(loaded?)),
        Some(Commands::Simulate(args)) => commands::simulate::run(&loaded?, args).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&loaded?),
            ConfigAction::Init { force } => commands::config::init(config_path, force),
            ConfigAction::Path => commands::config::path(config_path),
        },
    }
}

/// Install the tracing subscriber. The terminal UI owns the screen, so it
/// logs to a file in the data directory instead of stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if to_file {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn config_command(action: ConfigAction) -> Option<Commands> {
        Some(Commands::Config { action })
    }

    #[tokio::test]
    async fn test_config_init_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[autoscroll]\nstep = 0\n").unwrap();
        let loaded = AppConfig::load_from(&path).map_err(anyhow::Error::from);
        assert!(loaded.is_err());

        execute(config_command(ConfigAction::Init { force: true }), &path, loaded)
            .await
            .unwrap();
        assert!(AppConfig::load_from(&path).is_ok());
    }

    #[tokio::test]
    async fn test_config_path_ignores_load_error() {
        let path = Path::new("/nonexistent/config.toml");
        execute(config_command(ConfigAction::Path), path, Err(anyhow!("bad config")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_config_show_reports_load_error() {
        let path = Path::new("/nonexistent/config.toml");
        let result = execute(config_command(ConfigAction::Show), path, Err(anyhow!("bad config"))).await;
        assert_eq!(result.unwrap_err().to_string(), "bad config");
    }
}
