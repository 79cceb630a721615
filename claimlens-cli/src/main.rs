//! Claimlens CLI — verify AI-generated summaries against their citations.
//!
//! Thin front end over `claimlens-core` used for tuning heuristics and checking
//! generator output by hand.

mod commands;
mod render;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Claimlens: check which summary claims are backed by source text
#[derive(Parser, Debug)]
#[command(name = "claimlens", version, about, long_about = None)]
struct Cli {
    /// Workspace directory (for `.claimlens/config.toml`)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Verify a summary document (JSON) against its citations
    Verify {
        /// Document path, or `-` for stdin
        file: String,
        /// Support threshold (defaults to `support.threshold` from config)
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Split summary text into claims, one per line
    Split {
        /// Text to split, or `-` for stdin
        text: String,
    },
    /// Score a single claim against a single quote
    Score {
        /// Claim text
        #[arg(long)]
        claim: String,
        /// Quote text
        #[arg(long)]
        quote: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration to `.claimlens/config.toml`
    Init,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Human-readable layer for stderr (always active)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    // JSON file layer for structured logging
    let log_dir = directories::ProjectDirs::from("dev", "claimlens", "claimlens")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "claimlens.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let workspace = cli
        .workspace
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let config = claimlens_core::load_config(Some(&workspace), cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    commands::handle_command(cli.command, &config, &workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verify_with_threshold() {
        let cli = Cli::try_parse_from([
            "claimlens", "-vv", "verify", "doc.json", "--threshold", "0.45", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Verify {
                file,
                threshold,
                format,
            } => {
                assert_eq!(file, "doc.json");
                assert_eq!(threshold, Some(0.45));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_score_and_config() {
        let cli = Cli::try_parse_from([
            "claimlens", "score", "--claim", "Raises fees", "--quote", "Fees rise",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Score { .. }));

        let cli = Cli::try_parse_from(["claimlens", "-c", "tuned.toml", "config", "show"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tuned.toml")));
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Show
            }
        ));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["claimlens"]).is_err());
    }
}
