//! CLI subcommand handlers.

use anyhow::Context;
use claimlens_core::{ClaimMatcher, ClaimSplitter, Document, DocumentVerifier, VerifierConfig};
use std::io::Read;
use std::path::Path;

use crate::render;
use crate::{Commands, ConfigAction, OutputFormat};

/// Handle a CLI subcommand.
pub fn handle_command(
    command: Commands,
    config: &VerifierConfig,
    workspace: &Path,
) -> anyhow::Result<()> {
    match command {
        Commands::Verify {
            file,
            threshold,
            format,
        } => handle_verify(&file, threshold, format, config),
        Commands::Split { text } => handle_split(&text, config),
        Commands::Score { claim, quote } => handle_score(&claim, &quote, config),
        Commands::Config { action } => handle_config(action, config, workspace),
    }
}

/// Read an argument verbatim, or stdin when it is `-`.
fn read_input(arg: &str) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn handle_verify(
    file: &str,
    threshold: Option<f64>,
    format: OutputFormat,
    config: &VerifierConfig,
) -> anyhow::Result<()> {
    let document = if file == "-" {
        Document::from_json_str(&read_input(file)?).context("Failed to parse document from stdin")?
    } else {
        Document::from_path(Path::new(file))
            .with_context(|| format!("Failed to load document {}", file))?
    };
    tracing::debug!(
        source = file,
        citations = document.citations.len(),
        "Loaded document"
    );

    let mut verifier = DocumentVerifier::new(config);
    if let Some(t) = threshold {
        if !(0.0..=1.0).contains(&t) {
            anyhow::bail!("Threshold must be within [0, 1], got {}", t);
        }
        verifier = verifier.with_threshold(t);
    }

    let report = verifier.verify(&document);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render::report_text(&report, render::WRAP_WIDTH)),
    }
    Ok(())
}

fn handle_split(text: &str, config: &VerifierConfig) -> anyhow::Result<()> {
    let input = read_input(text)?;
    let claims = ClaimSplitter::new(config.splitter.clone()).split(&input);
    if claims.is_empty() {
        println!("No content available");
    }
    for claim in claims {
        println!("{}", claim);
    }
    Ok(())
}

fn handle_score(claim: &str, quote: &str, config: &VerifierConfig) -> anyhow::Result<()> {
    let m = ClaimMatcher::new(config.scoring.clone()).match_quote(claim, quote);
    println!("{}", serde_json::to_string_pretty(&m)?);
    Ok(())
}

fn handle_config(
    action: ConfigAction,
    config: &VerifierConfig,
    workspace: &Path,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
        ConfigAction::Init => {
            let config_dir = workspace.join(".claimlens");
            std::fs::create_dir_all(&config_dir)?;

            let config_path = config_dir.join("config.toml");
            if config_path.exists() {
                println!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                return Ok(());
            }

            let toml_str = toml::to_string_pretty(&VerifierConfig::default())?;
            std::fs::write(&config_path, &toml_str)?;
            println!(
                "Created default configuration at: {}",
                config_path.display()
            );
            Ok(())
        }
    }
}
