//! NeuroLens - on-device tone rewriting
//!
//! Use `neurolens rewrite --tone <TONE> [TEXT]` for one-shot rewrites.
//! Use `neurolens stream` to rewrite piped text line by line.
//! Use `neurolens session` for an interactive session.

use anyhow::Context;
use clap::Parser;
use neurolens::config::{self, Config};
use neurolens::output;
use neurolens::processor::{process_stream, RewriteEngine};
use neurolens::rewrite::{RewriteRequest, Tone};
use neurolens::session::{RewriteSession, SessionCommand};
use neurolens::{Cli, Commands};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Buffered stdin lines waiting to be rewritten
const STREAM_QUEUE: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    // Logs go to stderr so stdout only carries rewritten text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("neurolens={},warn", log_level))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = config::load_config(cli.config.as_deref())?;

    // Apply CLI overrides
    if let Some(format) = cli.format.as_deref() {
        config.output.format = format.parse()?;
    }
    if let Some(seed) = cli.seed {
        config.rewrite.seed = Some(seed);
    }

    match cli.command {
        Commands::Rewrite { text, tone, all } => {
            run_rewrite(&config, text, tone.as_deref(), all).await?;
        }

        Commands::Stream { tone } => {
            run_stream(&config, tone.as_deref()).await?;
        }

        Commands::Session => {
            run_session(&config).await?;
        }

        Commands::Tones => {
            list_tones();
        }

        Commands::Config => {
            show_config(&config)?;
        }

        Commands::Init { force } => {
            init_config(cli.config.as_deref(), force)?;
        }
    }

    Ok(())
}

/// Tone from the command line, falling back to the configured default
fn resolve_tone(config: &Config, tone: Option<&str>) -> anyhow::Result<Tone> {
    match tone {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.rewrite.default_tone),
    }
}

/// Read all of stdin, dropping the trailing newline
async fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read text from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Rewrite one text in one tone or in all tones
async fn run_rewrite(
    config: &Config,
    text: Option<String>,
    tone: Option<&str>,
    all: bool,
) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin().await?,
    };

    let mut engine = RewriteEngine::new(&config.rewrite);
    let results = if all {
        engine.rewrite_all(&text)
    } else {
        let tone = resolve_tone(config, tone)?;
        vec![engine.rewrite(&RewriteRequest::new(text, tone))]
    };

    println!("{}", output::render(&results, config.output.format)?);
    Ok(())
}

/// Rewrite stdin line by line as lines arrive
async fn run_stream(config: &Config, tone: Option<&str>) -> anyhow::Result<()> {
    let tone = resolve_tone(config, tone)?;
    tracing::debug!("Streaming stdin through the {} tone", tone);

    let (tx, rx) = mpsc::channel(STREAM_QUEUE);
    let mut results = process_stream(RewriteEngine::new(&config.rewrite), rx);

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if tx.send(RewriteRequest::new(line, tone)).await.is_err() {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    while let Some(result) = results.recv().await {
        let result = result?;
        println!("{}", output::render_line(&result, config.output.format)?);
    }

    reader
        .await
        .context("stdin reader task failed")?
        .context("Failed to read text from stdin")?;
    Ok(())
}

/// Interactive rewrite session on stdin/stdout
async fn run_session(config: &Config) -> anyhow::Result<()> {
    let format = config.output.format;
    let mut session = RewriteSession::new(RewriteEngine::new(&config.rewrite));

    println!("NeuroLens session. Type text to rewrite, /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            SessionCommand::Input(text) => {
                session.update_input(text);
                match session.selected_tone() {
                    Some(tone) => {
                        if let Some(result) = session.select_tone(tone) {
                            println!("{}", output::render(std::slice::from_ref(result), format)?);
                        }
                    }
                    None => println!("Input set. Pick a tone with /tone NAME, or /all."),
                }
            }

            SessionCommand::SelectTone(tone) => match session.select_tone(tone) {
                Some(result) => {
                    println!("{}", output::render(std::slice::from_ref(result), format)?);
                }
                None => println!(
                    "Tone set to {}. Type some text to rewrite.",
                    tone.display_name()
                ),
            },

            SessionCommand::RewriteAll => {
                if session.input_text().trim().is_empty() {
                    println!("Nothing to rewrite yet. Type some text first.");
                } else {
                    println!("{}", output::render(session.rewrite_all(), format)?);
                }
            }

            SessionCommand::Clear => {
                session.clear();
                println!("Cleared.");
            }

            SessionCommand::Show => {
                if session.rewrites().is_empty() {
                    println!("No results yet.");
                } else {
                    println!("{}", output::render(session.rewrites(), format)?);
                }
            }

            SessionCommand::Help => print_session_help(),

            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn print_session_help() {
    println!("Commands:");
    println!("  /tone NAME   Pick a tone and rewrite the current text");
    println!("  /all         Rewrite the current text in every tone");
    println!("  /show        Show the latest results");
    println!("  /clear       Clear the text and results");
    println!("  /quit        Leave the session");
    println!("Any other line replaces the current text.");
}

/// List available tones
fn list_tones() {
    for tone in Tone::ALL {
        println!("  {:<12} {}", tone.as_str(), tone.description());
    }
}

/// Show the effective configuration
fn show_config(config: &Config) -> anyhow::Result<()> {
    println!("Current Configuration\n");
    println!("=====================\n");

    if let Some(path) = Config::default_path() {
        println!("# Default config file: {:?}\n", path);
    }

    let rendered =
        toml::to_string_pretty(config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}

/// Write the default config file
fn init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let config_path = match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            path.to_path_buf()
        }
        None => {
            Config::ensure_directories()?;
            Config::default_path().context("Could not determine config directory")?
        }
    };

    if config_path.exists() && !force {
        println!("Config file exists: {:?}", config_path);
        println!("  Use --force to overwrite it.");
        return Ok(());
    }

    std::fs::write(&config_path, config::DEFAULT_CONFIG)?;
    println!("✓ Created: {:?}", config_path);
    Ok(())
}
