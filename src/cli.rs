// Command-line interface definitions for neurolens
//
// This module is separate so it can be used by both the binary (main.rs)
// and build.rs for generating man pages.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "neurolens")]
#[command(author, version, about = "On-device tone rewriting for accessible communication")]
#[command(long_about = "
NeuroLens rewrites text into a chosen tone so messages land the way you mean
them. Everything runs locally; nothing leaves your machine.

TONES:
  formal, friendly, assertive, simplified, empathetic, concise

USAGE:
  neurolens rewrite --tone formal \"hey, I can't make it\"
  echo \"Could you maybe help me?\" | neurolens rewrite --tone assertive
  neurolens rewrite --all \"Thanks for listening.\"
  ocr-tool scan.png | neurolens stream --tone simplified
")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: "text" or "json" (overrides config)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Seed for the empathetic opener, for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite text in one tone, or in every tone with --all
    Rewrite {
        /// Text to rewrite (read from stdin when omitted)
        text: Option<String>,

        /// Tone to apply (defaults to rewrite.default_tone from config)
        #[arg(short, long, value_name = "TONE", conflicts_with = "all")]
        tone: Option<String>,

        /// Rewrite in every tone
        #[arg(short, long)]
        all: bool,
    },

    /// Rewrite each line from stdin as it arrives
    Stream {
        /// Tone to apply (defaults to rewrite.default_tone from config)
        #[arg(short, long, value_name = "TONE")]
        tone: Option<String>,
    },

    /// Interactive session: type text, switch tones, compare results
    Session,

    /// List available tones
    Tones,

    /// Show current configuration
    Config,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
