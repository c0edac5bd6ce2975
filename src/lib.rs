//! NeuroLens: on-device tone rewriting for accessible communication
//!
//! This library provides:
//! - Rewriting text into one of six tones (formal, friendly, assertive,
//!   simplified, empathetic, concise) with rule-based transformations
//! - A processor interface shared by on-device processors, with streaming
//! - An in-memory rewrite session for interactive use
//! - Layered configuration and text/JSON rendering for the CLI
//!
//! # Architecture
//!
//! ```text
//!            text (typed, piped, dictated, scanned)
//!                             │
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │  User Replacements  │ (optional, from config)
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │   Tone Rule Table   │ ordered word substitutions
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!                  ┌─────────────────────┐
//!                  │   Structural Step   │ salutation / marker / cleanup /
//!                  │                     │ sentence split / truncation /
//!                  │                     │ empathetic opener (random)
//!                  └─────────────────────┘
//!                             │
//!                             ▼
//!                      RewriteResult
//!                             │
//!             ┌───────────────┼───────────────┐
//!             ▼               ▼               ▼
//!      ┌────────────┐  ┌────────────┐  ┌────────────┐
//!      │  Rewrite   │  │   Stream   │  │  Session   │
//!      │ (one-shot) │  │ (per line) │  │(interactive│
//!      └────────────┘  └────────────┘  └────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use neurolens::rewrite::{rewrite, Tone};
//!
//! let result = rewrite("I don't wanna go", Tone::Formal);
//! assert_eq!(result.rewritten_text, "I do not want to go");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod processor;
pub mod rewrite;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{NeurolensError, Result};
pub use processor::{Processor, RewriteEngine};
pub use rewrite::{rewrite, rewrite_with_rng, RewriteRequest, RewriteResult, Tone, ToneRewriter};
pub use session::{RewriteSession, SessionCommand};
