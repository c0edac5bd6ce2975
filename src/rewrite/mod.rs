//! Tone rewriting
//!
//! Rewrites text into one of six tones with rule-based transformations:
//! - A per-tone table of ordered word substitutions (see [`rules`])
//! - A per-tone structural step: salutation, friendly marker, whitespace
//!   cleanup, sentence splitting, truncation (see [`steps`])
//!
//! Rewriting is total: every input, including the empty string, yields a
//! result. The only non-deterministic tone is Empathetic, which draws its
//! opener from an injected random source.

pub mod rules;
pub mod steps;
mod tone;

pub use tone::Tone;

use crate::config::RewriteConfig;
use chrono::{DateTime, Utc};
use rand::Rng;
use rules::Rule;
use serde::{Deserialize, Serialize};

/// Default marker appended by the Friendly tone
pub const DEFAULT_FRIENDLY_MARKER: &str = "😊";

/// Text to rewrite and the tone to rewrite it in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewriteRequest {
    pub original_text: String,
    pub tone: Tone,
}

impl RewriteRequest {
    pub fn new(original_text: impl Into<String>, tone: Tone) -> Self {
        Self {
            original_text: original_text.into(),
            tone,
        }
    }

    /// One request per tone, in [`Tone::ALL`] order
    pub fn all(original_text: &str) -> Vec<Self> {
        Tone::ALL
            .into_iter()
            .map(|tone| Self::new(original_text, tone))
            .collect()
    }
}

/// Outcome of a single rewrite
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RewriteResult {
    /// Text exactly as supplied by the caller
    pub original_text: String,
    /// Tone that was applied
    pub tone: Tone,
    /// Rewritten text (possibly unchanged, never missing)
    pub rewritten_text: String,
    /// When the rewrite was produced
    pub created_at: DateTime<Utc>,
}

/// Rewriter carrying user settings
///
/// Holds only immutable configuration; randomness is passed in per call so
/// a single rewriter can be shared across threads.
#[derive(Debug, Clone)]
pub struct ToneRewriter {
    /// User replacements applied before the tone rules
    replacements: Vec<Rule>,
    friendly_marker: String,
}

impl Default for ToneRewriter {
    fn default() -> Self {
        Self {
            replacements: Vec::new(),
            friendly_marker: DEFAULT_FRIENDLY_MARKER.to_string(),
        }
    }
}

impl ToneRewriter {
    /// Create a rewriter from configuration
    pub fn new(config: &RewriteConfig) -> Self {
        let replacements = rules::compile_replacements(&config.replacements);
        tracing::debug!(
            "Tone rewriter ready ({} user replacements, marker {:?})",
            replacements.len(),
            config.friendly_marker
        );

        Self {
            replacements,
            friendly_marker: config.friendly_marker.clone(),
        }
    }

    /// Rewrite `text` in `tone`, drawing any randomness from `rng`
    pub fn rewrite<R: Rng + ?Sized>(&self, text: &str, tone: Tone, rng: &mut R) -> RewriteResult {
        let rewritten_text = self.rewrite_text(text, tone, rng);
        tracing::debug!(
            "Rewrote {} -> {} chars as {}",
            text.len(),
            rewritten_text.len(),
            tone
        );

        RewriteResult {
            original_text: text.to_string(),
            tone,
            rewritten_text,
            created_at: Utc::now(),
        }
    }

    /// Rewrite a request
    pub fn rewrite_request<R: Rng + ?Sized>(
        &self,
        request: &RewriteRequest,
        rng: &mut R,
    ) -> RewriteResult {
        self.rewrite(&request.original_text, request.tone, rng)
    }

    /// Rewrite `text` in every tone, in [`Tone::ALL`] order
    pub fn rewrite_all<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<RewriteResult> {
        Tone::ALL
            .into_iter()
            .map(|tone| self.rewrite(text, tone, rng))
            .collect()
    }

    /// Produce only the rewritten string
    pub fn rewrite_text<R: Rng + ?Sized>(&self, text: &str, tone: Tone, rng: &mut R) -> String {
        let input = if self.replacements.is_empty() {
            text.to_string()
        } else {
            rules::apply_all(&self.replacements, text)
        };

        let substituted = rules::apply_all(rules::rules_for(tone), &input);

        match tone {
            Tone::Formal => steps::add_formal_salutation(&substituted),
            Tone::Friendly => steps::add_friendly_marker(&substituted, &self.friendly_marker),
            Tone::Assertive => steps::collapse_whitespace(&substituted),
            Tone::Simplified => steps::split_long_sentences(&substituted),
            Tone::Empathetic => steps::add_empathy_opener(&substituted, rng),
            Tone::Concise => steps::keep_first_sentences(&substituted),
        }
    }
}

/// Rewrite `text` in `tone` with default settings and the thread-local RNG
pub fn rewrite(text: &str, tone: Tone) -> RewriteResult {
    rewrite_with_rng(text, tone, &mut rand::rng())
}

/// Rewrite `text` in `tone` with default settings and a caller-supplied RNG
pub fn rewrite_with_rng<R: Rng + ?Sized>(text: &str, tone: Tone, rng: &mut R) -> RewriteResult {
    ToneRewriter::default().rewrite(text, tone, rng)
}
