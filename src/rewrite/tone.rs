//! Writing tones supported by the rewriter

use crate::error::NeurolensError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A fixed rewriting style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Professional and structured
    Formal,
    /// Warm and approachable
    Friendly,
    /// Clear and confident
    Assertive,
    /// Easy to understand
    Simplified,
    /// Understanding and supportive
    Empathetic,
    /// Brief and to the point
    Concise,
}

impl Tone {
    /// Every tone, in presentation order
    pub const ALL: [Tone; 6] = [
        Tone::Formal,
        Tone::Friendly,
        Tone::Assertive,
        Tone::Simplified,
        Tone::Empathetic,
        Tone::Concise,
    ];

    /// Human-readable name shown in headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Assertive => "Assertive",
            Tone::Simplified => "Simplified",
            Tone::Empathetic => "Empathetic",
            Tone::Concise => "Concise",
        }
    }

    /// One-line description of the style
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Formal => "Professional and structured",
            Tone::Friendly => "Warm and approachable",
            Tone::Assertive => "Clear and confident",
            Tone::Simplified => "Easy to understand",
            Tone::Empathetic => "Understanding and supportive",
            Tone::Concise => "Brief and to the point",
        }
    }

    /// Lowercase identifier used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Assertive => "assertive",
            Tone::Simplified => "simplified",
            Tone::Empathetic => "empathetic",
            Tone::Concise => "concise",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = NeurolensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NeurolensError::UnknownTone(s.to_string()))
    }
}
