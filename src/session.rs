//! In-memory rewrite session
//!
//! Tracks the text being worked on, the tone last picked, and the latest
//! result per tone. Nothing is persisted; a session lives as long as the
//! process that owns it.

use crate::error::NeurolensError;
use crate::processor::RewriteEngine;
use crate::rewrite::{RewriteRequest, RewriteResult, Tone};

/// One line of input to an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `/tone NAME`: select a tone and rewrite with it
    SelectTone(Tone),
    /// `/all`: rewrite in every tone
    RewriteAll,
    /// `/clear`: drop input and results
    Clear,
    /// `/show`: print current results
    Show,
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
    /// Any other line becomes the working text
    Input(String),
}

impl SessionCommand {
    /// Parse a line typed by the user
    pub fn parse(line: &str) -> Result<Self, NeurolensError> {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return Ok(SessionCommand::Input(line.trim_end_matches(['\r', '\n']).to_string()));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        match name.to_lowercase().as_str() {
            "tone" => Ok(SessionCommand::SelectTone(arg.parse()?)),
            "all" => Ok(SessionCommand::RewriteAll),
            "clear" => Ok(SessionCommand::Clear),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Ok(SessionCommand::Input(trimmed.to_string())),
        }
    }
}

/// State of an interactive rewriting session
pub struct RewriteSession {
    engine: RewriteEngine,
    input_text: String,
    selected_tone: Option<Tone>,
    rewrites: Vec<RewriteResult>,
}

impl RewriteSession {
    pub fn new(engine: RewriteEngine) -> Self {
        Self {
            engine,
            input_text: String::new(),
            selected_tone: None,
            rewrites: Vec::new(),
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn selected_tone(&self) -> Option<Tone> {
        self.selected_tone
    }

    /// Current results, oldest first
    pub fn rewrites(&self) -> &[RewriteResult] {
        &self.rewrites
    }

    /// Latest result for `tone`, if any
    pub fn result_for(&self, tone: Tone) -> Option<&RewriteResult> {
        self.rewrites.iter().find(|result| result.tone == tone)
    }

    /// Replace the working text (existing results are kept)
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Drop the working text and every result
    pub fn clear(&mut self) {
        self.input_text.clear();
        self.rewrites.clear();
    }

    /// Pick a tone and rewrite the working text with it
    ///
    /// Blank input only records the selection. Otherwise the new result
    /// replaces any earlier one for the same tone and goes to the end.
    pub fn select_tone(&mut self, tone: Tone) -> Option<&RewriteResult> {
        self.selected_tone = Some(tone);
        if self.input_text.trim().is_empty() {
            tracing::debug!("Selected {} with empty input, nothing to rewrite", tone);
            return None;
        }

        let result = self
            .engine
            .rewrite(&RewriteRequest::new(self.input_text.as_str(), tone));
        self.rewrites.retain(|existing| existing.tone != tone);
        self.rewrites.push(result);
        self.rewrites.last()
    }

    /// Rewrite the working text in every tone, replacing all results
    pub fn rewrite_all(&mut self) -> &[RewriteResult] {
        self.rewrites = self.engine.rewrite_all(&self.input_text);
        &self.rewrites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> RewriteSession {
        RewriteSession::new(RewriteEngine::default())
    }

    #[test]
    fn test_select_tone_on_empty_input() {
        let mut session = session();
        assert!(session.select_tone(Tone::Formal).is_none());
        assert_eq!(session.selected_tone(), Some(Tone::Formal));
        assert!(session.rewrites().is_empty());
    }

    #[test]
    fn test_select_tone_replaces_same_tone() {
        let mut session = session();
        session.update_input("I don't wanna go");
        session.select_tone(Tone::Formal);
        session.select_tone(Tone::Concise);

        session.update_input("I can't stay");
        let latest = session.select_tone(Tone::Formal).unwrap();
        assert_eq!(latest.rewritten_text, "I cannot stay");

        let tones: Vec<Tone> = session.rewrites().iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![Tone::Concise, Tone::Formal]);
        assert_eq!(
            session.result_for(Tone::Formal).unwrap().original_text,
            "I can't stay"
        );
    }

    #[test]
    fn test_rewrite_all_replaces_results() {
        let mut session = session();
        session.update_input("Could you maybe help me?");
        session.select_tone(Tone::Assertive);

        let results = session.rewrite_all();
        assert_eq!(results.len(), Tone::ALL.len());
        assert_eq!(
            session.result_for(Tone::Assertive).unwrap().rewritten_text,
            "Please help me."
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("/tone Friendly").unwrap(),
            SessionCommand::SelectTone(Tone::Friendly)
        );
        assert_eq!(SessionCommand::parse("/all").unwrap(), SessionCommand::RewriteAll);
        assert_eq!(SessionCommand::parse("  /QUIT ").unwrap(), SessionCommand::Quit);
        assert_eq!(
            SessionCommand::parse("hello there\n").unwrap(),
            SessionCommand::Input("hello there".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_slash_is_input() {
        assert_eq!(
            SessionCommand::parse("/usr/bin is a path").unwrap(),
            SessionCommand::Input("/usr/bin is a path".to_string())
        );
    }

    #[test]
    fn test_parse_bad_tone() {
        assert!(matches!(
            SessionCommand::parse("/tone shouty"),
            Err(NeurolensError::UnknownTone(_))
        ));
        assert!(SessionCommand::parse("/tone").is_err());
    }

    #[test]
    fn test_clear() {
        let mut session = session();
        session.update_input("Some text.");
        session.rewrite_all();
        session.clear();
        assert_eq!(session.input_text(), "");
        assert!(session.rewrites().is_empty());
    }
}
