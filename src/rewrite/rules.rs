//! Ordered substitution rules for each tone
//!
//! Each tone owns a fixed table of `(pattern, replacement)` pairs that is
//! compiled once and applied top to bottom. Word rules match
//! case-insensitively on word boundaries; literal rules match exact text.

use super::Tone;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Apostrophe class accepting both straight and typographic quotes,
/// since dictated and scanned text often carries the latter
const APOS: &str = "['\u{2019}]";

const FORMAL_TABLE: &[(&str, &str)] = &[
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("can{A}t", "cannot"),
    ("don{A}t", "do not"),
    ("won{A}t", "will not"),
    ("i{A}m", "I am"),
    ("you{A}re", "you are"),
];

const FRIENDLY_TABLE: &[(&str, &str)] = &[("Dear", "Hi"), ("Sincerely", "Best wishes")];

// Hedges go first so "could you maybe" collapses to "Please"
const ASSERTIVE_TABLE: &[(&str, &str)] = &[
    ("maybe", ""),
    ("perhaps", ""),
    ("i think", "I believe"),
    ("could you", "Please"),
    ("would you mind", "Please"),
];

const SIMPLIFIED_TABLE: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("commence", "start"),
    ("terminate", "end"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("subsequently", "then"),
];

static FORMAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| compile_words(FORMAL_TABLE));
static FRIENDLY_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| compile_literals(FRIENDLY_TABLE));
static ASSERTIVE_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = compile_words(ASSERTIVE_TABLE);
    rules.extend(Rule::literal("?", "."));
    rules
});
static SIMPLIFIED_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| compile_words(SIMPLIFIED_TABLE));

/// A single compiled substitution
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
    match_case: bool,
}

impl Rule {
    /// Case-insensitive rule anchored on word boundaries
    ///
    /// `fragment` is a regex fragment; `{A}` expands to an apostrophe class.
    /// Returns `None` (after logging) when the fragment does not compile.
    pub fn word(fragment: &str, replacement: &str) -> Option<Self> {
        let pattern = format!(r"(?i)\b{}\b", fragment.replace("{A}", APOS));
        Self::compile(&pattern, replacement, true)
    }

    /// Case-sensitive rule matching `text` exactly, anywhere
    pub fn literal(text: &str, replacement: &str) -> Option<Self> {
        Self::compile(&regex::escape(text), replacement, false)
    }

    /// Case-insensitive whole-phrase rule for user-supplied replacements
    pub fn phrase(phrase: &str, replacement: &str) -> Option<Self> {
        Self::word(&regex::escape(phrase), replacement)
    }

    fn compile(pattern: &str, replacement: &str, match_case: bool) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(pattern) => Some(Self {
                pattern,
                replacement: replacement.to_string(),
                match_case,
            }),
            Err(e) => {
                tracing::warn!("Skipping rewrite rule {:?}: {}", pattern, e);
                None
            }
        }
    }

    /// Apply this rule to every match in `text`
    ///
    /// Word rules carry a leading capital over from the matched text, so
    /// "Utilize" becomes "Use" at the start of a sentence.
    pub fn apply(&self, text: &str) -> String {
        if !self.match_case {
            return self
                .pattern
                .replace_all(text, regex::NoExpand(&self.replacement))
                .into_owned();
        }

        self.pattern
            .replace_all(text, |caps: &Captures| {
                let matched = caps.get(0).map_or("", |m| m.as_str());
                if starts_uppercase(matched) {
                    capitalize(&self.replacement)
                } else {
                    self.replacement.clone()
                }
            })
            .into_owned()
    }
}

/// Built-in rule table for a tone (empty for tones driven by a structural step only)
pub fn rules_for(tone: Tone) -> &'static [Rule] {
    match tone {
        Tone::Formal => FORMAL_RULES.as_slice(),
        Tone::Friendly => FRIENDLY_RULES.as_slice(),
        Tone::Assertive => ASSERTIVE_RULES.as_slice(),
        Tone::Simplified => SIMPLIFIED_RULES.as_slice(),
        Tone::Empathetic | Tone::Concise => &[],
    }
}

/// Apply rules in order, each seeing the output of the previous one
pub fn apply_all(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Compile user-configured replacements (case-insensitive whole phrases)
pub fn compile_replacements(replacements: &BTreeMap<String, String>) -> Vec<Rule> {
    replacements
        .iter()
        .filter(|(from, _)| !from.trim().is_empty())
        .filter_map(|(from, to)| Rule::phrase(from, to))
        .collect()
}

fn compile_words(table: &[(&str, &str)]) -> Vec<Rule> {
    table
        .iter()
        .filter_map(|(fragment, replacement)| Rule::word(fragment, replacement))
        .collect()
}

fn compile_literals(table: &[(&str, &str)]) -> Vec<Rule> {
    table
        .iter()
        .filter_map(|(text, replacement)| Rule::literal(text, replacement))
        .collect()
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile_completely() {
        assert_eq!(rules_for(Tone::Formal).len(), FORMAL_TABLE.len());
        assert_eq!(rules_for(Tone::Friendly).len(), FRIENDLY_TABLE.len());
        assert_eq!(rules_for(Tone::Assertive).len(), ASSERTIVE_TABLE.len() + 1);
        assert_eq!(rules_for(Tone::Simplified).len(), SIMPLIFIED_TABLE.len());
        assert!(rules_for(Tone::Empathetic).is_empty());
        assert!(rules_for(Tone::Concise).is_empty());
    }

    #[test]
    fn test_word_rule_respects_boundaries() {
        let rule = Rule::word("utilize", "use").unwrap();
        assert_eq!(rule.apply("we utilize it"), "we use it");
        assert_eq!(rule.apply("underutilized"), "underutilized");
    }

    #[test]
    fn test_word_rule_keeps_leading_capital() {
        let rule = Rule::word("don{A}t", "do not").unwrap();
        assert_eq!(rule.apply("Don't go"), "Do not go");
        assert_eq!(rule.apply("I don't"), "I do not");
        assert_eq!(rule.apply("I DON\u{2019}T"), "I Do not");
    }

    #[test]
    fn test_literal_rule_is_case_sensitive() {
        let rule = Rule::literal("Dear", "Hi").unwrap();
        assert_eq!(rule.apply("Dear Sam"), "Hi Sam");
        assert_eq!(rule.apply("dear Sam"), "dear Sam");
    }

    #[test]
    fn test_literal_rule_does_not_expand_captures() {
        let rule = Rule::literal("cost", "$1").unwrap();
        assert_eq!(rule.apply("the cost"), "the $1");
    }

    #[test]
    fn test_apply_all_is_ordered() {
        let text = "Could you maybe help?";
        assert_eq!(
            apply_all(rules_for(Tone::Assertive), text),
            "Please  help."
        );
    }

    #[test]
    fn test_compile_replacements_skips_blank_keys() {
        let mut map = BTreeMap::new();
        map.insert("neuro lens".to_string(), "NeuroLens".to_string());
        map.insert("  ".to_string(), "x".to_string());
        let rules = compile_replacements(&map);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].apply("open Neuro Lens now"), "open NeuroLens now");
    }
}
