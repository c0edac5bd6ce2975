//! Structural post-steps that run after a tone's rule table
//!
//! These operate on sentence or document shape rather than on individual
//! words, so they are plain string walks instead of regex rules.

use rand::Rng;

/// Prefix added by the Formal tone when the text opens casually
pub const FORMAL_SALUTATION: &str = "Dear recipient,\n\n";

/// Openers the Empathetic tone chooses from
pub const EMPATHY_PHRASES: [&str; 4] = [
    "I understand",
    "I hear you",
    "That makes sense",
    "I appreciate you sharing",
];

/// Friendly marker is only added to text longer than this many characters
pub const FRIENDLY_MIN_CHARS: usize = 20;

/// Sentences with more tokens than this are split at conjunctions
pub const LONG_SENTENCE_TOKENS: usize = 15;

/// Number of sentences kept by the Concise tone
pub const CONCISE_MAX_SENTENCES: usize = 3;

const CASUAL_GREETINGS: [&str; 2] = ["hey", "hi"];
const CONJUNCTIONS: [&str; 3] = [" and ", " but ", " however "];

/// Prepend a formal salutation when the text opens with "hey" or "hi"
pub fn add_formal_salutation(text: &str) -> String {
    let first_word = text
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();

    if CASUAL_GREETINGS
        .iter()
        .any(|greeting| first_word.eq_ignore_ascii_case(greeting))
    {
        format!("{}{}", FORMAL_SALUTATION, text)
    } else {
        text.to_string()
    }
}

/// Mark the end of the first sentence with an exclamation and `marker`
///
/// Text that already contains `!` or is too short is returned unchanged.
/// The first period followed by whitespace (or ending the text) becomes
/// `! <marker>`. Without such a period the marker goes at the end; a
/// trailing question mark is kept as is.
pub fn add_friendly_marker(text: &str, marker: &str) -> String {
    if text.contains('!') || text.chars().count() <= FRIENDLY_MIN_CHARS {
        return text.to_string();
    }

    let exclaim = if marker.is_empty() {
        "!".to_string()
    } else {
        format!("! {}", marker)
    };

    let boundary = text.char_indices().find_map(|(i, c)| {
        let at_boundary = c == '.'
            && text[i + 1..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);
        at_boundary.then_some(i)
    });

    match boundary {
        Some(i) => format!("{}{}{}", &text[..i], exclaim, &text[i + 1..]),
        None => {
            let body = text.trim_end();
            if body.ends_with('?') {
                if marker.is_empty() {
                    body.to_string()
                } else {
                    format!("{} {}", body, marker)
                }
            } else {
                format!("{}{}", body, exclaim)
            }
        }
    }
}

/// Collapse every whitespace run to one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split overly long sentences at their conjunctions
///
/// Sentences are delimited by `.`, trimmed, and rejoined with `". "`.
/// A sentence with more than [`LONG_SENTENCE_TOKENS`] space-separated tokens
/// has the first occurrence of each conjunction replaced by a sentence
/// break. A trailing period on the input is kept.
pub fn split_long_sentences(text: &str) -> String {
    let sentences: Vec<String> = text
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            if sentence.split(' ').count() > LONG_SENTENCE_TOKENS {
                break_at_conjunctions(sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    let mut result = sentences.join(". ");
    if !result.is_empty() && text.trim_end().ends_with('.') {
        result.push('.');
    }
    result
}

fn break_at_conjunctions(sentence: &str) -> String {
    CONJUNCTIONS
        .iter()
        .fold(sentence.to_string(), |acc, conjunction| {
            acc.replacen(conjunction, ". ", 1)
        })
}

/// Keep the first few sentences
///
/// Splits on `.`, drops empty pieces, keeps [`CONCISE_MAX_SENTENCES`], and
/// rejoins with `". "`. A final `.` is added only when the input had more
/// periods than sentences kept.
pub fn keep_first_sentences(text: &str) -> String {
    let kept: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .take(CONCISE_MAX_SENTENCES)
        .collect();

    let mut result = kept.join(". ");
    if text.matches('.').count() > CONCISE_MAX_SENTENCES {
        result.push('.');
    }
    result
}

/// Pick an empathetic opener uniformly at random
pub fn pick_empathy_phrase<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EMPATHY_PHRASES[rng.random_range(0..EMPATHY_PHRASES.len())]
}

/// Open `text` with a randomly chosen empathetic phrase
pub fn add_empathy_opener<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    format!("{}. {}", pick_empathy_phrase(rng), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_salutation_on_casual_opening() {
        assert_eq!(
            add_formal_salutation("hey team, quick update"),
            "Dear recipient,\n\nhey team, quick update"
        );
        assert_eq!(
            add_formal_salutation("Hi! Any news?"),
            "Dear recipient,\n\nHi! Any news?"
        );
    }

    #[test]
    fn test_salutation_needs_whole_greeting_word() {
        assert_eq!(add_formal_salutation("history lesson"), "history lesson");
        assert_eq!(add_formal_salutation("Heya"), "Heya");
        assert_eq!(add_formal_salutation(""), "");
    }

    #[test]
    fn test_friendly_marker_at_first_sentence() {
        assert_eq!(
            add_friendly_marker("Thanks for the notes. See you on Monday.", "😊"),
            "Thanks for the notes! 😊 See you on Monday."
        );
    }

    #[test]
    fn test_friendly_marker_ignores_inner_periods() {
        assert_eq!(
            add_friendly_marker("Version 2.5 ships tomorrow morning", "😊"),
            "Version 2.5 ships tomorrow morning! 😊"
        );
    }

    #[test]
    fn test_friendly_marker_after_question() {
        assert_eq!(
            add_friendly_marker("Are you free for lunch this week?", "😊"),
            "Are you free for lunch this week? 😊"
        );
    }

    #[test]
    fn test_friendly_marker_skips_short_or_excited_text() {
        assert_eq!(add_friendly_marker("Short one.", "😊"), "Short one.");
        assert_eq!(
            add_friendly_marker("Already excited about this one!", "😊"),
            "Already excited about this one!"
        );
    }

    #[test]
    fn test_friendly_marker_empty_marker() {
        assert_eq!(
            add_friendly_marker("Thanks for the detailed notes.", ""),
            "Thanks for the detailed notes!"
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_split_long_sentence() {
        let text = "We went to the market early in the morning to buy fresh bread and then we walked home slowly.";
        assert_eq!(
            split_long_sentences(text),
            "We went to the market early in the morning to buy fresh bread. then we walked home slowly."
        );
    }

    #[test]
    fn test_short_sentences_untouched() {
        assert_eq!(
            split_long_sentences("Bread and butter. Salt and pepper."),
            "Bread and butter. Salt and pepper."
        );
        assert_eq!(split_long_sentences("no period here"), "no period here");
        assert_eq!(split_long_sentences(""), "");
    }

    #[test]
    fn test_keep_first_sentences() {
        assert_eq!(
            keep_first_sentences("One. Two. Three. Four."),
            "One. Two. Three."
        );
        assert_eq!(keep_first_sentences("One. Two. Three."), "One. Two. Three");
        assert_eq!(keep_first_sentences("Just one"), "Just one");
        assert_eq!(keep_first_sentences("...."), ".");
        assert_eq!(keep_first_sentences(""), "");
    }

    #[test]
    fn test_empathy_phrase_is_seed_stable() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pick_empathy_phrase(&mut a), pick_empathy_phrase(&mut b));
        }
    }

    #[test]
    fn test_empathy_phrase_covers_all_openers() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_empathy_phrase(&mut rng));
        }
        assert_eq!(seen.len(), EMPATHY_PHRASES.len());
    }
}
