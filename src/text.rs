//! Text utilities: normalization, keyword extraction, topic suggestions,
//! debate tips, and input validation for the string boundary.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::lexicon::{DEBATE_TIPS, STOP_WORDS, TOPIC_QUESTIONS};
use crate::error::InputError;

/// Minimum trimmed topic length accepted at the input boundary.
pub const MIN_TOPIC_CHARS: usize = 10;
/// Minimum trimmed argument length accepted at the input boundary.
pub const MIN_ARGUMENT_CHARS: usize = 20;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract content keywords: lower-cased, punctuation stripped, stop words
/// and short words dropped, deduplicated in first-appearance order.
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for word in stripped.split_whitespace() {
        if word.chars().count() < min_length || STOP_WORDS.contains(&word) {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

/// Cross the first few keywords with the first question frames to propose
/// related debate topics.
pub fn topic_suggestions(keywords: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    for keyword in keywords.iter().take(3) {
        for question in TOPIC_QUESTIONS.iter().take(2) {
            suggestions.push(question.replace("{keyword}", keyword));
        }
    }
    suggestions
}

/// Sample `count` debate tips without replacement.
pub fn debate_tips(rng: &mut impl Rng, count: usize) -> Vec<&'static str> {
    DEBATE_TIPS.choose_multiple(rng, count).copied().collect()
}

/// Validate a topic at the input boundary.
pub fn validate_topic(topic: &str) -> Result<(), InputError> {
    let length = topic.trim().chars().count();
    if length < MIN_TOPIC_CHARS {
        return Err(InputError::TopicTooShort { length });
    }
    Ok(())
}

/// Validate an argument at the input boundary.
pub fn validate_argument(argument: &str) -> Result<(), InputError> {
    let length = argument.trim().chars().count();
    if length < MIN_ARGUMENT_CHARS {
        return Err(InputError::ArgumentTooShort { length });
    }
    Ok(())
}

/// True when any needle occurs as a substring of the (already lower-cased)
/// haystack.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \t b \n  c  "), "a b c");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn keywords_drop_stop_words_and_short_words() {
        let keywords = extract_keywords("The rapid growth of AI is remarkable", 3);
        assert!(keywords.contains(&"rapid".to_string()));
        assert!(keywords.contains(&"growth".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"ai".to_string())); // under min length
    }

    #[test]
    fn keywords_keep_first_appearance_order_without_duplicates() {
        let keywords = extract_keywords("privacy matters; privacy online matters", 3);
        assert_eq!(keywords, vec!["privacy", "matters", "online"]);
    }

    #[test]
    fn keywords_strip_punctuation() {
        let keywords = extract_keywords("regulation, regulation!", 3);
        assert_eq!(keywords, vec!["regulation"]);
    }

    #[test]
    fn topic_suggestions_cross_keywords_with_questions() {
        let keywords = vec!["privacy".to_string(), "surveillance".to_string()];
        let suggestions = topic_suggestions(&keywords);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("privacy"));
        assert!(!suggestions[0].contains("{keyword}"));
    }

    #[test]
    fn tips_are_sampled_without_replacement() {
        let tips = debate_tips(&mut StdRng::seed_from_u64(1), 3);
        assert_eq!(tips.len(), 3);
        for (i, a) in tips.iter().enumerate() {
            for b in &tips[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn validation_bounds() {
        assert!(validate_topic("short").is_err());
        assert!(validate_topic("Remote work is better than office work").is_ok());
        assert!(validate_argument("too short").is_err());
        assert!(validate_argument("This argument is comfortably long enough.").is_ok());
    }

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("the evidence is clear", &["evidence"]));
        assert!(!contains_any("nothing here", &["evidence", "data"]));
    }
}
