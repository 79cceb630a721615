//! Text normalization and tokenization.
//!
//! Everything downstream compares text through these helpers, so they are total:
//! empty or symbol-only input produces empty output, never a panic.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Tokens shorter than this carry too little signal to count as content.
pub const MIN_TOKEN_LEN: usize = 3;

/// Function words removed before lexical comparison. Negations stay out of this list.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "so", "if", "then", "than", "of", "to", "in",
    "on", "at", "by", "for", "with", "from", "into", "onto", "about", "over", "under", "as",
    "that", "this", "these", "those", "it", "its", "their", "which", "is", "are", "was", "were",
    "be", "been", "being", "has", "have", "had", "do", "does", "did", "will", "would", "shall",
    "should", "can", "could", "may", "might", "must",
];

/// Polarity markers. Always kept as content tokens, whatever their length.
pub const NEGATIONS: &[&str] = &[
    "no", "not", "nor", "never", "none", "neither", "without", "cannot",
];

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?").expect("number pattern is valid")
});

/// Fold compatibility characters (NBSP, ligatures) and collapse whitespace runs.
pub fn normalize_whitespace(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase comparison key.
pub fn normalize_key(text: &str) -> String {
    normalize_whitespace(text).to_lowercase()
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// Content tokens in order of appearance: lowercase, punctuation stripped, short
/// tokens and stopwords removed. Negations survive the length filter.
pub fn content_tokens(text: &str) -> Vec<String> {
    normalize_key(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| is_negation(w) || (w.chars().count() >= MIN_TOKEN_LEN && !is_stopword(w)))
        .map(String::from)
        .collect()
}

/// Whether the text is negated: a negation word or an `n't` contraction.
pub fn is_negated(text: &str) -> bool {
    let key = normalize_key(text).replace('\u{2019}', "'");
    key.contains("n't")
        || key
            .split(|c: char| !c.is_alphanumeric())
            .any(is_negation)
}

/// Integers and decimals in order of appearance. Thousands separators are removed
/// so `1,000` and `1000` compare equal.
pub fn extract_numbers(text: &str) -> Vec<String> {
    NUMBER_RE
        .find_iter(text)
        .map(|m| m.as_str().replace(',', ""))
        .collect()
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn has_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_whitespace_collapses_and_folds() {
        assert_eq!(
            normalize_whitespace("  Prop\u{00A0}47\n\n reduces\tpenalties  "),
            "Prop 47 reduces penalties"
        );
        assert_eq!(normalize_whitespace("e\u{FB03}cient"), "efficient");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_normalize_key_lowercases() {
        assert_eq!(normalize_key("  The  BILL "), "the bill");
    }

    #[test]
    fn test_content_tokens_strip_stopwords_and_punctuation() {
        assert_eq!(
            content_tokens("Proposition 47 reduces penalties for theft under $950."),
            vec!["proposition", "reduces", "penalties", "theft", "950"]
        );
    }

    #[test]
    fn test_content_tokens_keep_negations() {
        let tokens = content_tokens("It does not raise taxes");
        assert!(tokens.contains(&"not".to_string()));
        assert!(tokens.contains(&"raise".to_string()));
        assert!(!tokens.contains(&"does".to_string()));
    }

    #[test]
    fn test_short_negations_are_content() {
        assert_eq!(content_tokens("No new taxes"), vec!["no", "new", "taxes"]);
        assert_eq!(
            content_tokens("Neither renters nor owners pay"),
            vec!["neither", "renters", "nor", "owners", "pay"]
        );
    }

    #[test]
    fn test_is_negated() {
        assert!(is_negated("No new taxes are imposed"));
        assert!(is_negated("The fee isn't refundable"));
        assert!(is_negated("The fee isn\u{2019}t refundable"));
        assert!(is_negated("Funds are spent without review"));
        assert!(!is_negated("New taxes are imposed on renters"));
        assert!(!is_negated("Notable changes to nonprofit rules"));
        assert!(!is_negated(""));
    }

    #[test]
    fn test_content_tokens_empty_and_symbol_input() {
        assert!(content_tokens("").is_empty());
        assert!(content_tokens("!!! ... ---").is_empty());
        assert!(content_tokens("the of and").is_empty());
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(
            extract_numbers("Raises the cap from $1,000 to 2500.50 by 2026."),
            vec!["1000", "2500.50", "2026"]
        );
        assert_eq!(extract_numbers("theft under $950."), vec!["950"]);
        assert_eq!(extract_numbers("a 3.5% increase"), vec!["3.5"]);
        assert!(extract_numbers("no figures here").is_empty());
        assert!(extract_numbers("").is_empty());
    }

    #[test]
    fn test_word_count_and_alphanumeric() {
        assert_eq!(word_count("and reduces penalties"), 3);
        assert_eq!(word_count("   "), 0);
        assert!(has_alphanumeric("- 5 -"));
        assert!(!has_alphanumeric("• — …"));
    }
}
