//! Claim splitting.
//!
//! Breaks a block of summary prose, or a bulleted / line-broken list, into a short
//! ordered list of independently checkable claims. Over-splitting produces fragments
//! that cannot be scored against a quote, so short and dangling pieces are merged
//! back into their neighbours and the result is capped.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::SplitterConfig;
use crate::text::{
    content_tokens, extract_numbers, has_alphanumeric, normalize_whitespace, word_count,
};

static LIST_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\s+[-•]\s+").expect("list separator pattern is valid"));

static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-•*·–—]|\d{1,2}[.)])\s+").expect("bullet prefix pattern is valid")
});

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.;!?]+(?:\s+|$)").expect("sentence end pattern is valid"));

/// How the raw text is cut into candidate parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Line breaks and ` - ` / ` • ` separators.
    List,
    /// Sentence-ending punctuation.
    Prose,
}

impl SplitMode {
    pub fn detect(text: &str) -> Self {
        let trimmed = text.trim();
        if LIST_SEPARATOR_RE.is_match(trimmed) || BULLET_PREFIX_RE.is_match(trimmed) {
            SplitMode::List
        } else {
            SplitMode::Prose
        }
    }

    /// Normalized, non-empty parts in order.
    fn parts(self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        let raw: Vec<&str> = match self {
            SplitMode::List => LIST_SEPARATOR_RE.split(trimmed).collect(),
            SplitMode::Prose => sentences(trimmed),
        };
        raw.into_iter()
            .map(|part| {
                let part = normalize_whitespace(part);
                match self {
                    SplitMode::List => BULLET_PREFIX_RE.replace(&part, "").trim().to_string(),
                    SplitMode::Prose => part,
                }
            })
            .filter(|part| !part.is_empty())
            .collect()
    }
}

/// Sentences with their terminating punctuation kept.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(text) {
        out.push(text[start..m.end()].trim_end());
        start = m.end();
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// A part is worth keeping when it has letters or digits and either a content word
/// or a number.
fn is_meaningful(part: &str) -> bool {
    has_alphanumeric(part)
        && (!content_tokens(part).is_empty() || !extract_numbers(part).is_empty())
}

fn bare_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Splits summary text into claims.
#[derive(Debug, Clone, Default)]
pub struct ClaimSplitter {
    config: SplitterConfig,
}

impl ClaimSplitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into at most `max_claims` claims.
    ///
    /// Returns an empty list only when the text is empty after normalization; when
    /// splitting is not useful the whole normalized text is the single claim.
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized = normalize_whitespace(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mode = SplitMode::detect(text);
        let parts = mode.parts(text);
        tracing::trace!(?mode, parts = parts.len(), "Split summary text");
        if parts.len() <= 1 {
            return vec![normalized];
        }

        let meaningful: Vec<String> = parts.into_iter().filter(|p| is_meaningful(p)).collect();
        let claims: Vec<String> = self
            .merge_fragments(meaningful)
            .into_iter()
            .filter(|claim| {
                !extract_numbers(claim).is_empty()
                    || word_count(claim) >= self.config.min_standalone_words
            })
            .take(self.config.max_claims)
            .collect();

        if claims.is_empty() {
            vec![normalized]
        } else {
            claims
        }
    }

    /// The part opens with a continuation word ("And", "Also").
    fn is_continuation(&self, part: &str) -> bool {
        let Some(first) = part.split_whitespace().next().map(bare_word) else {
            return false;
        };
        self.config
            .continuation_words
            .iter()
            .any(|w| w.eq_ignore_ascii_case(&first))
    }

    fn should_merge(&self, part: &str) -> bool {
        word_count(part) < self.config.min_claim_words || self.is_continuation(part)
    }

    /// Fold short or dangling parts into the previous claim. Leading fragments with no
    /// previous claim are held and prefixed to the next part.
    fn merge_fragments(&self, parts: Vec<String>) -> Vec<String> {
        let mut claims: Vec<String> = Vec::new();
        let mut pending: Option<String> = None;

        for part in parts {
            if self.should_merge(&part) {
                if let Some(last) = claims.last_mut() {
                    last.push(' ');
                    last.push_str(&part);
                } else {
                    pending = Some(match pending.take() {
                        Some(held) => format!("{} {}", held, part),
                        None => part,
                    });
                }
            } else {
                let claim = match pending.take() {
                    Some(held) => format!("{} {}", held, part),
                    None => part,
                };
                claims.push(claim);
            }
        }

        // Only reachable when every part was a fragment.
        if let Some(held) = pending {
            claims.push(held);
        }
        claims
    }
}

/// Split with the default heuristics.
pub fn split_into_claims(text: &str) -> Vec<String> {
    ClaimSplitter::default().split(text)
}
