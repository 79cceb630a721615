//! Shared value types: citations, evidence matches and annotated claims.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::text::normalize_key;

/// Summary section a citation was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// One-line TL;DR.
    Tldr,
    /// What the measure does.
    What,
    /// Who is affected.
    Who,
    /// Arguments in favour.
    Pros,
    /// Arguments against.
    Cons,
}

impl SectionKind {
    /// All sections in display order.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Tldr,
        SectionKind::What,
        SectionKind::Who,
        SectionKind::Pros,
        SectionKind::Cons,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Tldr => "tldr",
            SectionKind::What => "what",
            SectionKind::Who => "who",
            SectionKind::Pros => "pros",
            SectionKind::Cons => "cons",
        }
    }

    /// Human-readable heading.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Tldr => "TL;DR",
            SectionKind::What => "What it does",
            SectionKind::Who => "Who's affected",
            SectionKind::Pros => "Pros",
            SectionKind::Cons => "Cons",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a section tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown summary section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tldr" | "tl;dr" | "tl_dr" => Ok(SectionKind::Tldr),
            "what" | "what_it_does" | "whatitdoes" => Ok(SectionKind::What),
            "who" | "who_is_affected" | "whoisaffected" | "who_affected" => Ok(SectionKind::Who),
            "pros" | "pro" => Ok(SectionKind::Pros),
            "cons" | "con" => Ok(SectionKind::Cons),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Upstream generators emit free-form tags; anything unrecognised is treated as absent.
fn lenient_location<'de, D>(deserializer: D) -> Result<Option<SectionKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match raw.parse::<SectionKind>() {
        Ok(kind) => Ok(Some(kind)),
        Err(e) => {
            tracing::warn!(tag = %raw, "Dropping citation location: {}", e);
            Ok(None)
        }
    }
}

/// One piece of evidence offered by the summary generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Excerpt claimed to support some assertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Human-readable provenance label.
    #[serde(default, alias = "sourceName")]
    pub source_name: String,
    /// Link to the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Section this citation was meant to support.
    #[serde(
        default,
        deserialize_with = "lenient_location",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<SectionKind>,
}

impl Citation {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn at(mut self, location: SectionKind) -> Self {
        self.location = Some(location);
        self
    }

    /// Quote text, empty when absent.
    pub fn quote_text(&self) -> &str {
        self.quote.as_deref().unwrap_or("")
    }

    /// Whether the citation carries a quote with any visible content.
    pub fn has_quote(&self) -> bool {
        !self.quote_text().trim().is_empty()
    }

    /// Key used to collapse duplicate citations: the normalized quote, else the
    /// normalized source name. `None` when both are empty.
    pub fn dedup_key(&self) -> Option<String> {
        let quote_key = normalize_key(self.quote_text());
        if !quote_key.is_empty() {
            return Some(quote_key);
        }
        let source_key = normalize_key(&self.source_name);
        (!source_key.is_empty()).then_some(source_key)
    }
}

/// Result of comparing one claim with one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceMatch {
    /// Normalized quote text.
    pub quote: String,
    /// Provenance label, filled in by the caller.
    #[serde(default)]
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Combined similarity in [0, 1].
    pub score: f64,
    /// Fraction of the claim's content tokens found in the quote.
    pub overlap: f64,
    /// Claim and quote share a verbatim number.
    pub has_number_match: bool,
    /// Claim and quote share content but only one of them is negated.
    #[serde(default)]
    pub polarity_conflict: bool,
}

impl EvidenceMatch {
    /// Attach provenance from the citation the quote came from.
    pub fn attributed_to(mut self, citation: &Citation) -> Self {
        self.source_name = citation.source_name.clone();
        self.url = citation.url.clone();
        self
    }
}

/// Best-scoring citation for one claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestEvidence {
    pub best: Option<Citation>,
    pub score: f64,
    pub overlap: f64,
    pub has_number_match: bool,
    pub polarity_conflict: bool,
}

/// Verdict for a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Supported,
    Unverified,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Supported => "supported",
            ClaimStatus::Unverified => "unverified",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim with its verification verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedClaim {
    pub claim: String,
    pub status: ClaimStatus,
    /// Present only for supported claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_citation: Option<Citation>,
    pub score: f64,
    pub overlap: f64,
}

impl AnnotatedClaim {
    pub fn is_supported(&self) -> bool {
        self.status == ClaimStatus::Supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_kind_parses_aliases() {
        assert_eq!("TL;DR".parse::<SectionKind>().unwrap(), SectionKind::Tldr);
        assert_eq!(
            "what_it_does".parse::<SectionKind>().unwrap(),
            SectionKind::What
        );
        assert_eq!(" who ".parse::<SectionKind>().unwrap(), SectionKind::Who);
        assert!("footnotes".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_citation_deserializes_camel_case_and_unknown_location() {
        let citation: Citation = serde_json::from_str(
            r#"{"quote": "Value is $950 or less.", "sourceName": "LAO", "location": "appendix"}"#,
        )
        .unwrap();
        assert_eq!(citation.source_name, "LAO");
        assert_eq!(citation.quote.as_deref(), Some("Value is $950 or less."));
        assert_eq!(citation.location, None);
        assert_eq!(citation.url, None);
    }

    #[test]
    fn test_citation_location_roundtrips_as_snake_case() {
        let citation = Citation::new("Ballotpedia").at(SectionKind::Pros);
        let json = serde_json::to_value(&citation).unwrap();
        assert_eq!(json["location"], "pros");
        assert!(json.get("quote").is_none());
    }

    #[test]
    fn test_missing_quote_is_distinct_from_empty_quote() {
        let absent: Citation = serde_json::from_str(r#"{"source_name": "A"}"#).unwrap();
        let empty: Citation =
            serde_json::from_str(r#"{"source_name": "A", "quote": ""}"#).unwrap();
        assert_eq!(absent.quote, None);
        assert_eq!(empty.quote, Some(String::new()));
        assert!(!absent.has_quote());
        assert!(!empty.has_quote());
    }

    #[test]
    fn test_dedup_key_prefers_quote_then_source() {
        let quoted = Citation::new("LAO").with_quote("  Petty   THEFT ");
        assert_eq!(quoted.dedup_key().as_deref(), Some("petty theft"));

        let unquoted = Citation::new("Secretary of State").with_quote("   ");
        assert_eq!(unquoted.dedup_key().as_deref(), Some("secretary of state"));

        assert_eq!(Citation::default().dedup_key(), None);
    }

    #[test]
    fn test_evidence_match_attribution() {
        let m = EvidenceMatch {
            quote: "q".into(),
            source_name: String::new(),
            url: None,
            score: 0.5,
            overlap: 0.5,
            has_number_match: false,
            polarity_conflict: false,
        };
        let citation = Citation::new("LAO").with_url("https://lao.ca.gov");
        let m = m.attributed_to(&citation);
        assert_eq!(m.source_name, "LAO");
        assert_eq!(m.url.as_deref(), Some("https://lao.ca.gov"));
    }
}
