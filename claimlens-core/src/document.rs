//! Whole-document verification.
//!
//! A summary document carries five named sections and the citation pool produced
//! alongside them. Verification splits and annotates each non-empty section and
//! computes section coverage once for the document.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::annotate::ClaimAnnotator;
use crate::config::VerifierConfig;
use crate::coverage::{Coverage, coverage_from};
use crate::error::DocumentError;
use crate::splitter::ClaimSplitter;
use crate::types::{AnnotatedClaim, Citation, SectionKind};

/// Plain-language summary sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarySections {
    #[serde(default)]
    pub tldr: String,
    #[serde(default, alias = "whatItDoes")]
    pub what_it_does: String,
    #[serde(default, alias = "whoIsAffected")]
    pub who_is_affected: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl SummarySections {
    /// Text of one section. List sections are joined line by line so the splitter
    /// treats each entry as a list item.
    pub fn section_text(&self, kind: SectionKind) -> String {
        match kind {
            SectionKind::Tldr => self.tldr.clone(),
            SectionKind::What => self.what_it_does.clone(),
            SectionKind::Who => self.who_is_affected.clone(),
            SectionKind::Pros => join_items(&self.pros),
            SectionKind::Cons => join_items(&self.cons),
        }
    }

    /// Every section in display order, empty ones included.
    pub fn blocks(&self) -> Vec<(SectionKind, String)> {
        SectionKind::ALL
            .iter()
            .map(|&kind| (kind, self.section_text(kind)))
            .collect()
    }
}

fn join_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A generated summary together with its candidate citations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: SummarySections,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl Document {
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Verdicts for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: SectionKind,
    pub claims: Vec<AnnotatedClaim>,
}

impl SectionReport {
    pub fn supported_count(&self) -> usize {
        self.claims.iter().filter(|c| c.is_supported()).count()
    }

    pub fn total_count(&self) -> usize {
        self.claims.len()
    }

    /// "Supported N/M claims", or the empty-state label when nothing was extracted.
    pub fn badge_label(&self) -> String {
        if self.claims.is_empty() {
            "No content available".to_string()
        } else {
            format!(
                "Supported {}/{} claims",
                self.supported_count(),
                self.total_count()
            )
        }
    }
}

/// Verification result for a whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sections: Vec<SectionReport>,
    pub coverage: Coverage,
    pub source_ratio: f64,
}

impl DocumentReport {
    pub fn supported_count(&self) -> usize {
        self.sections.iter().map(SectionReport::supported_count).sum()
    }

    pub fn claim_count(&self) -> usize {
        self.sections.iter().map(SectionReport::total_count).sum()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == kind)
    }
}

/// Runs the full pipeline over documents.
#[derive(Debug, Clone)]
pub struct DocumentVerifier {
    splitter: ClaimSplitter,
    annotator: ClaimAnnotator,
    threshold: f64,
}

impl Default for DocumentVerifier {
    fn default() -> Self {
        Self::new(&VerifierConfig::default())
    }
}

impl DocumentVerifier {
    pub fn new(config: &VerifierConfig) -> Self {
        Self {
            splitter: ClaimSplitter::new(config.splitter.clone()),
            annotator: ClaimAnnotator::new(config.scoring.clone(), config.support.clone()),
            threshold: config.support.threshold,
        }
    }

    /// Override the support threshold for this verifier.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn verify(&self, document: &Document) -> DocumentReport {
        let blocks = document.summary.blocks();

        let sections: Vec<SectionReport> = blocks
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(kind, text)| {
                let claims = self.splitter.split(text);
                SectionReport {
                    section: *kind,
                    claims: self
                        .annotator
                        .annotate(&claims, &document.citations, self.threshold),
                }
            })
            .collect();

        let texts: Vec<&str> = blocks.iter().map(|(_, text)| text.as_str()).collect();
        let coverage = coverage_from(&texts, &document.citations);

        let report = DocumentReport {
            title: document.title.clone(),
            sections,
            coverage,
            source_ratio: coverage.ratio(),
        };

        tracing::info!(
            title = report.title.as_deref().unwrap_or("untitled"),
            claims = report.claim_count(),
            supported = report.supported_count(),
            citations = document.citations.len(),
            coverage = %report.coverage.label(),
            "Verified document"
        );
        report
    }
}

/// Verify a document with the given configuration.
pub fn verify_document(document: &Document, config: &VerifierConfig) -> DocumentReport {
    DocumentVerifier::new(config).verify(document)
}
