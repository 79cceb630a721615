//! Per-claim support verdicts.
//!
//! A claim is `supported` only when its best citation clears both the caller's score
//! threshold and an overlap floor that depends on claim length: short, specific claims
//! need near-complete lexical coverage, longer ones tolerate partial coverage. A best
//! citation whose negation disagrees with the claim never supports it.

use crate::config::{ScoringConfig, SupportConfig};
use crate::matcher::ClaimMatcher;
use crate::text::content_tokens;
use crate::types::{AnnotatedClaim, Citation, ClaimStatus};

/// Annotates claims with their best supporting citation.
#[derive(Debug, Clone, Default)]
pub struct ClaimAnnotator {
    matcher: ClaimMatcher,
    support: SupportConfig,
}

impl ClaimAnnotator {
    pub fn new(scoring: ScoringConfig, support: SupportConfig) -> Self {
        Self {
            matcher: ClaimMatcher::new(scoring),
            support,
        }
    }

    pub fn support(&self) -> &SupportConfig {
        &self.support
    }

    /// Annotate every claim, preserving length and order. Total over all inputs: an
    /// empty pool leaves every claim unverified with a zero score.
    pub fn annotate<S: AsRef<str>>(
        &self,
        claims: &[S],
        citations: &[Citation],
        threshold: f64,
    ) -> Vec<AnnotatedClaim> {
        claims
            .iter()
            .map(|claim| self.annotate_one(claim.as_ref(), citations, threshold))
            .collect()
    }

    fn annotate_one(&self, claim: &str, citations: &[Citation], threshold: f64) -> AnnotatedClaim {
        let evidence = self.matcher.best_evidence(claim, citations);
        let min_overlap = self.support.min_overlap_for(content_tokens(claim).len());

        let supported = evidence.best.is_some()
            && !evidence.polarity_conflict
            && evidence.score >= threshold
            && evidence.overlap >= min_overlap;
        let status = if supported {
            ClaimStatus::Supported
        } else {
            ClaimStatus::Unverified
        };

        tracing::debug!(
            claim,
            %status,
            score = evidence.score,
            overlap = evidence.overlap,
            min_overlap,
            number_match = evidence.has_number_match,
            polarity_conflict = evidence.polarity_conflict,
            "Annotated claim"
        );

        AnnotatedClaim {
            claim: claim.to_string(),
            status,
            // Unverified claims carry no citation so nothing implies attribution.
            best_citation: if supported { evidence.best } else { None },
            score: evidence.score,
            overlap: evidence.overlap,
        }
    }
}

/// Annotate with the default weights and overlap floors.
pub fn annotate_claims_with_evidence<S: AsRef<str>>(
    claims: &[S],
    citations: &[Citation],
    threshold: f64,
) -> Vec<AnnotatedClaim> {
    ClaimAnnotator::default().annotate(claims, citations, threshold)
}
