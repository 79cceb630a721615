//! Claim–quote similarity scoring.
//!
//! Claim-centric overlap is weighted above symmetric Jaccard so a long excerpt that
//! fully restates a short claim still scores well. A shared verbatim number (dollar
//! thresholds, percentages, years) earns a fixed bonus. A quote that shares content
//! with the claim but disagrees on negation is flagged as a polarity conflict.

use std::collections::HashSet;

use crate::config::ScoringConfig;
use crate::text::{content_tokens, extract_numbers, is_negated, normalize_whitespace};
use crate::types::EvidenceMatch;

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Scores claims against quoted evidence.
#[derive(Debug, Clone, Default)]
pub struct ClaimMatcher {
    scoring: ScoringConfig,
}

impl ClaimMatcher {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Compare one claim with one quote. Provenance fields of the result are left
    /// empty; see [`EvidenceMatch::attributed_to`].
    pub fn match_quote(&self, claim: &str, quote: &str) -> EvidenceMatch {
        let claim_tokens: HashSet<String> = content_tokens(claim).into_iter().collect();
        let quote_tokens: HashSet<String> = content_tokens(quote).into_iter().collect();

        let shared = claim_tokens.intersection(&quote_tokens).count();
        let union = claim_tokens.union(&quote_tokens).count();
        let jaccard = ratio(shared, union);
        let overlap = ratio(shared, claim_tokens.len());

        let quote_numbers: HashSet<String> = extract_numbers(quote).into_iter().collect();
        let has_number_match = extract_numbers(claim)
            .iter()
            .any(|n| quote_numbers.contains(n));
        let polarity_conflict = shared > 0 && is_negated(claim) != is_negated(quote);

        let mut score = (self.scoring.overlap_weight * overlap
            + self.scoring.jaccard_weight * jaccard)
            .clamp(0.0, 1.0);
        if has_number_match {
            score = (score + self.scoring.number_bonus).clamp(0.0, 1.0);
        }

        EvidenceMatch {
            quote: normalize_whitespace(quote),
            source_name: String::new(),
            url: None,
            score,
            overlap,
            has_number_match,
            polarity_conflict,
        }
    }
}

/// Score with the default weights.
pub fn match_claim_to_quote(claim: &str, quote: &str) -> EvidenceMatch {
    ClaimMatcher::default().match_quote(claim, quote)
}
