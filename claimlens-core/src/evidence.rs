//! Best-evidence selection for a single claim.

use crate::dedup::dedupe_citations;
use crate::matcher::ClaimMatcher;
use crate::types::{BestEvidence, Citation};

impl ClaimMatcher {
    /// Score `claim` against every quoted citation in the deduplicated pool and keep
    /// the highest scorer. Ties keep the earlier citation; a citation must score above
    /// zero to be chosen. Any quote that agrees with the claim's polarity outranks
    /// one that conflicts with it.
    pub fn best_evidence(&self, claim: &str, citations: &[Citation]) -> BestEvidence {
        let mut best = BestEvidence::default();

        for citation in dedupe_citations(citations) {
            if !citation.has_quote() {
                continue;
            }
            let m = self.match_quote(claim, citation.quote_text());
            if m.score <= 0.0 {
                continue;
            }
            let better = if best.best.is_none() || m.polarity_conflict != best.polarity_conflict {
                !m.polarity_conflict || best.best.is_none()
            } else {
                m.score > best.score
            };
            if better {
                best = BestEvidence {
                    best: Some(citation),
                    score: m.score,
                    overlap: m.overlap,
                    has_number_match: m.has_number_match,
                    polarity_conflict: m.polarity_conflict,
                };
            }
        }

        best
    }
}

/// Best evidence with the default weights.
pub fn find_best_evidence_for_claim(claim: &str, citations: &[Citation]) -> BestEvidence {
    ClaimMatcher::default().best_evidence(claim, citations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CLAIM: &str = "Proposition 47 reduces penalties for theft under $950.";

    #[test]
    fn test_empty_pool_has_no_evidence() {
        let best = find_best_evidence_for_claim(CLAIM, &[]);
        assert_eq!(best, BestEvidence::default());
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_unquoted_citations_are_ignored() {
        let citations = vec![
            Citation::new("Proposition 47 reduces penalties for theft under $950"),
            Citation::new("LAO").with_quote("   "),
        ];
        let best = find_best_evidence_for_claim(CLAIM, &citations);
        assert!(best.best.is_none());
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_highest_scoring_citation_wins() {
        let citations = vec![
            Citation::new("Weak").with_quote("Penalties were discussed at length."),
            Citation::new("Strong")
                .with_quote("Proposition 47 reduces penalties for theft when the value is $950 or less."),
            Citation::new("Unrelated").with_quote("The library opens at nine."),
        ];
        let best = find_best_evidence_for_claim(CLAIM, &citations);
        assert_eq!(best.best.as_ref().map(|c| c.source_name.as_str()), Some("Strong"));
        assert!(best.has_number_match);
        assert!(best.overlap > 0.9);
    }

    #[test]
    fn test_ties_keep_first_found() {
        let citations = vec![
            Citation::new("First").with_quote("Theft penalties change."),
            Citation::new("Second").with_quote("Penalties for theft change!"),
        ];
        let best = find_best_evidence_for_claim(CLAIM, &citations);
        assert_eq!(best.best.map(|c| c.source_name), Some("First".to_string()));
    }

    #[test]
    fn test_duplicates_collapse_before_matching() {
        let citations = vec![
            Citation::new("Original").with_quote("Theft under $950 is a misdemeanor."),
            Citation::new("Copy").with_quote("theft under $950 is a MISDEMEANOR."),
        ];
        let best = find_best_evidence_for_claim(CLAIM, &citations);
        assert_eq!(best.best.map(|c| c.source_name), Some("Original".to_string()));
    }

    #[test]
    fn test_agreeing_quote_outranks_conflicting_one() {
        let claim = "No new taxes are imposed on renters";
        let citations = vec![
            Citation::new("Opponents").with_quote("New taxes are imposed on renters."),
            Citation::new("Analyst").with_quote("Renters see no new taxes under the measure."),
        ];
        let best = find_best_evidence_for_claim(claim, &citations);
        assert_eq!(best.best.map(|c| c.source_name), Some("Analyst".to_string()));
        assert!(!best.polarity_conflict);

        let best = find_best_evidence_for_claim(claim, &citations[..1]);
        assert_eq!(best.best.map(|c| c.source_name), Some("Opponents".to_string()));
        assert!(best.polarity_conflict);
    }

    #[test]
    fn test_zero_scoring_quotes_never_win() {
        let citations = vec![Citation::new("Unrelated").with_quote("The library opens at nine.")];
        let best = find_best_evidence_for_claim(CLAIM, &citations);
        assert!(best.best.is_none());
    }
}
