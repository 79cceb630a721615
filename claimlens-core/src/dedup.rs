//! Citation pool deduplication.

use std::collections::HashSet;

use crate::types::Citation;

/// Collapse a citation pool to its first occurrence per normalized quote (or source
/// name when the quote is empty). Citations with neither are dropped.
pub fn dedupe_citations(citations: &[Citation]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(citations.len());

    for citation in citations {
        let Some(key) = citation.dedup_key() else {
            continue;
        };
        if seen.insert(key) {
            unique.push(citation.clone());
        }
    }

    if unique.len() < citations.len() {
        tracing::trace!(
            before = citations.len(),
            after = unique.len(),
            "Deduplicated citation pool"
        );
    }
    unique
}
