//! Section coverage: how many summary sections have at least one attributable citation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::types::Citation;

/// Cited sections over non-empty sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub cited: usize,
    pub total: usize,
}

impl Coverage {
    /// `cited / total` clamped to 1; 0 when there are no sections.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.cited as f64 / self.total as f64).min(1.0)
    }

    /// "X/Y sections cited".
    pub fn label(&self) -> String {
        format!("{}/{} sections cited", self.cited.min(self.total), self.total)
    }
}

/// Coverage of `blocks` by the citation pool.
///
/// Location tags win when any citation has one; otherwise distinct source URLs are
/// counted as a proxy.
pub fn coverage_from<S: AsRef<str>>(blocks: &[S], citations: &[Citation]) -> Coverage {
    let total = blocks
        .iter()
        .filter(|block| !block.as_ref().trim().is_empty())
        .count();
    if total == 0 {
        return Coverage::default();
    }

    let locations: HashSet<_> = citations.iter().filter_map(|c| c.location).collect();
    let cited = if !locations.is_empty() {
        locations.len()
    } else {
        citations
            .iter()
            .filter_map(|c| c.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .collect::<HashSet<_>>()
            .len()
    };

    Coverage { cited, total }
}

/// Coverage ratio in [0, 1].
pub fn source_ratio_from<S: AsRef<str>>(blocks: &[S], citations: &[Citation]) -> f64 {
    coverage_from(blocks, citations).ratio()
}
