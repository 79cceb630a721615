//! # Claimlens Core
//!
//! Lexical claim verification for AI-generated legislation summaries. A summary is
//! split into short claims, each claim is scored against the citation pool produced
//! with it, and every claim is marked `supported` or `unverified`. A coarser coverage
//! ratio counts how many summary sections have at least one attributable citation.
//!
//! Everything here is synchronous, deterministic and free of I/O apart from
//! configuration and document loading.

pub mod annotate;
pub mod config;
pub mod coverage;
pub mod dedup;
pub mod document;
pub mod error;
pub mod evidence;
pub mod matcher;
pub mod splitter;
pub mod text;
pub mod types;

pub use annotate::{ClaimAnnotator, annotate_claims_with_evidence};
pub use config::{ScoringConfig, SplitterConfig, SupportConfig, VerifierConfig, load_config};
pub use coverage::{Coverage, coverage_from, source_ratio_from};
pub use dedup::dedupe_citations;
pub use document::{
    Document, DocumentReport, DocumentVerifier, SectionReport, SummarySections, verify_document,
};
pub use error::{ClaimlensError, ConfigError, DocumentError, Result};
pub use evidence::find_best_evidence_for_claim;
pub use matcher::{ClaimMatcher, match_claim_to_quote};
pub use splitter::{ClaimSplitter, SplitMode, split_into_claims};
pub use types::{AnnotatedClaim, BestEvidence, Citation, ClaimStatus, EvidenceMatch, SectionKind};
