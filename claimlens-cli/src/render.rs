//! Plain-text rendering of verification reports.

use claimlens_core::{AnnotatedClaim, DocumentReport, SectionReport};
use std::fmt::Write;

/// Column width for wrapped claim and quote text.
pub const WRAP_WIDTH: usize = 88;

pub fn report_text(report: &DocumentReport, width: usize) -> String {
    let mut out = String::new();

    if let Some(title) = &report.title {
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    }
    let _ = writeln!(
        out,
        "{} | {}/{} claims supported",
        report.coverage.label(),
        report.supported_count(),
        report.claim_count()
    );

    for section in &report.sections {
        out.push('\n');
        out.push_str(&section_text(section, width));
    }
    out
}

fn section_text(section: &SectionReport, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "## {} [{}]",
        section.section.title(),
        section.badge_label()
    );
    for claim in &section.claims {
        out.push_str(&claim_text(claim, width));
    }
    out
}

/// One claim with its evidence panel.
fn claim_text(claim: &AnnotatedClaim, width: usize) -> String {
    let mut out = String::new();
    let marker = if claim.is_supported() { "✓" } else { "?" };
    let bullet = format!("  {} ", marker);
    let body_indent = " ".repeat(bullet.chars().count());

    let options = textwrap::Options::new(width)
        .initial_indent(&bullet)
        .subsequent_indent(&body_indent);
    let _ = writeln!(out, "{}", textwrap::fill(&claim.claim, options));

    let detail_indent = format!("{}  ", body_indent);
    match &claim.best_citation {
        Some(citation) => {
            let quote = format!("\"{}\"", citation.quote_text().trim());
            let options = textwrap::Options::new(width)
                .initial_indent(&detail_indent)
                .subsequent_indent(&detail_indent);
            let _ = writeln!(out, "{}", textwrap::fill(&quote, options));

            let mut source = format!("{}— {}", detail_indent, citation.source_name);
            if let Some(url) = &citation.url {
                let _ = write!(source, " <{}>", url);
            }
            let _ = writeln!(
                out,
                "{} (score {:.2}, overlap {:.2})",
                source, claim.score, claim.overlap
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}No supporting quote found (best score {:.2})",
                detail_indent, claim.score
            );
        }
    }
    out
}
