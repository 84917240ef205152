//! Full scan: resume entities → job-description keywords → keyword coverage →
//! formatting → score.

use serde::Serialize;
use tracing::info;

use crate::analysis::entities::{extract_entities, ExtractedEntities};
use crate::analysis::formatting::{analyze_formatting, FormattingResult};
use crate::analysis::keywords::{match_keywords, KeywordMatchResult};
use crate::analysis::scoring::{calculate_score, ScoreBreakdown};
use crate::models::document::RawDocument;

pub const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub entities: ExtractedEntities,
    pub target_keywords: Vec<String>,
    pub keywords: KeywordMatchResult,
    pub formatting: FormattingResult,
    pub score: ScoreBreakdown,
}

/// Keywords to score against, derived from a job description.
/// A missing or blank description yields no keywords.
pub fn target_keywords(job_description: Option<&str>) -> Vec<String> {
    match job_description {
        Some(jd) if !jd.trim().is_empty() => extract_entities(jd).target_keywords(),
        _ => Vec::new(),
    }
}

/// Runs the whole analysis for one decoded resume.
pub fn scan_document(document: &RawDocument, job_description: Option<&str>) -> ScanReport {
    let entities = extract_entities(&document.text);
    let target_keywords = target_keywords(job_description);
    let keywords = match_keywords(&document.text, &target_keywords, &entities);
    let formatting = analyze_formatting(document);
    let score = calculate_score(
        keywords.coverage_score,
        formatting.format_score,
        &formatting.sections_found,
        &entities,
    );

    info!(
        total_score = score.total_score,
        target_keywords = target_keywords.len(),
        findings = formatting.findings.len(),
        "Scan complete"
    );

    ScanReport {
        entities,
        target_keywords,
        keywords,
        formatting,
        score,
    }
}

/// First `PREVIEW_CHARS` characters, with "..." appended when truncated.
pub fn text_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
