//! Formatting risk analysis: structural hints and text heuristics that make a
//! resume harder for an ATS to parse.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::entities::find_email;
use crate::models::document::RawDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Table,
    Image,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Points deducted from the format score per finding.
    fn penalty(self) -> f64 {
        match self {
            Severity::Warning => 5.0,
            Severity::Critical => 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingFinding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
}

impl FormattingFinding {
    fn new(kind: FindingKind, severity: Severity, message: &str, suggestion: &str) -> Self {
        Self {
            kind,
            severity,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub format_score: f64,
    pub findings: Vec<FormattingFinding>,
    pub sections_found: Vec<Section>,
}

const SECTION_BONUS: f64 = 5.0;

/// Runs every formatting check against the decoded document.
pub fn analyze_formatting(document: &RawDocument) -> FormattingResult {
    let text = document.text.as_str();
    let text_lower = text.to_lowercase();
    let mut findings = Vec::new();

    if document.has_tables {
        findings.push(FormattingFinding::new(
            FindingKind::Table,
            Severity::Warning,
            "Tables detected in resume",
            "Convert tables to plain text for better ATS compatibility",
        ));
    }

    // Coarse heuristic: also fires on "imgur" links and the like
    if text_lower.contains("[image]") || text_lower.contains("img") {
        findings.push(FormattingFinding::new(
            FindingKind::Image,
            Severity::Warning,
            "Possible images detected",
            "Remove images and use text only",
        ));
    }

    if find_email(text).is_none() {
        findings.push(FormattingFinding::new(
            FindingKind::Contact,
            Severity::Critical,
            "No email address found",
            "Add a professional email address",
        ));
    }

    let sections_found = detect_sections(&text_lower);

    let penalty: f64 = findings.iter().map(|f| f.severity.penalty()).sum();
    let bonus = sections_found.len() as f64 * SECTION_BONUS;
    let format_score = (100.0 - penalty + bonus).clamp(0.0, 100.0);

    debug!(
        findings = findings.len(),
        sections = sections_found.len(),
        format_score,
        "Formatting analysis complete"
    );

    FormattingResult {
        format_score,
        findings,
        sections_found,
    }
}

fn detect_sections(text_lower: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    if text_lower.contains("experience") || text_lower.contains("work") {
        sections.push(Section::Experience);
    }
    if text_lower.contains("education") {
        sections.push(Section::Education);
    }
    if text_lower.contains("skills") {
        sections.push(Section::Skills);
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str, has_tables: bool) -> RawDocument {
        RawDocument {
            text: text.to_string(),
            has_tables,
            page_count: 1,
        }
    }

    fn kinds(result: &FormattingResult) -> Vec<FindingKind> {
        result.findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_clean_resume_has_no_findings() {
        let result = analyze_formatting(&doc(
            "a@b.com\nExperience\nEducation\nSkills",
            false,
        ));
        assert!(result.findings.is_empty());
        assert_eq!(
            result.sections_found,
            vec![Section::Experience, Section::Education, Section::Skills]
        );
        // 100 + 3 * 5, clamped
        assert_eq!(result.format_score, 100.0);
    }

    #[test]
    fn test_missing_email_is_critical() {
        let result = analyze_formatting(&doc("No contact details here", false));
        assert_eq!(kinds(&result), vec![FindingKind::Contact]);
        assert_eq!(result.findings[0].severity, Severity::Critical);
        assert_eq!(result.findings[0].message, "No email address found");
        assert_eq!(result.format_score, 85.0);
    }

    #[test]
    fn test_tables_are_a_warning() {
        let result = analyze_formatting(&doc("a@b.com", true));
        assert_eq!(kinds(&result), vec![FindingKind::Table]);
        assert_eq!(result.findings[0].severity, Severity::Warning);
        assert_eq!(result.format_score, 95.0);
    }

    #[test]
    fn test_image_heuristic_matches_placeholder_and_img() {
        let placeholder = analyze_formatting(&doc("a@b.com [IMAGE]", false));
        assert_eq!(kinds(&placeholder), vec![FindingKind::Image]);

        let link = analyze_formatting(&doc("a@b.com portfolio at imgur.com/gallery", false));
        assert_eq!(kinds(&link), vec![FindingKind::Image]);
    }

    #[test]
    fn test_findings_are_ordered_table_image_contact() {
        let result = analyze_formatting(&doc("img", true));
        assert_eq!(
            kinds(&result),
            vec![FindingKind::Table, FindingKind::Image, FindingKind::Contact]
        );
        // 100 - 5 - 5 - 15
        assert_eq!(result.format_score, 75.0);
    }

    #[test]
    fn test_work_counts_as_experience_section() {
        let result = analyze_formatting(&doc("Work history", false));
        assert_eq!(result.sections_found, vec![Section::Experience]);
    }

    #[test]
    fn test_empty_text_only_flags_missing_email() {
        let result = analyze_formatting(&doc("", false));
        assert_eq!(kinds(&result), vec![FindingKind::Contact]);
        assert!(result.sections_found.is_empty());
        assert_eq!(result.format_score, 85.0);
    }

    #[test]
    fn test_finding_kind_serializes_as_type() {
        let finding = FormattingFinding::new(
            FindingKind::Contact,
            Severity::Critical,
            "No email address found",
            "Add a professional email address",
        );
        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["type"], "contact");
        assert_eq!(value["severity"], "critical");
    }
}
