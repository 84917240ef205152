//! Response bodies for the ATS endpoints.

use serde::Serialize;
use uuid::Uuid;

use crate::analysis::entities::ExtractedEntities;
use crate::analysis::formatting::{FormattingFinding, FormattingResult, Section};
use crate::analysis::keywords::MatchType;
use crate::analysis::pipeline::{text_preview, ScanReport};
use crate::analysis::round_one_decimal;
use crate::analysis::scoring::Suggestion;

#[derive(Debug, Serialize)]
pub struct ScoreBreakdownBody {
    pub keyword_match: f64,
    pub semantic_match: f64,
    pub experience_alignment: f64,
    pub formatting_compatibility: f64,
    pub section_completeness: f64,
}

#[derive(Debug, Serialize)]
pub struct MatchedKeywordBody {
    pub keyword: String,
    pub matched: bool,
    pub match_type: MatchType,
    pub importance: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExtractedDataBody {
    pub skills: Vec<String>,
    pub job_titles: Vec<String>,
    pub certifications: Vec<String>,
    pub years_experience: u32,
}

/// POST /api/v1/ats/scan
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub scan_id: Uuid,
    pub ats_score: f64,
    pub score_breakdown: ScoreBreakdownBody,
    pub matched_keywords: Vec<MatchedKeywordBody>,
    pub missing_keywords: Vec<String>,
    pub formatting_issues: Vec<FormattingFinding>,
    pub optimization_suggestions: Vec<Suggestion>,
    pub extracted_data: ExtractedDataBody,
    pub resume_text_preview: String,
}

impl ScanResponse {
    pub fn from_report(scan_id: Uuid, report: ScanReport, resume_text: &str) -> Self {
        let ScanReport {
            entities,
            keywords,
            formatting,
            score,
            ..
        } = report;

        Self {
            scan_id,
            ats_score: score.total_score,
            score_breakdown: ScoreBreakdownBody {
                keyword_match: round_one_decimal(score.keyword_score),
                semantic_match: round_one_decimal(score.semantic_score),
                experience_alignment: round_one_decimal(score.experience_score),
                formatting_compatibility: round_one_decimal(score.format_score),
                section_completeness: round_one_decimal(score.section_score),
            },
            matched_keywords: keywords
                .matches
                .into_iter()
                .map(|m| MatchedKeywordBody {
                    keyword: m.keyword,
                    matched: true,
                    match_type: m.match_type,
                    importance: "medium",
                })
                .collect(),
            missing_keywords: keywords.missing,
            formatting_issues: formatting.findings,
            optimization_suggestions: score.suggestions,
            extracted_data: ExtractedDataBody {
                skills: entities.skills,
                job_titles: entities.job_titles,
                certifications: entities.certifications,
                years_experience: entities.years_experience,
            },
            resume_text_preview: text_preview(resume_text),
        }
    }
}

/// POST /api/v1/ats/parse-resume
#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub raw_text: String,
    pub extracted_data: ExtractedEntities,
    pub formatting_analysis: FormattingResult,
    pub sections_found: Vec<Section>,
}

/// POST /api/v1/ats/extract-keywords
#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub job_titles: Vec<String>,
    pub certifications: Vec<String>,
}

impl From<ExtractedEntities> for ExtractKeywordsResponse {
    fn from(entities: ExtractedEntities) -> Self {
        Self {
            keywords: entities.target_keywords(),
            skills: entities.skills,
            job_titles: entities.job_titles,
            certifications: entities.certifications,
        }
    }
}
