//! ATS score aggregation and improvement suggestions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::entities::ExtractedEntities;
use crate::analysis::formatting::Section;
use crate::analysis::round_one_decimal;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub semantic: f64,
    pub experience: f64,
    pub format: f64,
    pub section: f64,
}

/// Fixed weight vector. Must sum to 1.0.
pub const ATS_WEIGHTS: ScoringWeights = ScoringWeights {
    keyword: 0.40,
    semantic: 0.25,
    experience: 0.20,
    format: 0.10,
    section: 0.05,
};

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.keyword + self.semantic + self.experience + self.format + self.section
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Keywords,
    Format,
    Structure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    /// Not produced by the current suggestion rules.
    #[allow(dead_code)]
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub message: String,
    pub action_items: Vec<String>,
}

impl Suggestion {
    fn fixed(category: SuggestionCategory) -> Self {
        let (priority, message, action_items): (Priority, &str, &[&str]) = match category {
            SuggestionCategory::Keywords => (
                Priority::High,
                "Improve keyword matching by adding relevant skills from the job description",
                &[
                    "Review job description for required skills",
                    "Add missing technical skills",
                ],
            ),
            SuggestionCategory::Format => (
                Priority::Medium,
                "Address formatting issues for better ATS compatibility",
                &["Remove tables and complex formatting", "Use standard fonts"],
            ),
            SuggestionCategory::Structure => (
                Priority::High,
                "Add an Experience section",
                &[
                    "Include work history with dates",
                    "Add bullet points with achievements",
                ],
            ),
        };

        Self {
            category,
            priority,
            message: message.to_string(),
            action_items: action_items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Every score lies in 0 – 100; `total_score` is the weighted sum rounded to
/// one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub experience_score: f64,
    pub format_score: f64,
    pub section_score: f64,
    pub total_score: f64,
    pub suggestions: Vec<Suggestion>,
}

const KEYWORD_SUGGESTION_THRESHOLD: f64 = 70.0;
const FORMAT_SUGGESTION_THRESHOLD: f64 = 80.0;

/// Combines the pipeline's sub-results into the final ATS score.
pub fn calculate_score(
    keyword_score: f64,
    format_score: f64,
    sections_found: &[Section],
    resume_entities: &ExtractedEntities,
) -> ScoreBreakdown {
    let keyword_score = clamp_score(keyword_score);
    let format_score = clamp_score(format_score);
    let semantic_score = semantic_score(resume_entities);
    let experience_score = experience_score(resume_entities.years_experience);
    let section_score = section_score(sections_found);

    let w = &ATS_WEIGHTS;
    debug_assert!((w.sum() - 1.0).abs() < 1e-9);
    let total = keyword_score * w.keyword
        + semantic_score * w.semantic
        + experience_score * w.experience
        + format_score * w.format
        + section_score * w.section;
    let total_score = clamp_score(round_one_decimal(total));

    let mut suggestions = Vec::new();
    if keyword_score < KEYWORD_SUGGESTION_THRESHOLD {
        suggestions.push(Suggestion::fixed(SuggestionCategory::Keywords));
    }
    if format_score < FORMAT_SUGGESTION_THRESHOLD {
        suggestions.push(Suggestion::fixed(SuggestionCategory::Format));
    }
    if !sections_found.contains(&Section::Experience) {
        suggestions.push(Suggestion::fixed(SuggestionCategory::Structure));
    }

    debug!(total_score, suggestions = suggestions.len(), "Score calculated");

    ScoreBreakdown {
        keyword_score,
        semantic_score,
        experience_score,
        format_score,
        section_score,
        total_score,
        suggestions,
    }
}

/// Content-richness proxy: 10 points per detected skill or title.
fn semantic_score(entities: &ExtractedEntities) -> f64 {
    let signals = entities.skills.len() + entities.job_titles.len();
    (signals as f64 * 10.0).min(100.0)
}

/// 30 points at zero years, 15 more per year, capped at 100.
fn experience_score(years: u32) -> f64 {
    (years as f64 * 15.0 + 30.0).min(100.0)
}

/// experience 20, education 20, skills 10. At most 50.
fn section_score(sections_found: &[Section]) -> f64 {
    sections_found
        .iter()
        .map(|section| match section {
            Section::Experience | Section::Education => 20.0,
            Section::Skills => 10.0,
        })
        .sum()
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
