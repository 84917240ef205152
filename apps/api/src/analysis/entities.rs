//! Entity extraction: skills, titles, certifications, experience and contact
//! details pulled out of arbitrary text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::{contained_in, CERTIFICATIONS, JOB_TITLES, SKILLS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub skills: Vec<String>,
    pub job_titles: Vec<String>,
    pub certifications: Vec<String>,
    pub years_experience: u32,
    /// Empty when no address is present.
    pub email: String,
    /// Empty when no number is present.
    pub phone: String,
}

impl ExtractedEntities {
    /// Target keywords derived from a job description: skills followed by titles.
    pub fn target_keywords(&self) -> Vec<String> {
        self.skills
            .iter()
            .chain(self.job_titles.iter())
            .cloned()
            .collect()
    }
}

/// Extracts entities from `text`. Deterministic and total over any input.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    let text_lower = text.to_lowercase();

    ExtractedEntities {
        skills: contained_in(SKILLS, &text_lower),
        job_titles: contained_in(JOB_TITLES, &text_lower),
        certifications: contained_in(CERTIFICATIONS, &text_lower),
        years_experience: max_years_experience(&text_lower),
        email: find_email(text).unwrap_or_default(),
        phone: find_phone(text).unwrap_or_default(),
    }
}

/// Largest "<n> years of experience" figure in the text, 0 when absent.
/// Only ASCII digits are read; figures too large for `u32` saturate.
fn max_years_experience(text_lower: &str) -> u32 {
    years_regex()
        .captures_iter(text_lower)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .max()
        .unwrap_or(0)
}

/// First `local@domain.tld` shaped substring.
pub fn find_email(text: &str) -> Option<String> {
    email_regex().find(text).map(|m| m.as_str().to_string())
}

fn find_phone(text: &str) -> Option<String> {
    phone_regex().find(text).map(|m| m.as_str().to_string())
}

fn years_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"([0-9]+)\+?\s*years?\s+(?:of\s+)?experience").expect("Invalid regex")
    })
}

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("Invalid regex")
    })
}

fn phone_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // Optional country code, then 3-3-4 digits with space/dot/dash/paren separators
        Regex::new(r"\b(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b")
            .expect("Invalid regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567\n\
        Senior Software Engineer with 7+ years of experience in Python and AWS.\n\
        AWS Certified Solutions Architect. Kubernetes, Docker, PostgreSQL.";

    #[test]
    fn test_extracts_skills_in_vocabulary_order() {
        let entities = extract_entities(RESUME);
        assert_eq!(
            entities.skills,
            vec!["python", "sql", "postgresql", "aws", "docker", "kubernetes"]
        );
    }

    #[test]
    fn test_extracts_titles_and_certifications() {
        let entities = extract_entities(RESUME);
        assert_eq!(entities.job_titles, vec!["software engineer"]);
        assert_eq!(entities.certifications, vec!["aws certified"]);
    }

    #[test]
    fn test_extracts_contact_details() {
        let entities = extract_entities(RESUME);
        assert_eq!(entities.email, "jane.doe@example.com");
        assert_eq!(entities.phone, "555) 123-4567");
    }

    #[test]
    fn test_years_takes_maximum_not_first() {
        let text = "3 years of experience in Go. Overall 5 years of experience.";
        assert_eq!(extract_entities(text).years_experience, 5);
    }

    #[test]
    fn test_years_accepts_plus_and_missing_of() {
        assert_eq!(extract_entities("10+ years experience").years_experience, 10);
        assert_eq!(extract_entities("1 year of experience").years_experience, 1);
    }

    #[test]
    fn test_years_is_case_insensitive() {
        assert_eq!(extract_entities("4 YEARS OF EXPERIENCE").years_experience, 4);
    }

    #[test]
    fn test_years_defaults_to_zero() {
        assert_eq!(extract_entities("years of experience").years_experience, 0);
    }

    #[test]
    fn test_oversized_year_figure_saturates() {
        let text = "99999999999999 years of experience";
        assert_eq!(extract_entities(text).years_experience, u32::MAX);
    }

    #[test]
    fn test_non_ascii_digits_are_not_read_as_years() {
        assert_eq!(extract_entities("\u{FF15} years of experience").years_experience, 0);
        assert_eq!(extract_entities("\u{0665} years of experience").years_experience, 0);
    }

    #[test]
    fn test_ascii_figure_next_to_non_ascii_digit() {
        // only the ASCII run directly before "years" is captured
        let text = "\u{FF11}3 years of experience";
        assert_eq!(extract_entities(text).years_experience, 3);
    }

    #[test]
    fn test_no_at_sign_means_empty_email() {
        let entities = extract_entities("Contact me on the phone");
        assert_eq!(entities.email, "");
    }

    #[test]
    fn test_phone_with_country_code_and_dots() {
        let entities = extract_entities("Call +1 555.867.5309 anytime");
        assert_eq!(entities.phone, "1 555.867.5309");
    }

    #[test]
    fn test_empty_text_yields_empty_entities() {
        assert_eq!(extract_entities(""), ExtractedEntities::default());
    }

    #[test]
    fn test_target_keywords_are_skills_then_titles() {
        let entities = extract_entities("Backend developer working in Rust");
        assert_eq!(
            entities.target_keywords(),
            vec!["rust", "developer", "backend"]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_entities(RESUME), extract_entities(RESUME));
    }
}
