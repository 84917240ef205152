//! Keyword coverage: which target keywords a resume covers, verbatim or via a
//! registered synonym.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::entities::ExtractedEntities;
use crate::analysis::round_one_decimal;
use crate::analysis::vocabulary::synonyms_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Synonym,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub matches: Vec<KeywordMatch>,
    pub missing: Vec<String>,
    /// 0 – 100, one decimal.
    pub coverage_score: f64,
}

/// Matches each target keyword against the resume, preserving input order.
///
/// Per keyword (case-insensitive):
/// 1. substring of the resume text, or one of the resume's skills → exact
/// 2. any registered synonym is a substring of the resume text → synonym
/// 3. otherwise the keyword is missing
///
/// Duplicated keywords are evaluated and counted once per occurrence.
pub fn match_keywords(
    resume_text: &str,
    keywords: &[String],
    resume_entities: &ExtractedEntities,
) -> KeywordMatchResult {
    let resume_lower = resume_text.to_lowercase();

    let mut matches = Vec::new();
    let mut missing = Vec::new();

    for keyword in keywords {
        let keyword_lower = keyword.to_lowercase();

        let exact = resume_lower.contains(&keyword_lower)
            || resume_entities.skills.iter().any(|s| *s == keyword_lower);

        let match_type = if exact {
            Some(MatchType::Exact)
        } else if synonyms_for(&keyword_lower)
            .iter()
            .any(|syn| resume_lower.contains(syn))
        {
            Some(MatchType::Synonym)
        } else {
            None
        };

        match match_type {
            Some(match_type) => matches.push(KeywordMatch {
                keyword: keyword.clone(),
                match_type,
            }),
            None => missing.push(keyword.clone()),
        }
    }

    // An empty keyword list scores 0 rather than dividing by zero
    let total = keywords.len().max(1);
    let coverage_score = round_one_decimal(matches.len() as f64 / total as f64 * 100.0);

    debug!(
        matched = matches.len(),
        missing = missing.len(),
        coverage_score,
        "Keyword matching complete"
    );

    KeywordMatchResult {
        matches,
        missing,
        coverage_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::entities::extract_entities;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    fn run(text: &str, list: &[&str]) -> KeywordMatchResult {
        match_keywords(text, &keywords(list), &extract_entities(text))
    }

    #[test]
    fn test_exact_match_and_missing() {
        let result = run(
            "Experienced Python developer, 5 years of experience.",
            &["python", "java"],
        );
        assert_eq!(
            result.matches,
            vec![KeywordMatch {
                keyword: "python".to_string(),
                match_type: MatchType::Exact,
            }]
        );
        assert_eq!(result.missing, vec!["java"]);
        assert_eq!(result.coverage_score, 50.0);
    }

    #[test]
    fn test_synonym_match_counts_as_matched() {
        let result = run("Built services with Node.js and Express", &["javascript"]);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].match_type, MatchType::Synonym);
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage_score, 100.0);
    }

    #[test]
    fn test_exact_takes_precedence_over_synonym() {
        let result = run("Kubernetes (k8s) operator", &["kubernetes"]);
        assert_eq!(result.matches[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_keyword_case_is_ignored_but_preserved_in_output() {
        let result = run("docker compose", &["Docker"]);
        assert_eq!(result.matches[0].keyword, "Docker");
        assert_eq!(result.matches[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_empty_keyword_list_scores_zero() {
        let result = run("anything at all", &[]);
        assert!(result.matches.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage_score, 0.0);
    }

    #[test]
    fn test_duplicates_are_counted_per_occurrence() {
        let result = run("rust", &["rust", "rust", "cobol"]);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.missing, vec!["cobol"]);
        assert_eq!(result.coverage_score, 66.7);
    }

    #[test]
    fn test_coverage_tie_rounds_to_even() {
        let mut list = vec!["python"];
        list.extend(std::iter::repeat("cobol").take(15));
        let result = run("python", &list);
        assert_eq!(result.matches.len(), 1);
        // 1 / 16 = 6.25
        assert_eq!(result.coverage_score, 6.2);
    }

    #[test]
    fn test_missing_preserves_input_order() {
        let result = run("nothing relevant", &["zig", "ocaml", "elixir"]);
        assert_eq!(result.missing, vec!["zig", "ocaml", "elixir"]);
    }

    #[test]
    fn test_resume_skill_set_counts_as_exact() {
        let entities = ExtractedEntities {
            skills: vec!["terraform".to_string()],
            ..Default::default()
        };
        let result = match_keywords("infra as code", &keywords(&["Terraform"]), &entities);
        assert_eq!(result.matches[0].match_type, MatchType::Exact);
    }
}
