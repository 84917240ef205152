//! Reference vocabularies shared by every scan.
//!
//! All entries are lower-cased. Detection is plain substring containment
//! against lower-cased text, so iteration order here is the order results
//! are reported in.

pub const SKILLS: &[&str] = &[
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "react",
    "angular",
    "vue",
    "nodejs",
    "django",
    "flask",
    "spring",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "github",
    "gitlab",
    "jenkins",
    "circleci",
    "html",
    "css",
    "sass",
    "less",
    "tailwind",
    "machine learning",
    "data science",
    "ai",
    "nlp",
    "rest api",
    "graphql",
    "microservices",
    "serverless",
];

pub const JOB_TITLES: &[&str] = &[
    "software engineer",
    "developer",
    "programmer",
    "coder",
    "full stack",
    "frontend",
    "backend",
    "devops",
    "data scientist",
    "data engineer",
    "ml engineer",
    "product manager",
    "project manager",
    "tech lead",
    "qa engineer",
    "test engineer",
    "security engineer",
];

pub const CERTIFICATIONS: &[&str] = &[
    "aws certified",
    "azure certified",
    "gcp certified",
    "pmp",
    "cissp",
    "ceh",
    "security+",
    "network+",
    "scrum master",
    "csm",
    "psm",
    "itil",
    "ccna",
    "ccnp",
    "oracle certified",
];

/// Alternate spellings accepted when a target keyword is not found verbatim.
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("python", &["py"]),
    ("javascript", &["js", "node.js", "nodejs"]),
    ("react", &["reactjs", "react.js"]),
    ("aws", &["amazon web services"]),
    ("docker", &["containerization"]),
    ("kubernetes", &["k8s"]),
];

/// Returns the registered synonyms for an already lower-cased keyword.
pub fn synonyms_for(keyword: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(canonical, _)| *canonical == keyword)
        .map(|(_, alternates)| *alternates)
        .unwrap_or(&[])
}

/// Every entry of `vocabulary` contained in `text_lower`, in vocabulary order.
pub fn contained_in(vocabulary: &[&str], text_lower: &str) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_are_lowercase() {
        for term in SKILLS.iter().chain(JOB_TITLES).chain(CERTIFICATIONS) {
            assert_eq!(*term, term.to_lowercase(), "{term} is not lower-cased");
        }
    }

    #[test]
    fn test_synonyms_for_known_keyword() {
        assert_eq!(synonyms_for("javascript"), &["js", "node.js", "nodejs"]);
    }

    #[test]
    fn test_synonyms_for_unknown_keyword_is_empty() {
        assert!(synonyms_for("cobol").is_empty());
    }

    #[test]
    fn test_contained_in_keeps_vocabulary_order() {
        let found = contained_in(SKILLS, "rust, then python, then docker");
        assert_eq!(found, vec!["python", "rust", "docker"]);
    }

    #[test]
    fn test_contained_in_records_overlapping_entries() {
        // "java" is a substring of "javascript"; both are reported
        let found = contained_in(SKILLS, "javascript");
        assert!(found.contains(&"javascript".to_string()));
        assert!(found.contains(&"java".to_string()));
    }
}
