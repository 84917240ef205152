use serde::{Deserialize, Serialize};

/// Text and structural hints decoded from an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    pub has_tables: bool,
    pub page_count: u32,
}

impl RawDocument {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_tables: false,
            page_count: 1,
        }
    }
}
