//! Classified task line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    /// Never assigned by the current rules
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        write!(f, "{}", label)
    }
}

/// Bucket a line is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    General,
    Business,
    Risk,
    Termin,
    Knowledge,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::General => "GENERAL",
            Category::Business => "BUSINESS",
            Category::Risk => "RISK",
            Category::Termin => "TERMIN",
            Category::Knowledge => "KNOWLEDGE",
        };
        write!(f, "{}", label)
    }
}

/// One classified input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Position among non-blank lines
    pub id: usize,
    /// Trimmed line content
    pub text: String,
    pub priority: Priority,
    pub category: Category,
    /// In `[0, 1]`
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

impl Item {
    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }

    /// Case-insensitive substring test on the item text
    pub fn mentions(&self, token: &str) -> bool {
        self.text.to_lowercase().contains(token)
    }
}
