//! Feedback Generator.
//!
//! Sparse suggestions on how to phrase tasks so they classify, plus a static
//! catalogue of keyword hints per category.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// More low-confidence items than this triggers the phrasing suggestion
const LOW_CONFIDENCE_SUGGESTION_LIMIT: usize = 3;

/// Feedback on how well the input could be categorized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationFeedback {
    /// Raw lines without any scoring hit
    pub uncategorized: Vec<String>,
    /// Items with confidence below 0.6
    pub low_confidence: Vec<Item>,
    pub suggestions: Vec<String>,
}

impl CategorizationFeedback {
    pub fn has_issues(&self) -> bool {
        !self.uncategorized.is_empty() || !self.low_confidence.is_empty()
    }

    /// Nothing to report at all
    pub fn is_perfect(&self) -> bool {
        !self.has_issues() && self.suggestions.is_empty()
    }
}

/// Derive suggestions from the collected lists.
pub fn build_feedback(uncategorized: Vec<String>, low_confidence: Vec<Item>) -> CategorizationFeedback {
    let mut suggestions = Vec::new();

    if !uncategorized.is_empty() {
        suggestions.push(format!(
            "{} Items konnten nicht kategorisiert werden. Versuchen Sie spezifischere Keywords.",
            uncategorized.len()
        ));
    }

    if low_confidence.len() > LOW_CONFIDENCE_SUGGESTION_LIMIT {
        suggestions.push(
            "Mehrere Items haben niedrige Konfidenz. Verwenden Sie klarere Begriffe wie 'meeting', 'deadline', 'research'."
                .to_string(),
        );
    }

    CategorizationFeedback {
        uncategorized,
        low_confidence,
        suggestions,
    }
}

/// Example keywords for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHint {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

const KEYWORD_HINTS: &[KeywordHint] = &[
    KeywordHint {
        category: "termine",
        keywords: &["termin", "meeting", "firma", "vorstellung", "gespräch", "akademie", "kick-off"],
    },
    KeywordHint {
        category: "business",
        keywords: &[
            "anwendungsfälle",
            "controlling",
            "vertrieb",
            "beraterfirmen",
            "marketing",
            "priorisierung",
            "prozesse",
        ],
    },
    KeywordHint {
        category: "knowledge",
        keywords: &["KI", "AI", "governance", "prompting", "ISO", "spezialisierung", "automationen"],
    },
    KeywordHint {
        category: "risk",
        keywords: &["pain points", "problemfelder", "compliance", "kritisch", "risiko"],
    },
    KeywordHint {
        category: "setup",
        keywords: &["setup", "checkliste", "formular", "recherche", "liste erstellen", "laptop"],
    },
    KeywordHint {
        category: "urgent",
        keywords: &["offen", "muss", "deadline", "kritisch", "wichtig", "heute", "morgen"],
    },
    KeywordHint {
        category: "energy",
        keywords: &["stadtwerke", "wemag", "rostock", "energie", "smart grid", "renewable"],
    },
];

/// Suggested line shapes that classify well
pub const INPUT_TEMPLATE: &[&str] = &[
    "Meeting mit [Partner] am [Tag] [Zeit] - [Thema]",
    "[Projekt] fertigstellen - deadline [Datum] - kritisch",
    "Research: [Thema] - Wissen erweitern",
    "Business Idee: [Konzept] - Umsatz generieren",
    "Stadtwerke [Aufgabe] - Smart Grid Projekt",
];

pub fn keyword_hints() -> &'static [KeywordHint] {
    KEYWORD_HINTS
}
