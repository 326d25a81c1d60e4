//! Confidence Scorer & Classifier.
//!
//! Turns keyword hits for one line into a category, a priority and a confidence.
//!
//! Confidence starts at 0.5, gains 0.2 if any urgency marker is present and 0.1
//! per scoring-table hit. A line with no scoring hit is `GENERAL`, capped at 0.3
//! and reported as uncategorized. A winning score of exactly one caps the value
//! at 0.7. Risk lines are always `HIGH`. Energy wins have no bucket and stay
//! `GENERAL` without being reported as uncategorized.

use super::item::{Category, Item, Priority};
use super::keywords::{KeywordTables, ScoringCategory};
use super::matcher::KeywordMatcher;
use super::segmenter::Line;

pub const BASE_CONFIDENCE: f64 = 0.5;
pub const URGENT_BONUS: f64 = 0.2;
pub const HIT_BONUS: f64 = 0.1;
pub const UNCATEGORIZED_CAP: f64 = 0.3;
pub const SINGLE_SIGNAL_CAP: f64 = 0.7;
/// Items strictly below this are reported as low confidence
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Classification of one line plus the facts feedback needs
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub item: Item,
    /// Untrimmed source line
    pub raw_line: String,
    pub winning_category: ScoringCategory,
    pub winning_score: usize,
}

impl Classification {
    /// No scoring table matched
    pub fn is_uncategorized(&self) -> bool {
        self.winning_score == 0
    }

    pub fn is_low_confidence(&self) -> bool {
        self.item.confidence < LOW_CONFIDENCE_THRESHOLD
    }
}

/// Line classifier over a borrowed set of keyword tables
pub struct Classifier<'t> {
    matcher: KeywordMatcher<'t>,
}

impl<'t> Classifier<'t> {
    pub fn new(tables: &'t KeywordTables) -> Self {
        Self {
            matcher: KeywordMatcher::new(tables),
        }
    }

    pub fn classify(&self, line: &Line<'_>) -> Classification {
        let lowered = line.raw.to_lowercase();
        let matches = self.matcher.match_line(&lowered);

        let mut priority = Priority::Medium;
        let mut confidence = BASE_CONFIDENCE;

        if !matches.urgent_hits.is_empty() {
            priority = Priority::High;
            confidence += URGENT_BONUS;
        }

        for _ in 0..matches.scoring_hits() {
            confidence += HIT_BONUS;
        }

        let (winning_category, winning_score) = matches.scores.winner();

        match winning_score {
            0 => confidence = confidence.min(UNCATEGORIZED_CAP),
            1 => confidence = confidence.min(SINGLE_SIGNAL_CAP),
            _ => {}
        }

        let category = if winning_score == 0 {
            Category::General
        } else {
            match winning_category {
                ScoringCategory::Business => Category::Business,
                ScoringCategory::Risk => {
                    priority = Priority::High;
                    Category::Risk
                }
                ScoringCategory::Termine => Category::Termin,
                ScoringCategory::Knowledge => Category::Knowledge,
                ScoringCategory::Energy => Category::General,
            }
        };

        Classification {
            item: Item {
                id: line.index,
                text: line.text().to_string(),
                priority,
                category,
                confidence: confidence.min(1.0),
                matched_keywords: matches.matched_keywords,
            },
            raw_line: line.raw.to_string(),
            winning_category,
            winning_score,
        }
    }
}
