//! Keyword Matcher.
//!
//! Case-insensitive substring search of one line against every keyword table.

use super::keywords::{KeywordTables, ScoringCategory, TableName, SCORING_ORDER};

/// Hit counts per scoring category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores([usize; 5]);

impl CategoryScores {
    pub fn get(&self, category: ScoringCategory) -> usize {
        self.0[category.index()]
    }

    pub fn add(&mut self, category: ScoringCategory, hits: usize) {
        self.0[category.index()] += hits;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Category with the strictly greatest score. Starts from `Business` at 0 and
    /// only moves on a strictly greater score, so ties go to the earlier
    /// category in `SCORING_ORDER`.
    pub fn winner(&self) -> (ScoringCategory, usize) {
        let mut best = (ScoringCategory::Business, 0);
        for category in SCORING_ORDER {
            let score = self.get(category);
            if score > best.1 {
                best = (category, score);
            }
        }
        best
    }
}

/// Everything one line matched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMatches {
    /// Urgent keywords found, in table order
    pub urgent_hits: Vec<String>,
    pub scores: CategoryScores,
    /// Urgent hits first, then scoring hits by table order then keyword order
    pub matched_keywords: Vec<String>,
}

impl LineMatches {
    /// Number of keyword hits across scoring tables
    pub fn scoring_hits(&self) -> usize {
        self.scores.total()
    }
}

/// Matches lines against a borrowed set of keyword tables
pub struct KeywordMatcher<'t> {
    tables: &'t KeywordTables,
}

impl<'t> KeywordMatcher<'t> {
    pub fn new(tables: &'t KeywordTables) -> Self {
        Self { tables }
    }

    /// Match an already lowercased line
    pub fn match_line(&self, lowered: &str) -> LineMatches {
        let mut matches = LineMatches::default();

        if let Some(urgent) = self.tables.get(TableName::Urgent) {
            matches.urgent_hits = urgent.hits(lowered).map(str::to_string).collect();
            matches
                .matched_keywords
                .extend(matches.urgent_hits.iter().cloned());
        }

        for table in self.tables.iter() {
            let Some(category) = table.name.scoring_category() else {
                continue;
            };
            for keyword in table.hits(lowered) {
                matches.matched_keywords.push(keyword.to_string());
                matches.scores.add(category, 1);
            }
        }

        matches
    }
}
