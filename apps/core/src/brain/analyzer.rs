//! Task Analyzer - Main orchestrator for the Brain module.
//!
//! text -> segmenter -> classifier -> aggregation/feedback -> `BasicAnalysis`
//! -> recommendation engine -> `AiAnalysis`. Data only flows forward.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Instant;
use tracing::debug;

use super::ai_analysis::AiAnalysis;
use super::basic_analysis::BasicAnalysis;
use super::classifier::Classifier;
use super::keywords::KeywordTables;
use super::segmenter::segment_lines;

/// Both records for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub basic: BasicAnalysis,
    pub ai: AiAnalysis,
}

/// Stateless analyzer over an injected keyword vocabulary
#[derive(Debug, Clone)]
pub struct TaskAnalyzer {
    tables: Cow<'static, KeywordTables>,
}

impl Default for TaskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskAnalyzer {
    /// Analyzer borrowing the shared built-in vocabulary
    pub fn new() -> Self {
        Self {
            tables: Cow::Borrowed(KeywordTables::builtin()),
        }
    }

    pub fn with_tables(tables: KeywordTables) -> Self {
        Self {
            tables: Cow::Owned(tables),
        }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Classify every non-blank line and aggregate. Total over all inputs.
    pub fn analyze(&self, text: &str) -> BasicAnalysis {
        let start = Instant::now();
        let classifier = Classifier::new(&self.tables);

        let classifications = segment_lines(text)
            .iter()
            .map(|line| classifier.classify(line))
            .collect();
        let analysis = BasicAnalysis::aggregate(classifications);

        debug!(
            total = analysis.insights.total_items,
            uncategorized = analysis.categorization_feedback.uncategorized.len(),
            low_confidence = analysis.categorization_feedback.low_confidence.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "basic analysis complete"
        );

        analysis
    }

    /// Derive the advisor view from a finished basic analysis
    pub fn ai_analysis(&self, basic: &BasicAnalysis) -> AiAnalysis {
        let ai = AiAnalysis::from_basic(basic, &self.tables);
        debug!(
            recommendations = ai.predictive_recommendations.len(),
            "ai analysis complete"
        );
        ai
    }

    pub fn analyze_full(&self, text: &str) -> FullAnalysis {
        let basic = self.analyze(text);
        let ai = self.ai_analysis(&basic);
        FullAnalysis { basic, ai }
    }
}

/// Basic analysis with the built-in vocabulary
pub fn perform_basic_analysis(text: &str) -> BasicAnalysis {
    TaskAnalyzer::new().analyze(text)
}

/// Advisor view with the built-in vocabulary
pub fn generate_fallback_ai_analysis(basic: &BasicAnalysis) -> AiAnalysis {
    AiAnalysis::from_basic(basic, KeywordTables::builtin())
}
