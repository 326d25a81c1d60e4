//! # Brain Module
//!
//! Rule-based triage of freeform task dumps. No ML inference: every decision is
//! a keyword table lookup plus fixed confidence arithmetic.
//!
//! ## Components
//! - `keywords`: ordered keyword tables and auxiliary vocabularies
//! - `segmenter`: input text to indexed non-blank lines
//! - `matcher`: per-line keyword hits
//! - `classifier`: category, priority and confidence for one line
//! - `basic_analysis`: buckets and statistics
//! - `feedback`: categorization feedback and phrasing hints
//! - `ai_analysis`: advisor-style recommendations
//! - `analyzer`: main orchestrator

pub mod ai_analysis;
pub mod analyzer;
pub mod basic_analysis;
pub mod classifier;
pub mod example;
pub mod feedback;
pub mod item;
pub mod keywords;
pub mod matcher;
pub mod segmenter;

pub use ai_analysis::{AiAnalysis, PerformanceMetrics, Recommendation, RecommendationType};
pub use analyzer::{generate_fallback_ai_analysis, perform_basic_analysis, FullAnalysis, TaskAnalyzer};
pub use basic_analysis::{BasicAnalysis, CategoryDistribution, Insights, PriorityDistribution};
pub use classifier::{Classification, Classifier};
pub use example::EXAMPLE_CONTENT;
pub use feedback::{keyword_hints, CategorizationFeedback, KeywordHint, INPUT_TEMPLATE};
pub use item::{Category, Item, Priority};
pub use keywords::{KeywordTable, KeywordTables, ScoringCategory, TableName};
pub use matcher::{CategoryScores, KeywordMatcher, LineMatches};
pub use segmenter::{segment_lines, Line};
