//! Triage Core
//!
//! Turns a freeform, line-oriented task dump into a structured classification
//! (`BasicAnalysis`) and a rule-derived advisor view (`AiAnalysis`).
//! The engine in [`brain`] is pure and total; the other modules handle input,
//! configuration and logging for callers such as the `triage` binary.

pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod text_extract;

#[cfg(test)]
mod tests;

pub use brain::{
    generate_fallback_ai_analysis, perform_basic_analysis, AiAnalysis, BasicAnalysis, FullAnalysis,
    TaskAnalyzer,
};
pub use error::AppError;
