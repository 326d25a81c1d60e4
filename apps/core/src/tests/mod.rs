//! Test Module
//!
//! ## Test Categories
//! - `brain_tests`: classification rules, tie-breaks, aggregation and recommendations
//! - `text_extract_tests`: task source validation and file reading
//! - `integration_tests`: full pipeline over the example dataset and generated inputs

pub mod brain_tests;
pub mod text_extract_tests;
