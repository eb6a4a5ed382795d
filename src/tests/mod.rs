pub mod diagnostics_integration_test;
pub mod engine_integration_test;

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::engine::AnalysisEngine;
use crate::engine::AnalysisSnapshot;
use crate::models::ReviewRecord;

/// Test helper to build a review record
pub fn make_record(content: &str, rating: f64) -> ReviewRecord {
    ReviewRecord {
        content: content.to_string(),
        rating,
        product_id: "B000TEST".to_string(),
        date: None,
    }
}

/// Test helper to build a dated review record
pub fn make_dated_record(content: &str, rating: f64, date: (i32, u32, u32)) -> ReviewRecord {
    ReviewRecord {
        content: content.to_string(),
        rating,
        product_id: "B000TEST".to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
    }
}

/// Test helper: run the default engine (full base taxonomy, built-in
/// dimension tables) over a set of records.
pub fn analyze(records: Vec<ReviewRecord>) -> AnalysisSnapshot {
    let config = AppConfig::default();
    let engine = AnalysisEngine::from_config(&config).expect("engine should build");
    engine.run(records).expect("analysis should succeed")
}
