pub mod cli;
pub mod config;
pub mod corpus;
pub mod diagnostics;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod models;
pub mod rules;
pub mod text;

/// Continuous sentiment score above which a review/feature pair is labeled positive
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 0.05;

/// Continuous sentiment score below which a review/feature pair is labeled negative
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = -0.05;

/// Minimum Pearson correlation for a feature pair to be reported as correlated
pub const CORRELATION_THRESHOLD: f64 = 0.05;

/// Minimum segment size below which a drill-down report is marked insufficient
pub const MIN_SEGMENT_SIZE: usize = 3;

/// Minimum review count for a time period to receive drill-down reports
pub const MIN_PERIOD_SIZE: usize = 10;

/// Ratings at or above this value count as high (praise side)
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// Ratings at or below this value count as low (complaint side)
pub const LOW_RATING_THRESHOLD: f64 = 3.0;

#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
