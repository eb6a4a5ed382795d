use chrono::Datelike;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::SENTIMENT_NEGATIVE_THRESHOLD;
use crate::SENTIMENT_POSITIVE_THRESHOLD;

/// Tri-state sentiment label attached to a review/feature pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum SentimentLabel {
    Negative = -1,
    Neutral = 0,
    Positive = 1,
}

impl SentimentLabel {
    /// Reduce a continuous score to a tri-state label.
    ///
    /// The 0.05 cut points are fixed design constants; scores exactly at a
    /// threshold stay neutral.
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < SENTIMENT_NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<i8> for SentimentLabel {
    fn from(value: i8) -> Self {
        match value {
            1 => SentimentLabel::Positive,
            -1 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

/// One review as supplied by the corpus provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Raw review body
    pub content: String,
    /// Numeric star rating
    pub rating: f64,
    /// Product identifier (e.g. an ASIN)
    pub product_id: String,
    /// Review date, when the corpus carries one
    pub date: Option<NaiveDate>,
}

/// Categorical labels assigned per classification dimension
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DimensionLabels {
    pub user_role: String,
    pub gender: String,
    pub age_group: String,
    pub usage: String,
    pub motivation: String,
    pub product_category: String,
}

impl DimensionLabels {
    /// Look up a label by its column name
    pub fn get(&self, dimension: &str) -> Option<&str> {
        match dimension {
            "User_Role" => Some(&self.user_role),
            "Gender" => Some(&self.gender),
            "Age_Group" => Some(&self.age_group),
            "Usage" => Some(&self.usage),
            "Motivation" => Some(&self.motivation),
            "Product_Category" => Some(&self.product_category),
            _ => None,
        }
    }
}

/// A review together with all derived columns.
///
/// Derived columns are computed once per run and are immutable afterwards;
/// the per-feature vectors are indexed by the ruleset's feature order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedReview {
    pub record: ReviewRecord,
    /// Lower-cased, letter-only, stop-word-free, lemmatized text
    pub normalized_text: String,
    /// Whole-review polarity from the generic scorer
    pub overall_polarity: f64,
    /// Coarse whole-review sentiment bucket
    pub overall_sentiment: SentimentLabel,
    /// Per-feature mention flags
    pub mentions: Vec<bool>,
    /// Per-feature continuous sentiment scores
    pub scores: Vec<f64>,
    /// Per-feature tri-state labels
    pub labels: Vec<SentimentLabel>,
    /// Categorical labels per classification dimension
    pub dimensions: DimensionLabels,
}

/// A reporting time window derived from review dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    All,
    Year(i32),
    Quarter(i32, u32),
}

impl TimePeriod {
    /// Stable key used to index report bundles
    pub fn key(&self) -> String {
        match self {
            TimePeriod::All => "_ALL_".to_string(),
            TimePeriod::Year(year) => year.to_string(),
            TimePeriod::Quarter(year, quarter) => format!("{year}Q{quarter}"),
        }
    }

    /// Human-readable label for the dashboard selector
    pub fn label(&self) -> String {
        match self {
            TimePeriod::All => "全部时间".to_string(),
            TimePeriod::Year(year) => format!("{year}年 全年"),
            TimePeriod::Quarter(year, quarter) => format!("{year}年 第{quarter}季度"),
        }
    }

    /// Whether a dated review falls inside this period
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match self {
            TimePeriod::All => true,
            TimePeriod::Year(year) => date.is_some_and(|d| d.year() == *year),
            TimePeriod::Quarter(year, quarter) => {
                date.is_some_and(|d| d.year() == *year && (d.month0() / 3) + 1 == *quarter)
            }
        }
    }
}
