//! Diagnostic reports over a sealed analysis snapshot
//!
//! Everything here is a read-only view: the snapshot's derived columns are
//! never mutated, and the only raw-text work is targeted sub-topic
//! re-matching against the stored normalized text.

pub mod correlation;
pub mod feature;
pub mod overview;
pub mod reasons;
pub mod segment;

use serde::Serialize;
use tracing::info;
use tracing::warn;

pub use feature::FeatureDrillDown;
pub use overview::OverviewReport;
pub use segment::UserSegmentReport;

use crate::engine::AnalysisSnapshot;
use crate::models::SentimentLabel;
use crate::models::TimePeriod;
use crate::rules::SubTopicPolarity;
use crate::MIN_PERIOD_SIZE;

/// A ranked key with a pre-formatted display value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub key: String,
    pub value: String,
}

/// A key with a plain occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// Which side of a feature a drill-down inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrillSentiment {
    Positive,
    Negative,
}

impl DrillSentiment {
    /// The tri-state label selecting the segment
    pub fn target_label(self) -> SentimentLabel {
        match self {
            DrillSentiment::Positive => SentimentLabel::Positive,
            DrillSentiment::Negative => SentimentLabel::Negative,
        }
    }

    /// Report title fragment
    pub fn display(self) -> &'static str {
        match self {
            DrillSentiment::Positive => "正面评价",
            DrillSentiment::Negative => "负面评价",
        }
    }

    /// Whether a sub-topic of the given polarity belongs in this report.
    /// Neutral sub-topics are included on both sides.
    pub fn includes(self, polarity: SubTopicPolarity) -> bool {
        match self {
            DrillSentiment::Positive => polarity != SubTopicPolarity::Negative,
            DrillSentiment::Negative => polarity != SubTopicPolarity::Positive,
        }
    }
}

/// Read-only diagnostics over a snapshot, optionally scoped to a period
pub struct DiagnosticsEngine<'a> {
    snapshot: &'a AnalysisSnapshot,
    rows: Vec<usize>,
}

impl<'a> DiagnosticsEngine<'a> {
    /// Diagnostics over the whole corpus
    pub fn new(snapshot: &'a AnalysisSnapshot) -> Self {
        let rows = (0..snapshot.len()).collect();
        Self { snapshot, rows }
    }

    /// Diagnostics scoped to one time period. Lift baselines still come
    /// from the whole corpus captured in the snapshot.
    pub fn for_period(snapshot: &'a AnalysisSnapshot, period: TimePeriod) -> Self {
        let rows = (0..snapshot.len())
            .filter(|&row| period.contains(snapshot.reviews[row].record.date))
            .collect();
        Self { snapshot, rows }
    }

    pub fn snapshot(&self) -> &AnalysisSnapshot {
        self.snapshot
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn scope_len(&self) -> usize {
        self.rows.len()
    }

    /// Drill-downs for every feature, both sentiments
    pub fn run_feature_diagnostics(&self) -> Vec<FeatureDrillDown> {
        let mut reports = Vec::with_capacity(self.snapshot.ruleset.len() * 2);
        for feature in &self.snapshot.ruleset.features {
            for sentiment in [DrillSentiment::Positive, DrillSentiment::Negative] {
                match self.feature_drill_down(&feature.name, sentiment) {
                    Ok(report) => reports.push(report),
                    Err(error) => warn!(
                        "Skipping drill-down for feature '{}': {}",
                        feature.name, error
                    ),
                }
            }
        }
        reports
    }

    /// Drill-downs for every distinct value of each given dimension
    pub fn run_segment_diagnostics(&self, dimensions: &[String]) -> Vec<UserSegmentReport> {
        let mut reports = Vec::new();
        for dimension in dimensions {
            let values = self.distinct_values(dimension);
            if values.is_empty() {
                warn!("No values for diagnostic dimension '{}'", dimension);
            }
            for value in values {
                match self.user_segment_drill_down(dimension, &value) {
                    Ok(report) => reports.push(report),
                    Err(error) => {
                        warn!("Skipping segment '{}={}': {}", dimension, value, error);
                    }
                }
            }
        }
        reports
    }

    /// Distinct dimension values within scope, in first-appearance order
    fn distinct_values(&self, dimension: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut values = Vec::new();
        for &row in &self.rows {
            if let Some(value) = self.snapshot.reviews[row].dimensions.get(dimension) {
                if seen.insert(value.to_string()) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }

    /// Occurrence counts of a string-valued accessor over the given rows,
    /// sorted by count descending (key ascending on ties, so output is
    /// stable regardless of row order).
    pub(crate) fn count_values<F>(&self, rows: &[usize], accessor: F) -> Vec<CountEntry>
    where
        F: Fn(usize) -> String,
    {
        let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
        for &row in rows {
            *counts.entry(accessor(row)).or_insert(0) += 1;
        }
        let mut entries: Vec<CountEntry> = counts
            .into_iter()
            .map(|(key, count)| CountEntry { key, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        entries
    }

    /// Format counts as "{count}次 ({pct}%)" entries against a denominator
    pub(crate) fn format_distribution(
        counts: &[CountEntry],
        denominator: usize,
        top_n: usize,
    ) -> Vec<ReportEntry> {
        counts
            .iter()
            .take(top_n)
            .map(|entry| {
                let pct = entry.count as f64 / denominator as f64 * 100.0;
                ReportEntry {
                    key: entry.key.clone(),
                    value: format!("{}次 ({pct:.1}%)", entry.count),
                }
            })
            .collect()
    }
}

/// One period's drill-down reports
#[derive(Debug, Serialize)]
pub struct PeriodReports {
    pub key: String,
    pub label: String,
    pub feature_reports: Vec<FeatureDrillDown>,
    pub segment_reports: Vec<UserSegmentReport>,
}

/// Everything the rendering layer needs for one analysis run
#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub overview: OverviewReport,
    pub periods: Vec<PeriodReports>,
}

/// Reporting periods present in the snapshot: the full corpus first, then
/// years and quarters, newest first.
pub fn available_periods(snapshot: &AnalysisSnapshot) -> Vec<TimePeriod> {
    let mut years: Vec<i32> = Vec::new();
    let mut quarters: Vec<(i32, u32)> = Vec::new();
    for review in &snapshot.reviews {
        if let Some(date) = review.record.date {
            use chrono::Datelike;
            let year = date.year();
            let quarter = (date.month0() / 3) + 1;
            if !years.contains(&year) {
                years.push(year);
            }
            if !quarters.contains(&(year, quarter)) {
                quarters.push((year, quarter));
            }
        }
    }
    years.sort_unstable_by(|a, b| b.cmp(a));
    quarters.sort_unstable_by(|a, b| b.cmp(a));

    let mut periods = vec![TimePeriod::All];
    periods.extend(years.into_iter().map(TimePeriod::Year));
    periods.extend(
        quarters
            .into_iter()
            .map(|(year, quarter)| TimePeriod::Quarter(year, quarter)),
    );
    periods
}

/// Build the full report bundle: corpus overview plus per-period feature
/// and segment drill-downs. Periods with fewer than [`MIN_PERIOD_SIZE`]
/// reviews are skipped.
pub fn build_report_bundle(snapshot: &AnalysisSnapshot, dimensions: &[String]) -> ReportBundle {
    let overview = DiagnosticsEngine::new(snapshot).overview();

    let mut periods = Vec::new();
    for period in available_periods(snapshot) {
        let engine = DiagnosticsEngine::for_period(snapshot, period);
        if engine.scope_len() < MIN_PERIOD_SIZE {
            info!(
                "Skipping period {} with only {} reviews",
                period.key(),
                engine.scope_len()
            );
            continue;
        }
        let feature_reports = engine.run_feature_diagnostics();
        let segment_reports = engine.run_segment_diagnostics(dimensions);
        periods.push(PeriodReports {
            key: period.key(),
            label: period.label(),
            feature_reports,
            segment_reports,
        });
    }

    ReportBundle { overview, periods }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_sentiment_includes_neutral_for_both() {
        for sentiment in [DrillSentiment::Positive, DrillSentiment::Negative] {
            assert!(sentiment.includes(SubTopicPolarity::Neutral));
        }
        assert!(!DrillSentiment::Positive.includes(SubTopicPolarity::Negative));
        assert!(!DrillSentiment::Negative.includes(SubTopicPolarity::Positive));
        assert!(DrillSentiment::Positive.includes(SubTopicPolarity::Positive));
    }

    #[test]
    fn test_drill_sentiment_targets() {
        assert_eq!(
            DrillSentiment::Positive.target_label(),
            SentimentLabel::Positive
        );
        assert_eq!(DrillSentiment::Negative.display(), "负面评价");
    }
}
