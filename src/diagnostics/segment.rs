//! User-segment drill-down reports
//!
//! One report per (dimension, value) pair: who the segment is, which
//! features it cares about, which features co-occur, what it praises and
//! complains about, and how its mention rates lift against the whole
//! corpus.

use serde::Serialize;

use super::correlation::correlated_pairs;
use super::reasons::top_complaints;
use super::reasons::top_praises;
use super::CountEntry;
use super::DiagnosticsEngine;
use super::ReportEntry;
use crate::Result;
use crate::ReviewLensError;
use crate::MIN_SEGMENT_SIZE;

/// Reasons are ranked globally across all features; only the strongest
/// entries make the report.
const TOP_REASONS: usize = 10;

/// How many correlated pairs and core needs the report keeps
const TOP_CORRELATED: usize = 3;
const TOP_CORE_NEEDS: usize = 5;

#[derive(Debug, Serialize)]
pub struct UserSegmentReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub title: String,
    pub insufficient_data: bool,
    pub data: Option<UserSegmentData>,
}

#[derive(Debug, Serialize)]
pub struct UserSegmentData {
    pub summary: String,
    pub overview: SegmentOverview,
    pub core_needs: Vec<ReportEntry>,
    pub correlated_needs: Vec<ReportEntry>,
    pub top_praises: Vec<ReportEntry>,
    pub top_complaints: Vec<ReportEntry>,
    pub signature_needs_lift: Vec<ReportEntry>,
}

#[derive(Debug, Serialize)]
pub struct SegmentOverview {
    pub motivations: Vec<ReportEntry>,
    pub products: Vec<ReportEntry>,
    pub gender_distribution: Vec<CountEntry>,
    pub age_distribution: Vec<CountEntry>,
}

impl DiagnosticsEngine<'_> {
    /// Drill into one segment of one classification dimension.
    pub fn user_segment_drill_down(
        &self,
        dimension: &str,
        segment_value: &str,
    ) -> Result<UserSegmentReport> {
        let snapshot = self.snapshot();

        // Validate the dimension name before selecting anything
        if crate::models::DimensionLabels::default().get(dimension).is_none() {
            return Err(ReviewLensError::UnknownDimension(dimension.to_string()));
        }

        let title = format!("用户群体深度诊断: 【{segment_value}】");

        let segment: Vec<usize> = self
            .rows()
            .iter()
            .copied()
            .filter(|&row| {
                snapshot.reviews[row]
                    .dimensions
                    .get(dimension)
                    .is_some_and(|value| value == segment_value)
            })
            .collect();

        if segment.len() < MIN_SEGMENT_SIZE {
            return Ok(UserSegmentReport {
                report_type: "user_drill_down".to_string(),
                title,
                insufficient_data: true,
                data: None,
            });
        }

        let segment_size = segment.len();
        let pct_of_total = segment_size as f64 / self.scope_len() as f64 * 100.0;
        let summary =
            format!("共找到 {segment_size} 条相关评论, 占总评论数的 {pct_of_total:.2}%.");

        let motivations = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.motivation.clone()
        });
        let products = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.product_category.clone()
        });
        let overview = SegmentOverview {
            motivations: Self::format_distribution(&motivations, segment_size, 3),
            products: Self::format_distribution(&products, segment_size, 3),
            gender_distribution: self.count_values(&segment, |row| {
                snapshot.reviews[row].dimensions.gender.clone()
            }),
            age_distribution: self.count_values(&segment, |row| {
                snapshot.reviews[row].dimensions.age_group.clone()
            }),
        };

        let core_needs = self.core_needs(&segment);
        let correlated_needs = correlated_pairs(snapshot, &segment)
            .into_iter()
            .take(TOP_CORRELATED)
            .map(|(a, b, r)| ReportEntry {
                key: format!("'{a}' 与 '{b}'"),
                value: format!("关联度: {r:.2}"),
            })
            .collect();

        let top_praises = top_praises(snapshot, &segment, TOP_REASONS);
        let top_complaints = top_complaints(snapshot, &segment, TOP_REASONS);
        let signature_needs_lift = self.feature_lift(&segment);

        Ok(UserSegmentReport {
            report_type: "user_drill_down".to_string(),
            title,
            insufficient_data: false,
            data: Some(UserSegmentData {
                summary,
                overview,
                core_needs,
                correlated_needs,
                top_praises,
                top_complaints,
                signature_needs_lift,
            }),
        })
    }

    /// Top features by mention rate within a segment, with the share of
    /// positive and negative labels among those mentions.
    fn core_needs(&self, segment: &[usize]) -> Vec<ReportEntry> {
        let snapshot = self.snapshot();
        let segment_size = segment.len();

        let mut needs: Vec<(String, f64, f64, f64)> = Vec::new();
        for (feature_index, feature) in snapshot.ruleset.features.iter().enumerate() {
            let mentions = segment
                .iter()
                .filter(|&&row| snapshot.reviews[row].mentions[feature_index])
                .count();
            if mentions == 0 {
                continue;
            }
            let positive = segment
                .iter()
                .filter(|&&row| {
                    snapshot.reviews[row].labels[feature_index]
                        == crate::models::SentimentLabel::Positive
                })
                .count();
            let negative = segment
                .iter()
                .filter(|&&row| {
                    snapshot.reviews[row].labels[feature_index]
                        == crate::models::SentimentLabel::Negative
                })
                .count();
            needs.push((
                feature.name.clone(),
                mentions as f64 / segment_size as f64 * 100.0,
                positive as f64 / mentions as f64 * 100.0,
                negative as f64 / mentions as f64 * 100.0,
            ));
        }

        needs.sort_by(|a, b| b.1.total_cmp(&a.1));
        needs
            .into_iter()
            .take(TOP_CORE_NEEDS)
            .map(|(name, rate, positive, negative)| ReportEntry {
                key: name,
                value: format!(
                    "关注度 {rate:.1}% (好评率: {positive:.1}%, 差评率: {negative:.1}%)"
                ),
            })
            .collect()
    }

    /// Lift of each feature's segment mention rate over the whole-corpus
    /// rate captured at analysis time. A feature nobody mentions overall
    /// gets exactly "1.00x" — no information, not a division fault.
    fn feature_lift(&self, segment: &[usize]) -> Vec<ReportEntry> {
        let snapshot = self.snapshot();
        let segment_size = segment.len();

        let mut lifts: Vec<(String, f64)> = snapshot
            .ruleset
            .features
            .iter()
            .enumerate()
            .map(|(feature_index, feature)| {
                let segment_rate = segment
                    .iter()
                    .filter(|&&row| snapshot.reviews[row].mentions[feature_index])
                    .count() as f64
                    / segment_size as f64;
                let overall_rate = snapshot.overall_mention_rates[feature_index];
                let lift = if overall_rate > 0.0 {
                    segment_rate / overall_rate
                } else {
                    1.0
                };
                (feature.name.clone(), lift)
            })
            .collect();

        lifts.sort_by(|a, b| b.1.total_cmp(&a.1));
        lifts
            .into_iter()
            .map(|(name, lift)| ReportEntry {
                key: name,
                value: format!("{lift:.2}x"),
            })
            .collect()
    }
}
