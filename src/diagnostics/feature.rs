//! Feature drill-down reports
//!
//! One report per (feature, sentiment) pair: who talks about the feature
//! that way, which products they bought, which sub-topics carry the
//! praise/complaints, and which other features the same crowd mentions.

use serde::Serialize;

use super::CountEntry;
use super::DiagnosticsEngine;
use super::DrillSentiment;
use super::ReportEntry;
use crate::Result;
use crate::ReviewLensError;
use crate::MIN_SEGMENT_SIZE;

#[derive(Debug, Serialize)]
pub struct FeatureDrillDown {
    #[serde(rename = "type")]
    pub report_type: String,
    pub title: String,
    pub insufficient_data: bool,
    pub data: Option<FeatureDrillDownData>,
}

#[derive(Debug, Serialize)]
pub struct FeatureDrillDownData {
    pub summary: String,
    pub user_profile: UserProfileBreakdown,
    pub product_preferences: Vec<ReportEntry>,
    pub main_reasons: Vec<ReportEntry>,
    pub related_needs: Vec<RelatedNeed>,
}

#[derive(Debug, Serialize)]
pub struct UserProfileBreakdown {
    pub roles: Vec<ReportEntry>,
    pub usages: Vec<ReportEntry>,
    pub gender_distribution: Vec<CountEntry>,
    pub age_distribution: Vec<CountEntry>,
}

/// Another feature strongly present in the same segment
#[derive(Debug, Serialize)]
pub struct RelatedNeed {
    pub feature: String,
    pub mention_rate: String,
    pub details: Vec<ReportEntry>,
}

impl DiagnosticsEngine<'_> {
    /// Drill into one feature on one sentiment side.
    ///
    /// Segments smaller than [`MIN_SEGMENT_SIZE`] come back flagged
    /// insufficient with no statistics computed.
    pub fn feature_drill_down(
        &self,
        feature_name: &str,
        sentiment: DrillSentiment,
    ) -> Result<FeatureDrillDown> {
        let snapshot = self.snapshot();
        let feature_index = snapshot
            .ruleset
            .feature_index(feature_name)
            .ok_or_else(|| ReviewLensError::UnknownFeature(feature_name.to_string()))?;

        let title = format!("关于【{feature_name}】的【{}】", sentiment.display());
        let target = sentiment.target_label();

        let segment: Vec<usize> = self
            .rows()
            .iter()
            .copied()
            .filter(|&row| {
                let review = &snapshot.reviews[row];
                review.mentions[feature_index] && review.labels[feature_index] == target
            })
            .collect();

        if segment.len() < MIN_SEGMENT_SIZE {
            return Ok(FeatureDrillDown {
                report_type: "feature_drill_down".to_string(),
                title,
                insufficient_data: true,
                data: None,
            });
        }

        let segment_size = segment.len();
        let pct_of_total = segment_size as f64 / self.scope_len() as f64 * 100.0;
        let summary =
            format!("共找到 {segment_size} 条相关评论, 占总评论数的 {pct_of_total:.2}%。");

        let roles = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.user_role.clone()
        });
        let usages = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.usage.clone()
        });
        let gender_distribution = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.gender.clone()
        });
        let age_distribution = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.age_group.clone()
        });
        let products = self.count_values(&segment, |row| {
            snapshot.reviews[row].dimensions.product_category.clone()
        });

        let user_profile = UserProfileBreakdown {
            roles: Self::format_distribution(&roles, segment_size, 5),
            usages: Self::format_distribution(&usages, segment_size, 5),
            gender_distribution,
            age_distribution,
        };
        let product_preferences = Self::format_distribution(&products, segment_size, 3);

        let main_reasons =
            self.sub_topic_matches(&segment, feature_index, |polarity| sentiment.includes(polarity));
        let related_needs = self.related_needs(&segment, feature_index);

        Ok(FeatureDrillDown {
            report_type: "feature_drill_down".to_string(),
            title,
            insufficient_data: false,
            data: Some(FeatureDrillDownData {
                summary,
                user_profile,
                product_preferences,
                main_reasons,
                related_needs,
            }),
        })
    }

    /// Keyword-match counts per sub-topic of a feature within a segment
    fn sub_topic_matches<F>(
        &self,
        segment: &[usize],
        feature_index: usize,
        include: F,
    ) -> Vec<ReportEntry>
    where
        F: Fn(crate::rules::SubTopicPolarity) -> bool,
    {
        let snapshot = self.snapshot();
        let segment_size = segment.len();
        let mut entries = Vec::new();

        for sub_topic in &snapshot.compiled.features[feature_index].sub_topics {
            if !include(sub_topic.polarity) {
                continue;
            }
            let Some(pattern) = sub_topic.pattern.as_ref() else {
                continue;
            };
            let count = segment
                .iter()
                .filter(|&&row| pattern.is_match(&snapshot.reviews[row].normalized_text))
                .count();
            if count > 0 {
                let pct = count as f64 / segment_size as f64 * 100.0;
                entries.push(ReportEntry {
                    key: sub_topic.name.clone(),
                    value: format!("{count} 次 ({pct:.1}%)"),
                });
            }
        }
        entries
    }

    /// The two other features most mentioned within the segment, each with
    /// its own sub-topic breakdown. The current feature is excluded by
    /// structural identity, not by name containment.
    fn related_needs(&self, segment: &[usize], feature_index: usize) -> Vec<RelatedNeed> {
        let snapshot = self.snapshot();
        let segment_size = segment.len();

        let mut rates: Vec<(usize, f64)> = (0..snapshot.compiled.len())
            .filter(|&other| other != feature_index)
            .map(|other| {
                let count = segment
                    .iter()
                    .filter(|&&row| snapshot.reviews[row].mentions[other])
                    .count();
                (other, count as f64 / segment_size as f64 * 100.0)
            })
            .collect();
        rates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut related = Vec::new();
        for (other, rate) in rates.into_iter().take(2) {
            let details = self.sub_topic_matches(segment, other, |_| true);
            if details.is_empty() {
                continue;
            }
            related.push(RelatedNeed {
                feature: snapshot.ruleset.features[other].name.clone(),
                mention_rate: format!("{rate:.2}%"),
                details,
            });
        }
        related
    }
}
