//! Corpus overview aggregates
//!
//! The headline numbers and distributions a dashboard shows before any
//! drill-down: rating histogram, per-feature sentiment totals, mention
//! rates split by rating group, word frequencies, and per-dimension
//! distributions.

use std::collections::HashMap;

use serde::Serialize;

use super::CountEntry;
use super::DiagnosticsEngine;
use crate::models::SentimentLabel;
use crate::HIGH_RATING_THRESHOLD;
use crate::LOW_RATING_THRESHOLD;

/// Words rarer than this across a rating group stay out of the word cloud
const MIN_WORD_FREQUENCY: usize = 5;

#[derive(Debug, Serialize)]
pub struct OverviewReport {
    pub total_reviews: usize,
    pub avg_rating: String,
    pub positive_rate: String,
    pub rating_distribution: Vec<CountEntry>,
    pub feature_sentiment_stats: Vec<FeatureSentimentStat>,
    pub high_rating_mention_rates: Vec<MentionRate>,
    pub low_rating_mention_rates: Vec<MentionRate>,
    pub high_rating_words: Vec<WordFrequency>,
    pub low_rating_words: Vec<WordFrequency>,
    pub dimension_distributions: Vec<DimensionDistribution>,
}

/// Mentions and polarity shares for one feature over the whole scope
#[derive(Debug, Serialize)]
pub struct FeatureSentimentStat {
    pub feature: String,
    pub total_mentions: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
}

#[derive(Debug, Serialize)]
pub struct MentionRate {
    pub feature: String,
    pub rate: f64,
}

#[derive(Debug, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DimensionDistribution {
    pub dimension: String,
    pub counts: Vec<CountEntry>,
}

impl DiagnosticsEngine<'_> {
    /// Aggregate overview of the scoped reviews.
    pub fn overview(&self) -> OverviewReport {
        let snapshot = self.snapshot();
        let rows = self.rows();
        let total = rows.len();

        let avg_rating = if total == 0 {
            0.0
        } else {
            rows.iter()
                .map(|&row| snapshot.reviews[row].record.rating)
                .sum::<f64>()
                / total as f64
        };

        let high_rows: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|&row| snapshot.reviews[row].record.rating >= HIGH_RATING_THRESHOLD)
            .collect();
        let low_rows: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|&row| snapshot.reviews[row].record.rating <= LOW_RATING_THRESHOLD)
            .collect();

        let positive_rate = if total == 0 {
            0.0
        } else {
            high_rows.len() as f64 / total as f64 * 100.0
        };

        let mut rating_distribution = self.count_values(rows, |row| {
            format_rating(snapshot.reviews[row].record.rating)
        });
        rating_distribution.sort_by(|a, b| a.key.cmp(&b.key));

        let feature_sentiment_stats = self.feature_sentiment_stats(rows);
        let high_rating_mention_rates = self.group_mention_rates(&high_rows);
        let low_rating_mention_rates = self.group_mention_rates(&low_rows);
        let high_rating_words = self.frequent_words(&high_rows);
        let low_rating_words = self.frequent_words(&low_rows);

        let dimension_distributions = [
            "User_Role",
            "Gender",
            "Age_Group",
            "Usage",
            "Motivation",
            "Product_Category",
        ]
        .into_iter()
        .map(|dimension| DimensionDistribution {
            dimension: dimension.to_string(),
            counts: self.count_values(rows, |row| {
                snapshot.reviews[row]
                    .dimensions
                    .get(dimension)
                    .unwrap_or_default()
                    .to_string()
            }),
        })
        .collect();

        OverviewReport {
            total_reviews: total,
            avg_rating: format!("{avg_rating:.2}"),
            positive_rate: format!("{positive_rate:.1}%"),
            rating_distribution,
            feature_sentiment_stats,
            high_rating_mention_rates,
            low_rating_mention_rates,
            high_rating_words,
            low_rating_words,
            dimension_distributions,
        }
    }

    fn feature_sentiment_stats(&self, rows: &[usize]) -> Vec<FeatureSentimentStat> {
        let snapshot = self.snapshot();
        let mut stats = Vec::new();

        for (feature_index, feature) in snapshot.ruleset.features.iter().enumerate() {
            let total_mentions = rows
                .iter()
                .filter(|&&row| snapshot.reviews[row].mentions[feature_index])
                .count();
            if total_mentions == 0 {
                continue;
            }
            let positive = rows
                .iter()
                .filter(|&&row| {
                    snapshot.reviews[row].labels[feature_index] == SentimentLabel::Positive
                })
                .count();
            let negative = rows
                .iter()
                .filter(|&&row| {
                    snapshot.reviews[row].labels[feature_index] == SentimentLabel::Negative
                })
                .count();
            stats.push(FeatureSentimentStat {
                feature: feature.name.clone(),
                total_mentions,
                positive_ratio: positive as f64 / total_mentions as f64 * 100.0,
                negative_ratio: negative as f64 / total_mentions as f64 * 100.0,
            });
        }
        stats
    }

    /// Per-feature mention rate (%) within a rating group; an empty group
    /// short-circuits every rate to 0.
    fn group_mention_rates(&self, group: &[usize]) -> Vec<MentionRate> {
        let snapshot = self.snapshot();
        snapshot
            .ruleset
            .features
            .iter()
            .enumerate()
            .map(|(feature_index, feature)| {
                let rate = if group.is_empty() {
                    0.0
                } else {
                    group
                        .iter()
                        .filter(|&&row| snapshot.reviews[row].mentions[feature_index])
                        .count() as f64
                        / group.len() as f64
                        * 100.0
                };
                MentionRate {
                    feature: feature.name.clone(),
                    rate,
                }
            })
            .collect()
    }

    /// Frequent normalized tokens over a rating group, count descending
    fn frequent_words(&self, group: &[usize]) -> Vec<WordFrequency> {
        let snapshot = self.snapshot();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &row in group {
            for word in snapshot.reviews[row].normalized_text.split_whitespace() {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        let mut words: Vec<WordFrequency> = counts
            .into_iter()
            .filter(|&(_, count)| count >= MIN_WORD_FREQUENCY)
            .map(|(word, count)| WordFrequency {
                word: word.to_string(),
                count,
            })
            .collect();
        words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        words
    }
}

/// Rating bucket label: integral ratings render bare ("5星"), fractional
/// ones keep a decimal ("4.5星").
fn format_rating(rating: f64) -> String {
    if (rating.fract()).abs() < f64::EPSILON {
        format!("{}星", rating as i64)
    } else {
        format!("{rating:.1}星")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(5.0), "5星");
        assert_eq!(format_rating(4.5), "4.5星");
        assert_eq!(format_rating(1.0), "1星");
    }
}
