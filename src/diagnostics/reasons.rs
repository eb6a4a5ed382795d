//! Ranked praise and complaint reasons
//!
//! Praise counts keyword matches per (feature, non-negative sub-topic)
//! within the high-rating subset of a segment; complaints are the symmetric
//! computation over non-positive sub-topics and the low-rating subset. Both
//! report the count and its share of the filtered subset, never of the
//! whole segment.

use crate::diagnostics::ReportEntry;
use crate::engine::AnalysisSnapshot;
use crate::rules::SubTopicPolarity;
use crate::HIGH_RATING_THRESHOLD;
use crate::LOW_RATING_THRESHOLD;

/// Most praised `feature » sub-topic` reasons within the segment rows
pub fn top_praises(snapshot: &AnalysisSnapshot, rows: &[usize], top_n: usize) -> Vec<ReportEntry> {
    let subset: Vec<usize> = rows
        .iter()
        .copied()
        .filter(|&row| snapshot.reviews[row].record.rating >= HIGH_RATING_THRESHOLD)
        .collect();
    ranked_reasons(snapshot, &subset, SubTopicPolarity::Negative, top_n)
}

/// Most complained `feature » sub-topic` reasons within the segment rows
pub fn top_complaints(
    snapshot: &AnalysisSnapshot,
    rows: &[usize],
    top_n: usize,
) -> Vec<ReportEntry> {
    let subset: Vec<usize> = rows
        .iter()
        .copied()
        .filter(|&row| snapshot.reviews[row].record.rating <= LOW_RATING_THRESHOLD)
        .collect();
    ranked_reasons(snapshot, &subset, SubTopicPolarity::Positive, top_n)
}

/// Count sub-topic keyword matches over a rating-filtered subset, skipping
/// sub-topics of the excluded polarity, and rank globally across all
/// features. An empty subset yields an empty ranking, not a fault.
fn ranked_reasons(
    snapshot: &AnalysisSnapshot,
    subset: &[usize],
    excluded: SubTopicPolarity,
    top_n: usize,
) -> Vec<ReportEntry> {
    if subset.is_empty() {
        return Vec::new();
    }
    let subset_size = subset.len();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for feature in &snapshot.compiled.features {
        for sub_topic in &feature.sub_topics {
            if sub_topic.polarity == excluded {
                continue;
            }
            let Some(pattern) = sub_topic.pattern.as_ref() else {
                continue;
            };
            let count = subset
                .iter()
                .filter(|&&row| pattern.is_match(&snapshot.reviews[row].normalized_text))
                .count();
            if count > 0 {
                counts.push((format!("{} » {}", feature.name, sub_topic.name), count));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top_n)
        .map(|(key, count)| {
            let pct = count as f64 / subset_size as f64 * 100.0;
            ReportEntry {
                key,
                value: format!("{count} 次 ({pct:.1}%)"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::engine::AnalysisEngine;
    use crate::engine::DimensionClassifiers;
    use crate::models::ReviewRecord;
    use crate::rules::Feature;
    use crate::rules::RuleSet;
    use crate::rules::SubTopic;
    use crate::text::TextPipeline;

    fn snapshot() -> AnalysisSnapshot {
        let ruleset = RuleSet::new(vec![Feature::new(
            "流畅性",
            vec![
                SubTopic::new("正面-书写流畅", vec!["smooth".to_string()]),
                SubTopic::new("负面-干涩/刮纸/断墨", vec!["dry".to_string()]),
            ],
        )]);
        let config = AppConfig::default();
        let engine = AnalysisEngine::new(
            ruleset,
            DimensionClassifiers::from_config(&config).unwrap(),
            TextPipeline::default(),
        )
        .unwrap();
        let records = vec![
            ("Writes smooth.", 5.0),
            ("So smooth on paper.", 5.0),
            ("smooth as silk", 4.0),
            ("Tip went dry.", 2.0),
            ("Totally dry out of the box.", 1.0),
        ]
        .into_iter()
        .map(|(content, rating)| ReviewRecord {
            content: content.to_string(),
            rating,
            product_id: "B0".to_string(),
            date: None,
        })
        .collect();
        engine.run(records).unwrap()
    }

    #[test]
    fn test_praise_ranking_uses_high_rating_subset() {
        let snapshot = snapshot();
        let rows: Vec<usize> = (0..snapshot.len()).collect();
        let praises = top_praises(&snapshot, &rows, 10);
        assert_eq!(praises[0].key, "流畅性 » 正面-书写流畅");
        // 3 of the 3 high-rating reviews match
        assert_eq!(praises[0].value, "3 次 (100.0%)");
    }

    #[test]
    fn test_complaint_ranking_uses_low_rating_subset() {
        let snapshot = snapshot();
        let rows: Vec<usize> = (0..snapshot.len()).collect();
        let complaints = top_complaints(&snapshot, &rows, 10);
        assert_eq!(complaints[0].key, "流畅性 » 负面-干涩/刮纸/断墨");
        assert_eq!(complaints[0].value, "2 次 (100.0%)");
    }

    #[test]
    fn test_excluded_polarity_is_skipped() {
        let snapshot = snapshot();
        let rows: Vec<usize> = (0..snapshot.len()).collect();
        let praises = top_praises(&snapshot, &rows, 10);
        assert!(praises.iter().all(|entry| !entry.key.contains("负面")));
        let complaints = top_complaints(&snapshot, &rows, 10);
        assert!(complaints.iter().all(|entry| !entry.key.contains("正面")));
    }

    #[test]
    fn test_empty_subset_is_empty_result() {
        let snapshot = snapshot();
        // only low-rating rows in the segment -> no praise subset
        let low_rows = vec![3usize, 4usize];
        assert!(top_praises(&snapshot, &low_rows, 10).is_empty());
    }
}
