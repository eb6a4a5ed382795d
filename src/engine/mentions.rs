//! Feature mention detection
//!
//! A review "mentions" a feature when its normalized text matches any
//! keyword under the feature, regardless of sub-topic or polarity. Rows are
//! independent, so detection runs as a parallel map.

use rayon::prelude::*;

use crate::rules::CompiledRuleSet;

/// Per-review, per-feature mention flags.
///
/// The outer vector is indexed by review, the inner by the ruleset's
/// feature order. Output depends only on the inputs: rows never share
/// state, so results are deterministic across thread schedules.
pub fn detect_mentions(normalized_texts: &[String], ruleset: &CompiledRuleSet) -> Vec<Vec<bool>> {
    normalized_texts
        .par_iter()
        .map(|text| {
            ruleset
                .features
                .iter()
                .map(|feature| feature.mentions(text))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CompiledRuleSet;
    use crate::rules::Feature;
    use crate::rules::RuleSet;
    use crate::rules::SubTopic;

    fn ruleset() -> CompiledRuleSet {
        CompiledRuleSet::compile(&RuleSet::new(vec![
            Feature::new(
                "流畅性",
                vec![
                    SubTopic::new("正面-书写流畅", vec!["smooth".to_string()]),
                    SubTopic::new("负面-干涩", vec!["dry".to_string()]),
                ],
            ),
            Feature::new(
                "墨水特性",
                vec![SubTopic::new("负面-气味难闻", vec!["ink".to_string()])],
            ),
        ]))
        .unwrap()
    }

    #[test]
    fn test_mention_is_polarity_independent() {
        let texts = vec![
            "writes smooth".to_string(),
            "very dry tip".to_string(),
            "nothing relevant".to_string(),
        ];
        let mentions = detect_mentions(&texts, &ruleset());
        assert_eq!(mentions[0], vec![true, false]);
        assert_eq!(mentions[1], vec![true, false]);
        assert_eq!(mentions[2], vec![false, false]);
    }

    #[test]
    fn test_whole_word_boundary() {
        // "pinkish" must not trigger the "ink" keyword
        let texts = vec!["pinkish shade".to_string(), "ink everywhere".to_string()];
        let mentions = detect_mentions(&texts, &ruleset());
        assert_eq!(mentions[0], vec![false, false]);
        assert_eq!(mentions[1], vec![false, true]);
    }

    #[test]
    fn test_order_independent_across_rows() {
        let texts: Vec<String> = (0..64)
            .map(|i| {
                if i % 2 == 0 {
                    "smooth".to_string()
                } else {
                    "dry".to_string()
                }
            })
            .collect();
        let mentions = detect_mentions(&texts, &ruleset());
        for (i, row) in mentions.iter().enumerate() {
            assert!(row[0], "row {i} should mention the feature");
        }
    }
}
