//! End-to-end engine tests against the full built-in taxonomy

#[cfg(test)]
mod engine_integration_tests {
    use crate::diagnostics::reasons::top_complaints;
    use crate::diagnostics::reasons::top_praises;
    use crate::models::SentimentLabel;
    use crate::tests::analyze;
    use crate::tests::make_record;

    /// 3 reviews hit the positive fluency keyword, 2 hit the negative one.
    /// Ratings: [5, 5, 4, 2, 1].
    fn fluency_corpus() -> Vec<crate::models::ReviewRecord> {
        vec![
            make_record("Writes so smooth on every page.", 5.0),
            make_record("Smooth ink flow, love it.", 5.0),
            make_record("Very smooth marker.", 4.0),
            make_record("The tip went dry after a week.", 2.0),
            make_record("Arrived dry right out of the box.", 1.0),
        ]
    }

    #[test]
    fn test_fluency_mentions_and_labels() {
        let snapshot = analyze(fluency_corpus());
        let fluency = snapshot.ruleset.feature_index("流畅性").unwrap();

        for (row, expected_label) in [
            (0, SentimentLabel::Positive),
            (1, SentimentLabel::Positive),
            (2, SentimentLabel::Positive),
            (3, SentimentLabel::Negative),
            (4, SentimentLabel::Negative),
        ] {
            let review = &snapshot.reviews[row];
            assert!(review.mentions[fluency], "row {row} should mention 流畅性");
            assert_eq!(
                review.labels[fluency], expected_label,
                "row {row} has the wrong label"
            );
        }
    }

    #[test]
    fn test_praise_ranking_over_high_rating_subset() {
        let snapshot = analyze(fluency_corpus());
        let rows: Vec<usize> = (0..snapshot.len()).collect();

        // 3 high-rating reviews (5, 5, 4); all of them match the positive
        // fluency sub-topic.
        let praises = top_praises(&snapshot, &rows, 10);
        assert_eq!(praises[0].key, "流畅性 » 正面-书写流畅");
        assert_eq!(praises[0].value, "3 次 (100.0%)");
    }

    #[test]
    fn test_complaint_ranking_over_low_rating_subset() {
        let snapshot = analyze(fluency_corpus());
        let rows: Vec<usize> = (0..snapshot.len()).collect();

        // 2 low-rating reviews (2, 1); both match the negative sub-topic.
        let complaints = top_complaints(&snapshot, &rows, 10);
        assert_eq!(complaints[0].key, "流畅性 » 负面-干涩/刮纸/断墨");
        assert_eq!(complaints[0].value, "2 次 (100.0%)");
    }

    #[test]
    fn test_no_keyword_reviews_have_no_mention() {
        let mut records = fluency_corpus();
        records.push(make_record("Shipping was fast.", 4.0));
        records.push(make_record("My order was late.", 3.0));
        let snapshot = analyze(records);
        let fluency = snapshot.ruleset.feature_index("流畅性").unwrap();

        for row in 5..7 {
            assert!(!snapshot.reviews[row].mentions[fluency]);
        }
    }

    #[test]
    fn test_mention_implies_eligibility_only() {
        // For every review and every feature:
        // mention == false ⇒ score == 0 ∧ label == 0
        let mut records = fluency_corpus();
        records.push(make_record("Shipping was fast.", 4.0));
        records.push(make_record(
            "My daughter loves the pretty pastel set, great deal.",
            5.0,
        ));
        let snapshot = analyze(records);

        for review in &snapshot.reviews {
            for feature_index in 0..snapshot.ruleset.len() {
                if !review.mentions[feature_index] {
                    assert!(review.scores[feature_index].abs() < f64::EPSILON);
                    assert_eq!(review.labels[feature_index], SentimentLabel::Neutral);
                }
            }
        }
    }

    #[test]
    fn test_non_textual_content_is_not_an_error() {
        // Whitespace-only content rows are dropped at ingestion in the real
        // pipeline; fed directly to the engine they just stay silent.
        let snapshot = analyze(vec![make_record("   ", 4.0)]);
        let review = &snapshot.reviews[0];
        assert!(review.mentions.iter().all(|&m| !m));
        assert!(review.scores.iter().all(|&s| s.abs() < f64::EPSILON));
    }

    #[test]
    fn test_profile_clears_sub_topic_end_to_end() {
        use crate::config::AppConfig;
        use crate::engine::AnalysisEngine;
        use crate::engine::DimensionClassifiers;
        use crate::rules::build_ruleset;
        use crate::rules::profiles::default_profiles;
        use crate::rules::taxonomy::base_ruleset;
        use crate::text::TextPipeline;

        // Under the neon profile, "too bright" flips from a complaint to
        // praise for ink effects.
        let ruleset = build_ruleset(&base_ruleset(), &default_profiles(), "霓虹笔专属画像");
        let config = AppConfig::default();
        let engine = AnalysisEngine::new(
            ruleset,
            DimensionClassifiers::from_config(&config).unwrap(),
            TextPipeline::default(),
        )
        .unwrap();
        let snapshot = engine
            .run(vec![make_record("These are insanely bright.", 5.0)])
            .unwrap();

        let ink = snapshot.ruleset.feature_index("墨水特性").unwrap();
        let review = &snapshot.reviews[0];
        assert!(review.mentions[ink]);
        assert_eq!(review.labels[ink], SentimentLabel::Positive);
    }
}
