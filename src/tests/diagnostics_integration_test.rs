//! End-to-end diagnostics tests over sealed snapshots

#[cfg(test)]
mod diagnostics_integration_tests {
    use crate::diagnostics::available_periods;
    use crate::diagnostics::build_report_bundle;
    use crate::diagnostics::DiagnosticsEngine;
    use crate::diagnostics::DrillSentiment;
    use crate::models::TimePeriod;
    use crate::tests::analyze;
    use crate::tests::make_dated_record;
    use crate::tests::make_record;
    use crate::ReviewLensError;

    /// 5 artist reviews mention fluency (3 of them also durability and
    /// value), 5 classroom reviews mention nothing.
    fn segmented_corpus() -> Vec<crate::models::ReviewRecord> {
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(make_record(
                "As an artist, these write smooth, sturdy and affordable.",
                5.0,
            ));
        }
        for _ in 0..2 {
            records.push(make_record("As an artist, these write smooth.", 5.0));
        }
        for _ in 0..5 {
            records.push(make_record("Bought a set for my classroom.", 3.0));
        }
        records
    }

    #[test]
    fn test_feature_drill_down_positive_side() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        let report = diagnostics
            .feature_drill_down("流畅性", DrillSentiment::Positive)
            .unwrap();
        assert!(!report.insufficient_data);
        assert_eq!(report.title, "关于【流畅性】的【正面评价】");

        let data = report.data.unwrap();
        assert_eq!(data.summary, "共找到 5 条相关评论, 占总评论数的 50.00%。");

        // every review in the segment is an artist review
        assert_eq!(
            data.user_profile.roles[0].key,
            "专业艺术工作者 (Professional Artist)"
        );
        assert_eq!(data.user_profile.roles[0].value, "5次 (100.0%)");

        let reason = data
            .main_reasons
            .iter()
            .find(|entry| entry.key == "正面-书写流畅")
            .expect("positive sub-topic should be reported");
        assert_eq!(reason.value, "5 次 (100.0%)");

        // negative sub-topics stay out of a positive drill-down
        assert!(data.main_reasons.iter().all(|e| !e.key.starts_with("负面")));

        // two co-mentioned features, tie broken by taxonomy order
        assert_eq!(data.related_needs.len(), 2);
        assert_eq!(data.related_needs[0].feature, "笔头耐用性");
        assert_eq!(data.related_needs[0].mention_rate, "60.00%");
        assert!(!data.related_needs[0].details.is_empty());
    }

    #[test]
    fn test_feature_drill_down_insufficient_segment() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        // nobody is negative about fluency in this corpus
        let report = diagnostics
            .feature_drill_down("流畅性", DrillSentiment::Negative)
            .unwrap();
        assert!(report.insufficient_data);
        assert!(report.data.is_none());
    }

    #[test]
    fn test_feature_drill_down_unknown_feature() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);
        let error = diagnostics
            .feature_drill_down("不存在的特征", DrillSentiment::Positive)
            .unwrap_err();
        assert!(matches!(error, ReviewLensError::UnknownFeature(_)));
    }

    #[test]
    fn test_user_segment_drill_down() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        let report = diagnostics
            .user_segment_drill_down("User_Role", "专业艺术工作者 (Professional Artist)")
            .unwrap();
        assert!(!report.insufficient_data);
        let data = report.data.unwrap();
        assert_eq!(data.summary, "共找到 5 条相关评论, 占总评论数的 50.00%.");

        // fluency is the segment's top need: mentioned by all 5, all positive
        assert_eq!(data.core_needs[0].key, "流畅性");
        assert_eq!(
            data.core_needs[0].value,
            "关注度 100.0% (好评率: 100.0%, 差评率: 0.0%)"
        );

        // praise ranking over the rating >= 4 subset of the segment
        let praise = data
            .top_praises
            .iter()
            .find(|entry| entry.key == "流畅性 » 正面-书写流畅")
            .expect("fluency praise should rank");
        assert_eq!(praise.value, "5 次 (100.0%)");

        // the segment has no low-rating reviews at all
        assert!(data.top_complaints.is_empty());
    }

    #[test]
    fn test_signature_needs_lift_and_fallback() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        let report = diagnostics
            .user_segment_drill_down("User_Role", "专业艺术工作者 (Professional Artist)")
            .unwrap();
        let data = report.data.unwrap();

        // segment rate 100% vs overall 50% -> 2.00x, sorted to the top
        assert_eq!(data.signature_needs_lift[0].value, "2.00x");
        let fluency = data
            .signature_needs_lift
            .iter()
            .find(|entry| entry.key == "流畅性")
            .unwrap();
        assert_eq!(fluency.value, "2.00x");

        // a feature nobody mentions anywhere: overall rate 0 -> exactly
        // "1.00x", never a division fault
        let unmentioned = data
            .signature_needs_lift
            .iter()
            .find(|entry| entry.key == "配套与服务")
            .unwrap();
        assert_eq!(unmentioned.value, "1.00x");
    }

    #[test]
    fn test_correlated_needs_within_segment() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        let report = diagnostics
            .user_segment_drill_down("User_Role", "专业艺术工作者 (Professional Artist)")
            .unwrap();
        let data = report.data.unwrap();

        // durability and value co-occur in exactly the same 3 reviews
        assert!(!data.correlated_needs.is_empty());
        assert!(data.correlated_needs.len() <= 3);
        assert_eq!(data.correlated_needs[0].value, "关联度: 1.00");
        // fluency is constant within the segment, so it can never pair
        assert!(data
            .correlated_needs
            .iter()
            .all(|entry| !entry.key.contains("流畅性")));
    }

    #[test]
    fn test_segment_insufficiency_and_unknown_dimension() {
        let snapshot = analyze(segmented_corpus());
        let diagnostics = DiagnosticsEngine::new(&snapshot);

        let report = diagnostics
            .user_segment_drill_down("Gender", "女性 (Female)")
            .unwrap();
        assert!(report.insufficient_data);

        let error = diagnostics
            .user_segment_drill_down("Zodiac", "Aries")
            .unwrap_err();
        assert!(matches!(error, ReviewLensError::UnknownDimension(_)));
    }

    #[test]
    fn test_available_periods_and_bundle_guard() {
        let mut records = Vec::new();
        for day in 1..=6 {
            records.push(make_dated_record("Writes smooth.", 5.0, (2024, 2, day)));
        }
        for day in 1..=6 {
            records.push(make_dated_record("Went dry fast.", 2.0, (2024, 5, day)));
        }
        for day in 1..=3 {
            records.push(make_dated_record("Writes smooth.", 4.0, (2023, 7, day)));
        }
        let snapshot = analyze(records);

        let periods = available_periods(&snapshot);
        assert_eq!(periods[0], TimePeriod::All);
        assert!(periods.contains(&TimePeriod::Year(2024)));
        assert!(periods.contains(&TimePeriod::Quarter(2024, 1)));
        assert!(periods.contains(&TimePeriod::Quarter(2023, 3)));

        // only the full corpus (15) and 2024 (12) clear the 10-review bar
        let bundle = build_report_bundle(&snapshot, &["User_Role".to_string()]);
        let keys: Vec<&str> = bundle.periods.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["_ALL_", "2024"]);
    }

    #[test]
    fn test_overview_aggregates() {
        let snapshot = analyze(segmented_corpus());
        let overview = DiagnosticsEngine::new(&snapshot).overview();

        assert_eq!(overview.total_reviews, 10);
        assert_eq!(overview.avg_rating, "4.00");
        assert_eq!(overview.positive_rate, "50.0%");

        let fluency = overview
            .feature_sentiment_stats
            .iter()
            .find(|stat| stat.feature == "流畅性")
            .unwrap();
        assert_eq!(fluency.total_mentions, 5);
        assert!((fluency.positive_ratio - 100.0).abs() < f64::EPSILON);

        // high-rating group mentions fluency everywhere; low-rating never
        let high = overview
            .high_rating_mention_rates
            .iter()
            .find(|rate| rate.feature == "流畅性")
            .unwrap();
        assert!((high.rate - 100.0).abs() < f64::EPSILON);
        let low = overview
            .low_rating_mention_rates
            .iter()
            .find(|rate| rate.feature == "流畅性")
            .unwrap();
        assert!(low.rate.abs() < f64::EPSILON);

        // "smooth" appears in 5 normalized high-rating reviews
        assert!(overview
            .high_rating_words
            .iter()
            .any(|word| word.word == "smooth" && word.count == 5));
    }
}
