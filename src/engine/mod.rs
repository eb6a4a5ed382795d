//! The two-phase analysis engine
//!
//! Phase one derives every per-review column (normalization, mentions,
//! sentence-level sentiment, classifications) as a row-parallel map; the
//! result is sealed into an [`AnalysisSnapshot`]. Phase two — diagnostics —
//! only ever reads a finished snapshot, so reports can never observe a
//! half-written table.

pub mod classifier;
pub mod mentions;
pub mod sentiment;

pub use classifier::CompiledClassifier;
pub use mentions::detect_mentions;
pub use sentiment::score_feature;
pub use sentiment::SentenceContext;

use rayon::prelude::*;
use tracing::info;

use crate::config::AppConfig;
use crate::models::AnalyzedReview;
use crate::models::DimensionLabels;
use crate::models::ReviewRecord;
use crate::models::SentimentLabel;
use crate::rules::classification;
use crate::rules::profiles::default_profiles;
use crate::rules::taxonomy::base_ruleset;
use crate::rules::CompiledRuleSet;
use crate::rules::RuleSet;
use crate::text::TextPipeline;
use crate::Result;

/// Classifiers for every categorical dimension
pub struct DimensionClassifiers {
    pub user_role: CompiledClassifier,
    pub gender: CompiledClassifier,
    pub age_group: CompiledClassifier,
    pub usage: CompiledClassifier,
    pub motivation: CompiledClassifier,
    pub product_category: CompiledClassifier,
}

impl DimensionClassifiers {
    /// Built-in dimension tables plus the configured product mapping
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            user_role: CompiledClassifier::compile(&classification::user_role_rules())?,
            gender: CompiledClassifier::compile(&classification::gender_rules())?,
            age_group: CompiledClassifier::compile(&classification::age_group_rules())?,
            usage: CompiledClassifier::compile(&classification::usage_rules())?,
            motivation: CompiledClassifier::compile(&classification::motivation_rules())?,
            product_category: CompiledClassifier::compile(&classification::product_category_rules(
                &config.analysis.category_mapping,
            ))?,
        })
    }

    fn classify(&self, record: &ReviewRecord) -> DimensionLabels {
        DimensionLabels {
            user_role: self.user_role.classify(&record.content).to_string(),
            gender: self.gender.classify(&record.content).to_string(),
            age_group: self.age_group.classify(&record.content).to_string(),
            usage: self.usage.classify(&record.content).to_string(),
            motivation: self.motivation.classify(&record.content).to_string(),
            product_category: self
                .product_category
                .classify(&record.product_id)
                .to_string(),
        }
    }
}

/// All derived columns for one corpus, sealed after the analysis pass.
///
/// The overall mention rates are captured over the full corpus at analysis
/// time; period- or segment-scoped diagnostics still compute lift against
/// these baselines.
pub struct AnalysisSnapshot {
    pub ruleset: RuleSet,
    pub compiled: CompiledRuleSet,
    pub reviews: Vec<AnalyzedReview>,
    pub overall_mention_rates: Vec<f64>,
}

impl AnalysisSnapshot {
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.ruleset.feature_names()
    }
}

/// The configured analysis engine
pub struct AnalysisEngine {
    ruleset: RuleSet,
    compiled: CompiledRuleSet,
    classifiers: DimensionClassifiers,
    pipeline: TextPipeline,
}

impl AnalysisEngine {
    pub fn new(
        ruleset: RuleSet,
        classifiers: DimensionClassifiers,
        pipeline: TextPipeline,
    ) -> Result<Self> {
        let compiled = CompiledRuleSet::compile(&ruleset)?;
        Ok(Self {
            ruleset,
            compiled,
            classifiers,
            pipeline,
        })
    }

    /// Build the engine from configuration: base taxonomy merged with the
    /// selected profile, built-in dimension tables, default text pipeline.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let ruleset = crate::rules::build_ruleset(
            &base_ruleset(),
            &default_profiles(),
            config.profile(),
        );
        let classifiers = DimensionClassifiers::from_config(config)?;
        Self::new(ruleset, classifiers, TextPipeline::default())
    }

    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    /// Run the full derivation pass and seal the result.
    ///
    /// Rows are independent: each parallel task reads its own record and
    /// writes its own derived cells, nothing is accumulated across rows
    /// until the final (sequential) mention-rate reduction.
    pub fn run(&self, records: Vec<ReviewRecord>) -> Result<AnalysisSnapshot> {
        info!(
            "Analyzing {} reviews against {} features",
            records.len(),
            self.compiled.len()
        );

        // Step 1: normalize and flag mentions for every row
        let normalized: Vec<String> = records
            .par_iter()
            .map(|record| self.pipeline.normalizer.normalize(&record.content))
            .collect();
        let mentions = detect_mentions(&normalized, &self.compiled);

        // Step 2: sentence-level sentiment for flagged rows, classification
        let reviews: Vec<AnalyzedReview> = records
            .into_par_iter()
            .zip(normalized)
            .zip(mentions)
            .map(|((record, normalized_text), mentions)| {
                self.analyze_one(record, normalized_text, mentions)
            })
            .collect();

        let overall_mention_rates = mention_rates(&reviews, self.compiled.len());

        info!("Analysis pass complete; snapshot sealed");
        Ok(AnalysisSnapshot {
            ruleset: self.ruleset.clone(),
            compiled: self.compiled.clone(),
            reviews,
            overall_mention_rates,
        })
    }

    fn analyze_one(
        &self,
        record: ReviewRecord,
        normalized_text: String,
        mentions: Vec<bool>,
    ) -> AnalyzedReview {
        // The expensive sentence pass only runs for reviews that mention
        // at least one feature.
        let scores: Vec<f64> = if mentions.iter().any(|&m| m) {
            let sentences = SentenceContext::build(&record.content, &self.pipeline);
            self.compiled
                .features
                .iter()
                .zip(&mentions)
                .map(|(feature, &mentioned)| {
                    if mentioned {
                        score_feature(&sentences, feature, &self.pipeline)
                    } else {
                        0.0
                    }
                })
                .collect()
        } else {
            vec![0.0; self.compiled.len()]
        };

        let labels: Vec<SentimentLabel> = scores
            .iter()
            .map(|&score| SentimentLabel::from_score(score))
            .collect();

        let overall_polarity = self.pipeline.scorer.score(&record.content);
        let overall_sentiment = SentimentLabel::from_score(overall_polarity);
        let dimensions = self.classifiers.classify(&record);

        AnalyzedReview {
            record,
            normalized_text,
            overall_polarity,
            overall_sentiment,
            mentions,
            scores,
            labels,
            dimensions,
        }
    }
}

/// Mean mention rate per feature over a finished review set
fn mention_rates(reviews: &[AnalyzedReview], feature_count: usize) -> Vec<f64> {
    if reviews.is_empty() {
        return vec![0.0; feature_count];
    }
    let mut counts = vec![0usize; feature_count];
    for review in reviews {
        for (i, &mentioned) in review.mentions.iter().enumerate() {
            if mentioned {
                counts[i] += 1;
            }
        }
    }
    counts
        .into_iter()
        .map(|count| count as f64 / reviews.len() as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Feature;
    use crate::rules::SubTopic;

    fn record(content: &str, rating: f64) -> ReviewRecord {
        ReviewRecord {
            content: content.to_string(),
            rating,
            product_id: "B000TEST".to_string(),
            date: None,
        }
    }

    fn engine() -> AnalysisEngine {
        let ruleset = RuleSet::new(vec![Feature::new(
            "流畅性",
            vec![
                SubTopic::new("正面-书写流畅", vec!["smooth".to_string()]),
                SubTopic::new("负面-干涩/刮纸/断墨", vec!["dry".to_string()]),
            ],
        )]);
        let config = AppConfig::default();
        let classifiers = DimensionClassifiers::from_config(&config).unwrap();
        AnalysisEngine::new(ruleset, classifiers, TextPipeline::default()).unwrap()
    }

    #[test]
    fn test_unmentioned_rows_stay_neutral() {
        let snapshot = engine()
            .run(vec![
                record("Writes smooth every time.", 5.0),
                record("The case looks nice.", 4.0),
            ])
            .unwrap();

        // mention false ⇒ score 0 ∧ label 0
        let silent = &snapshot.reviews[1];
        assert!(!silent.mentions[0]);
        assert!(silent.scores[0].abs() < f64::EPSILON);
        assert_eq!(silent.labels[0], SentimentLabel::Neutral);

        let mentioned = &snapshot.reviews[0];
        assert!(mentioned.mentions[0]);
        assert_eq!(mentioned.labels[0], SentimentLabel::Positive);
    }

    #[test]
    fn test_overall_mention_rates() {
        let snapshot = engine()
            .run(vec![
                record("smooth", 5.0),
                record("dry", 1.0),
                record("unrelated", 3.0),
                record("also unrelated", 3.0),
            ])
            .unwrap();
        assert!((snapshot.overall_mention_rates[0] - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_corpus() {
        let snapshot = engine().run(vec![]).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.overall_mention_rates, vec![0.0]);
    }

    #[test]
    fn test_dimension_classification_defaults() {
        let snapshot = engine()
            .run(vec![record("A review with no persona hints.", 4.0)])
            .unwrap();
        let dims = &snapshot.reviews[0].dimensions;
        assert_eq!(dims.gender, "未知性别");
        assert_eq!(dims.age_group, "成人");
        assert_eq!(dims.product_category, "Other Series");
    }

    #[test]
    fn test_dimension_classification_matches() {
        let snapshot = engine()
            .run(vec![record(
                "As an artist I use these for my daughter's homework.",
                5.0,
            )])
            .unwrap();
        let dims = &snapshot.reviews[0].dimensions;
        assert_eq!(dims.user_role, "专业艺术工作者 (Professional Artist)");
        assert_eq!(dims.gender, "女性 (Female)");
    }
}
