//! Sentence-level sentiment attribution
//!
//! Runs only for review/feature pairs that were flagged as mentions; rows
//! without a mention keep score 0 and label 0 without ever entering this
//! module. Polarity-tagged sub-topics short-circuit the scan; neutral
//! sub-topics defer to the generic polarity scorer on the raw sentence.

use crate::rules::CompiledFeature;
use crate::rules::SubTopicPolarity;
use crate::text::TextPipeline;

/// One review's sentences in raw and normalized form, computed once and
/// shared across all of the review's mentioned features.
pub struct SentenceContext {
    raw: Vec<String>,
    normalized: Vec<String>,
}

impl SentenceContext {
    pub fn build(text: &str, pipeline: &TextPipeline) -> Self {
        let raw = pipeline.splitter.split(text);
        let normalized = raw
            .iter()
            .map(|sentence| pipeline.normalizer.normalize(sentence))
            .collect();
        Self { raw, normalized }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Continuous sentiment score for one mentioned feature of one review.
///
/// Per sentence, polarity-tagged sub-topics are scanned in rule order and
/// the first match wins (+1.0 / -1.0). Only when none match, the neutral
/// sub-topics are scanned and the first match hands the original sentence
/// to the generic scorer. The review/feature score is the mean of all
/// non-zero sentence samples; no samples yield 0.0 — this covers mentions
/// that only exist at whole-text level because tokenization split a phrase
/// across sentences.
pub fn score_feature(
    sentences: &SentenceContext,
    feature: &CompiledFeature,
    pipeline: &TextPipeline,
) -> f64 {
    let mut samples: Vec<f64> = Vec::new();

    for (raw, normalized) in sentences.raw.iter().zip(&sentences.normalized) {
        let mut polarity = 0.0f64;
        let mut strong_match = false;

        for sub_topic in &feature.sub_topics {
            match sub_topic.polarity {
                SubTopicPolarity::Neutral => {}
                SubTopicPolarity::Positive => {
                    if sub_topic.is_match(normalized) {
                        polarity = 1.0;
                        strong_match = true;
                        break;
                    }
                }
                SubTopicPolarity::Negative => {
                    if sub_topic.is_match(normalized) {
                        polarity = -1.0;
                        strong_match = true;
                        break;
                    }
                }
            }
        }

        if !strong_match {
            for sub_topic in &feature.sub_topics {
                if sub_topic.polarity != SubTopicPolarity::Neutral {
                    continue;
                }
                if sub_topic.is_match(normalized) {
                    polarity = pipeline.scorer.score(raw);
                    break;
                }
            }
        }

        if polarity != 0.0 {
            samples.push(polarity);
        }
    }

    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
