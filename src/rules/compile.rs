//! Compiled keyword patterns
//!
//! Every keyword list becomes a single whole-word, case-insensitive
//! alternation. Patterns are compiled once per run and shared read-only by
//! the row-parallel passes.

use regex::Regex;
use regex::RegexBuilder;

use super::RuleSet;
use super::SubTopicPolarity;
use crate::Result;

/// Build `\b(kw1|kw2|...)\b` from a keyword list, case-insensitive.
///
/// Duplicates are removed (first occurrence wins) and each phrase is
/// escaped, so keyword text can never inject pattern syntax. An empty list
/// yields `None`: it matches nothing.
pub fn compile_keyword_pattern<S: AsRef<str>>(keywords: &[S]) -> Result<Option<Regex>> {
    let mut seen = std::collections::HashSet::new();
    let escaped: Vec<String> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|kw| !kw.trim().is_empty())
        .filter(|kw| seen.insert(kw.to_string()))
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(crate::ReviewLensError::Pattern)?;
    Ok(Some(regex))
}

/// A sub-topic with its pattern ready for matching
#[derive(Debug, Clone)]
pub struct CompiledSubTopic {
    pub name: String,
    pub polarity: SubTopicPolarity,
    /// `None` when the keyword list is empty (cleared by a profile override)
    pub pattern: Option<Regex>,
}

impl CompiledSubTopic {
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }
}

/// A feature with the union pattern plus per-sub-topic patterns
#[derive(Debug, Clone)]
pub struct CompiledFeature {
    pub name: String,
    /// Union of every keyword under the feature; drives mention detection
    pub union_pattern: Option<Regex>,
    pub sub_topics: Vec<CompiledSubTopic>,
}

impl CompiledFeature {
    pub fn mentions(&self, text: &str) -> bool {
        self.union_pattern.as_ref().is_some_and(|p| p.is_match(text))
    }
}

/// The whole ruleset in compiled form, feature order preserved
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    pub features: Vec<CompiledFeature>,
}

impl CompiledRuleSet {
    pub fn compile(ruleset: &RuleSet) -> Result<Self> {
        let mut features = Vec::with_capacity(ruleset.features.len());
        for feature in &ruleset.features {
            let union_pattern = compile_keyword_pattern(&feature.all_keywords())?;
            let mut sub_topics = Vec::with_capacity(feature.sub_topics.len());
            for sub_topic in &feature.sub_topics {
                sub_topics.push(CompiledSubTopic {
                    name: sub_topic.name.clone(),
                    polarity: sub_topic.polarity(),
                    pattern: compile_keyword_pattern(&sub_topic.keywords)?,
                });
            }
            features.push(CompiledFeature {
                name: feature.name.clone(),
                union_pattern,
                sub_topics,
            });
        }
        Ok(Self { features })
    }

    pub fn feature(&self, name: &str) -> Option<&CompiledFeature> {
        self.features.iter().find(|f| f.name == name)
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Feature;
    use crate::rules::SubTopic;

    #[test]
    fn test_whole_word_matching() {
        let pattern = compile_keyword_pattern(&["ink"]).unwrap().unwrap();
        assert!(pattern.is_match("the ink flows"));
        assert!(pattern.is_match("Ink everywhere"));
        // "pinkish" must not satisfy a rule for "ink"
        assert!(!pattern.is_match("a pinkish hue"));
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = compile_keyword_pattern(&["smooth"]).unwrap().unwrap();
        assert!(pattern.is_match("SMOOTH writing"));
    }

    #[test]
    fn test_phrases_and_escaping() {
        let pattern = compile_keyword_pattern(&["easy to blend", "a+ quality"])
            .unwrap()
            .unwrap();
        assert!(pattern.is_match("so easy to blend colors"));
        // the plus is literal, not a quantifier
        assert!(pattern.is_match("真的 a+ quality"));
        assert!(!pattern.is_match("aa quality"));
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let pattern = compile_keyword_pattern::<&str>(&[]).unwrap();
        assert!(pattern.is_none());
    }

    #[test]
    fn test_compiled_feature_union() {
        let feature = Feature::new(
            "流畅性",
            vec![
                SubTopic::new("正面-书写流畅", vec!["smooth".to_string()]),
                SubTopic::new("负面-干涩", vec!["dry".to_string()]),
            ],
        );
        let compiled = CompiledRuleSet::compile(&RuleSet::new(vec![feature])).unwrap();
        let feature = &compiled.features[0];
        assert!(feature.mentions("writes smooth"));
        assert!(feature.mentions("too dry"));
        assert!(!feature.mentions("bright colors"));
    }
}
