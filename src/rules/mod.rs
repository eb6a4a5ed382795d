//! Keyword rulesets for feature and category classification
//!
//! Rule order is significant everywhere: sub-topic order is the tie-break
//! order for sentence-level matching, and category order decides which label
//! wins. All collections are `Vec`-backed so iteration order is explicit and
//! never depends on map internals.

pub mod builder;
pub mod classification;
pub mod compile;
pub mod profiles;
pub mod taxonomy;

use serde::Deserialize;
use serde::Serialize;

pub use builder::build_ruleset;
pub use compile::compile_keyword_pattern;
pub use compile::CompiledFeature;
pub use compile::CompiledRuleSet;
pub use compile::CompiledSubTopic;

/// Sub-topic name prefix marking a positive keyword group
pub const POSITIVE_PREFIX: &str = "正面";

/// Sub-topic name prefix marking a negative keyword group
pub const NEGATIVE_PREFIX: &str = "负面";

/// Polarity carried by a sub-topic's name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubTopicPolarity {
    Positive,
    Negative,
    Neutral,
}

/// A named, polarity-tagged keyword group under a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTopic {
    pub name: String,
    pub keywords: Vec<String>,
}

impl SubTopic {
    pub fn new(name: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keywords,
        }
    }

    /// Polarity derived from the name prefix convention
    pub fn polarity(&self) -> SubTopicPolarity {
        if self.name.starts_with(POSITIVE_PREFIX) {
            SubTopicPolarity::Positive
        } else if self.name.starts_with(NEGATIVE_PREFIX) {
            SubTopicPolarity::Negative
        } else {
            SubTopicPolarity::Neutral
        }
    }
}

/// A product feature with its ordered sub-topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub sub_topics: Vec<SubTopic>,
}

impl Feature {
    pub fn new(name: impl Into<String>, sub_topics: Vec<SubTopic>) -> Self {
        Self {
            name: name.into(),
            sub_topics,
        }
    }

    /// Union of all keyword phrases across sub-topics, first occurrence wins
    pub fn all_keywords(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut keywords = Vec::new();
        for sub_topic in &self.sub_topics {
            for keyword in &sub_topic.keywords {
                if seen.insert(keyword.as_str()) {
                    keywords.push(keyword.as_str());
                }
            }
        }
        keywords
    }
}

/// The effective feature taxonomy for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub features: Vec<Feature>,
}

impl RuleSet {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name == name)
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name == name)
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One category with its keyword list, used by the generic classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            label: label.into(),
            keywords,
        }
    }
}

/// Ordered category rules for one classification dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRuleSet {
    /// Column name of the dimension (e.g. "User_Role")
    pub dimension: String,
    pub rules: Vec<CategoryRule>,
    /// Label assigned when no category matches
    pub default_label: String,
}

impl ClassificationRuleSet {
    pub fn new(
        dimension: impl Into<String>,
        rules: Vec<CategoryRule>,
        default_label: impl Into<String>,
    ) -> Self {
        Self {
            dimension: dimension.into(),
            rules,
            default_label: default_label.into(),
        }
    }
}

/// Named profile overrides available for ruleset building
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileLibrary {
    profiles: Vec<(String, RuleSet)>,
}

impl ProfileLibrary {
    pub fn new(profiles: Vec<(String, RuleSet)>) -> Self {
        Self { profiles }
    }

    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.profiles
            .iter()
            .find(|(profile_name, _)| profile_name == name)
            .map(|(_, ruleset)| ruleset)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(name, _)| name.as_str())
    }
}
