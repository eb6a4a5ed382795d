//! Generic first-match-wins category classifier
//!
//! One implementation serves every classification dimension: user role,
//! gender, age group, usage, motivation, and product category. The outcome
//! depends only on rule order and text content.

use regex::Regex;
use tracing::warn;

use crate::rules::compile_keyword_pattern;
use crate::rules::ClassificationRuleSet;
use crate::Result;

/// A classification dimension with its patterns compiled
#[derive(Debug, Clone)]
pub struct CompiledClassifier {
    pub dimension: String,
    rules: Vec<(String, Option<Regex>)>,
    default_label: String,
}

impl CompiledClassifier {
    pub fn compile(ruleset: &ClassificationRuleSet) -> Result<Self> {
        if ruleset.rules.is_empty() {
            warn!(
                "No classification rules for '{}'; every row will get the default '{}'",
                ruleset.dimension, ruleset.default_label
            );
        }

        let mut rules = Vec::with_capacity(ruleset.rules.len());
        for rule in &ruleset.rules {
            rules.push((rule.label.clone(), compile_keyword_pattern(&rule.keywords)?));
        }

        Ok(Self {
            dimension: ruleset.dimension.clone(),
            rules,
            default_label: ruleset.default_label.clone(),
        })
    }

    /// Return the first category (in rule order) whose pattern matches,
    /// or the default label when none does. Total: always exactly one label.
    pub fn classify(&self, text: &str) -> &str {
        for (label, pattern) in &self.rules {
            if pattern.as_ref().is_some_and(|p| p.is_match(text)) {
                return label;
            }
        }
        &self.default_label
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CategoryRule;

    fn ruleset(rules: Vec<CategoryRule>, default: &str) -> ClassificationRuleSet {
        ClassificationRuleSet::new("Test", rules, default)
    }

    #[test]
    fn test_first_rule_order_match_wins() {
        // A matches "x" only; B matches "x" and "y". Text "y" must hit B.
        let classifier = CompiledClassifier::compile(&ruleset(
            vec![
                CategoryRule::new("A", vec!["x".to_string()]),
                CategoryRule::new("B", vec!["x".to_string(), "y".to_string()]),
            ],
            "default",
        ))
        .unwrap();

        assert_eq!(classifier.classify("y"), "B");
        assert_eq!(classifier.classify("x"), "A");
    }

    #[test]
    fn test_no_match_returns_default() {
        let classifier = CompiledClassifier::compile(&ruleset(
            vec![CategoryRule::new("A", vec!["x".to_string()])],
            "default",
        ))
        .unwrap();

        assert_eq!(classifier.classify("nothing relevant"), "default");
        assert_eq!(classifier.classify(""), "default");
    }

    #[test]
    fn test_whole_word_classification() {
        let classifier = CompiledClassifier::compile(&ruleset(
            vec![CategoryRule::new("artist", vec!["art".to_string()])],
            "other",
        ))
        .unwrap();

        assert_eq!(classifier.classify("I love art class"), "artist");
        // "art" inside "cart" must not match
        assert_eq!(classifier.classify("put it in the cart"), "other");
    }

    #[test]
    fn test_empty_rules_always_default() {
        let classifier = CompiledClassifier::compile(&ruleset(vec![], "未明确")).unwrap();
        assert_eq!(classifier.classify("anything"), "未明确");
    }

    #[test]
    fn test_case_insensitive_match() {
        let classifier = CompiledClassifier::compile(&ruleset(
            vec![CategoryRule::new("student", vec!["college".to_string()])],
            "other",
        ))
        .unwrap();
        assert_eq!(classifier.classify("My COLLEGE notes"), "student");
    }
}
