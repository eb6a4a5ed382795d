//! Default text normalizer
//!
//! Mirrors the preprocessing contract the engine expects: lower-case,
//! letters-only, whitespace tokenization, stop-word removal, short-token
//! removal, and a light noun-plural lemmatizer. No linguistic correctness
//! is claimed beyond that.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::TextNormalizer;

// English stop-word list loaded at compile time
const STOPWORDS: &str = include_str!("../../data/stopwords.txt");

lazy_static! {
    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
}

/// Tokens this short carry no signal for keyword matching
const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNormalizer {}

impl DefaultNormalizer {
    pub fn new() -> Self {
        Self {}
    }

    /// Strip a regular plural suffix. Only the noun-plural case is handled;
    /// verb forms pass through unchanged so taxonomy phrases keep matching.
    fn lemmatize(token: &str) -> String {
        let len = token.len();
        if len > 4 && token.ends_with("sses") {
            return token[..len - 2].to_string();
        }
        if len > 4 && token.ends_with("ies") {
            return format!("{}y", &token[..len - 3]);
        }
        if len > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            return token[..len - 1].to_string();
        }
        token.to_string()
    }
}

impl TextNormalizer for DefaultNormalizer {
    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let letters_only: String = lowered
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect();

        letters_only
            .split_whitespace()
            .filter(|token| token.len() >= MIN_TOKEN_LEN && !STOPWORD_SET.contains(token))
            .map(Self::lemmatize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalizer = DefaultNormalizer::new();
        assert_eq!(
            normalizer.normalize("The INK flows Smoothly!!!"),
            "ink flow smoothly"
        );
    }

    #[test]
    fn test_removes_stopwords_and_short_tokens() {
        let normalizer = DefaultNormalizer::new();
        // "it", "is", "a", "to" are stop words; "ok" is too short
        assert_eq!(
            normalizer.normalize("it is a joy to use, ok"),
            "joy use"
        );
    }

    #[test]
    fn test_plural_lemmatization() {
        let normalizer = DefaultNormalizer::new();
        assert_eq!(normalizer.normalize("colors"), "color");
        assert_eq!(normalizer.normalize("supplies"), "supply");
        // -ss and -us endings are not plurals
        assert_eq!(normalizer.normalize("glass bonus"), "glass bonus");
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        let normalizer = DefaultNormalizer::new();
        assert_eq!(normalizer.normalize("désign 123"), "sign");
    }

    #[test]
    fn test_deterministic() {
        let normalizer = DefaultNormalizer::new();
        let text = "Smooth writing, bright colors; highly recommended!";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }
}
