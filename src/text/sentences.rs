//! Rule-based sentence splitter
//!
//! Splits on terminal punctuation followed by whitespace (or end of text)
//! and on line breaks. Decimal ratings like "4.5 stars" are kept intact
//! because the period is not followed by whitespace.

use super::SentenceSplitter;

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSentenceSplitter;

impl SentenceSplitter for RuleSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\n' {
                push_sentence(&mut sentences, &mut current);
                continue;
            }
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                // Consume any run of terminal punctuation ("!?", "...")
                while let Some(&next) = chars.peek() {
                    if matches!(next, '.' | '!' | '?') {
                        current.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let at_boundary = chars.peek().is_none_or(|next| next.is_whitespace());
                if at_boundary {
                    push_sentence(&mut sentences, &mut current);
                }
            }
        }
        push_sentence(&mut sentences, &mut current);

        sentences
    }
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
