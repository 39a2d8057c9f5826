//! Sentence classification and splitting
//!
//! Every line is either a question (it ends in `?`) or an instruction, and
//! both must have the shape `<left> is <right>`.

use crate::errors::{MerchantError, Result};

/// Separator between the two halves of every sentence
pub const SEPARATOR: &str = " is ";

/// Kind of sentence, decided by the final character of the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    Instruction,
    Question,
}

impl SentenceKind {
    pub fn classify(line: &str) -> Self {
        if line.ends_with('?') {
            SentenceKind::Question
        } else {
            SentenceKind::Instruction
        }
    }
}

/// One line split around its first `" is "`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSentence<'a> {
    pub kind: SentenceKind,
    /// Everything before the separator, whitespace trimmed
    pub left: &'a str,
    /// Everything after the separator, enclosing spaces and `?` trimmed
    pub right: &'a str,
}

impl<'a> ParsedSentence<'a> {
    /// Classify and split a line
    ///
    /// Only the first separator is a split point; later occurrences stay in
    /// the right half.
    ///
    /// # Errors
    ///
    /// Returns `Grammar` if the line contains no `" is "`.
    pub fn parse(line: &'a str) -> Result<Self> {
        let kind = SentenceKind::classify(line);
        let (left, right) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| MerchantError::Grammar {
                line: line.to_string(),
            })?;

        Ok(Self {
            kind,
            left: left.trim(),
            right: right.trim_matches(|c: char| c == ' ' || c == '?'),
        })
    }
}

/// A unit sequence followed by a metal name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredMetal<'a> {
    pub units: Vec<&'a str>,
    /// Lower-cased metal name; empty when the phrase had no tokens at all
    pub metal: String,
}

impl<'a> MeasuredMetal<'a> {
    /// Split on whitespace and take the last token as the metal
    pub fn split(phrase: &'a str) -> Self {
        let mut units = unit_tokens(phrase);
        let metal = units.pop().map(str::to_lowercase).unwrap_or_default();
        Self { units, metal }
    }
}

/// Whitespace-separated unit tokens of a phrase
pub fn unit_tokens(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}
