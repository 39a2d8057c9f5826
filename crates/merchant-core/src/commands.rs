//! Command types for the four interpreter operations
//!
//! A raw line is classified into exactly one `Command` before anything is
//! executed. Branches are tried in a fixed order and the first match wins:
//! unit assignment before metal valuation, "how much" before "how many".

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{MerchantError, Result};
use crate::numeral::NumeralLetter;
use crate::sentence::{unit_tokens, MeasuredMetal, ParsedSentence, SentenceKind};

const HOW_MUCH: &str = "how much";
const HOW_MANY: &str = "how many";

fn credits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^([0-9]+) credits$").expect("credits pattern is a valid regex")
    })
}

/// Command enum representing every operation a line can request
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Associate a unit name with one numeral letter
    AssignUnit { unit: String, letter: NumeralLetter },

    /// Derive a metal's credit ratio from a measured amount
    AssignMetal {
        units: Vec<String>,
        metal: String,
        credits: f64,
    },

    /// "how much is <units>?"
    QueryNumeral { phrase: String, units: Vec<String> },

    /// "how many Credits is <units> <metal>?"
    QueryCredits {
        phrase: String,
        units: Vec<String>,
        metal: String,
    },
}

impl Command {
    /// Classify and validate one line
    ///
    /// # Errors
    ///
    /// Returns `Grammar` when the line has no `" is "`,
    /// `UnrecognizedInstruction` when an instruction matches neither
    /// assignment form, and `UnanswerableQuestion` when a question asks
    /// neither "how much" nor "how many".
    pub fn parse(line: &str) -> Result<Self> {
        let sentence = ParsedSentence::parse(line)?;
        match sentence.kind {
            SentenceKind::Instruction => Self::parse_instruction(&sentence),
            SentenceKind::Question => Self::parse_question(&sentence, line),
        }
    }

    fn parse_instruction(sentence: &ParsedSentence<'_>) -> Result<Self> {
        if let Ok(letter) = sentence.right.parse::<NumeralLetter>() {
            return Ok(Command::AssignUnit {
                unit: sentence.left.to_string(),
                letter,
            });
        }

        if let Some(captures) = credits_pattern().captures(sentence.right) {
            let credits = captures[1]
                .parse::<f64>()
                .map_err(|_| MerchantError::UnrecognizedInstruction {
                    right: sentence.right.to_string(),
                })?;
            let measured = MeasuredMetal::split(sentence.left);
            return Ok(Command::AssignMetal {
                units: owned(&measured.units),
                metal: measured.metal,
                credits,
            });
        }

        Err(MerchantError::UnrecognizedInstruction {
            right: sentence.right.to_string(),
        })
    }

    fn parse_question(sentence: &ParsedSentence<'_>, line: &str) -> Result<Self> {
        if sentence.left.contains(HOW_MUCH) {
            return Ok(Command::QueryNumeral {
                phrase: sentence.right.to_string(),
                units: owned(&unit_tokens(sentence.right)),
            });
        }

        if sentence.left.contains(HOW_MANY) {
            let measured = MeasuredMetal::split(sentence.right);
            return Ok(Command::QueryCredits {
                phrase: sentence.right.to_string(),
                units: owned(&measured.units),
                metal: measured.metal,
            });
        }

        Err(MerchantError::UnanswerableQuestion {
            line: line.to_string(),
        })
    }

    /// Stable operation name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Command::AssignUnit { .. } => "assign_unit",
            Command::AssignMetal { .. } => "assign_metal",
            Command::QueryNumeral { .. } => "query_numeral",
            Command::QueryCredits { .. } => "query_credits",
        }
    }

    /// Whether executing the command changes the symbol tables
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AssignUnit { .. } | Command::AssignMetal { .. }
        )
    }
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
