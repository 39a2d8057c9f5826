//! Roman numeral codec
//!
//! Units resolve to single letters; a unit sequence becomes a numeral string
//! by concatenation, and that string is decoded here. Subtractive pairs such
//! as `IV` only appear because two adjacent units happen to resolve to `I`
//! and `V`.
//!
//! Decoding is permissive: runs like `IIII` are accepted and sum to 4.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven base Roman numeral letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumeralLetter {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl NumeralLetter {
    /// All letters in ascending value order
    pub const ALL: [NumeralLetter; 7] = [
        NumeralLetter::I,
        NumeralLetter::V,
        NumeralLetter::X,
        NumeralLetter::L,
        NumeralLetter::C,
        NumeralLetter::D,
        NumeralLetter::M,
    ];

    /// Integer value of the letter
    pub fn value(self) -> u64 {
        match self {
            NumeralLetter::I => 1,
            NumeralLetter::V => 5,
            NumeralLetter::X => 10,
            NumeralLetter::L => 50,
            NumeralLetter::C => 100,
            NumeralLetter::D => 500,
            NumeralLetter::M => 1000,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NumeralLetter::I => 'I',
            NumeralLetter::V => 'V',
            NumeralLetter::X => 'X',
            NumeralLetter::L => 'L',
            NumeralLetter::C => 'C',
            NumeralLetter::D => 'D',
            NumeralLetter::M => 'M',
        }
    }
}

impl fmt::Display for NumeralLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a string is not exactly one numeral letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotANumeralLetter;

impl FromStr for NumeralLetter {
    type Err = NotANumeralLetter;

    /// Parses an exact, upper-case, single-letter string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(NumeralLetter::I),
            "V" => Ok(NumeralLetter::V),
            "X" => Ok(NumeralLetter::X),
            "L" => Ok(NumeralLetter::L),
            "C" => Ok(NumeralLetter::C),
            "D" => Ok(NumeralLetter::D),
            "M" => Ok(NumeralLetter::M),
            _ => Err(NotANumeralLetter),
        }
    }
}

/// Symbol table in descending value order, subtractive pairs included
const SYMBOLS: [(&str, u64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Decode a concatenated numeral string
///
/// Walks the symbol table from the highest value down, consuming the current
/// symbol for as long as it prefixes the remaining input. Returns 0 for an
/// empty string. Input that no symbol matches when it is reached is left
/// unconsumed.
///
/// # Example
///
/// ```
/// use merchant_core::numeral::decode;
///
/// assert_eq!(decode("MCMXLIV"), 1944);
/// assert_eq!(decode("IIII"), 4);
/// assert_eq!(decode(""), 0);
/// ```
pub fn decode(numerals: &str) -> u64 {
    let mut remaining = numerals;
    let mut total = 0;

    for (text, value) in SYMBOLS {
        while let Some(rest) = remaining.strip_prefix(text) {
            total += value;
            remaining = rest;
        }
    }

    total
}

/// A numeral string built by concatenating resolved unit letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumeralString(String);

impl NumeralString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, letter: NumeralLetter) {
        self.0.push(letter.as_char());
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded integer value of the concatenated letters
    pub fn value(&self) -> u64 {
        decode(&self.0)
    }
}

impl FromIterator<NumeralLetter> for NumeralString {
    fn from_iter<T: IntoIterator<Item = NumeralLetter>>(iter: T) -> Self {
        let mut numerals = NumeralString::new();
        for letter in iter {
            numerals.push(letter);
        }
        numerals
    }
}

impl fmt::Display for NumeralString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
