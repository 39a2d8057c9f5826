use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::{MerchantError, Result};
use crate::numeral::{NumeralLetter, NumeralString};

/// In-memory symbol tables for one interpreter session
///
/// Not thread-safe (no Arc/RwLock); hosts that share a session across
/// threads must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    /// Unit name (case-sensitive) to numeral letter
    pub(crate) units: HashMap<String, NumeralLetter>,
    /// Lower-cased metal name to credits per unit
    pub(crate) metals: HashMap<String, f64>,
}

impl SymbolTables {
    /// Create new empty tables
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            metals: HashMap::new(),
        }
    }

    /// Look up the letter assigned to a unit
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if the unit was never assigned.
    pub fn unit(&self, unit: &str) -> Result<NumeralLetter> {
        self.units
            .get(unit)
            .copied()
            .ok_or_else(|| MerchantError::UnknownUnit {
                unit: unit.to_string(),
            })
    }

    /// Resolve a unit sequence into its numeral string, preserving order
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` for the first token with no assignment.
    pub fn resolve_units<S: AsRef<str>>(&self, units: &[S]) -> Result<NumeralString> {
        units.iter().map(|unit| self.unit(unit.as_ref())).collect()
    }

    /// Look up the credit ratio of a metal (name already lower-cased)
    ///
    /// # Errors
    ///
    /// Returns `UnknownMetal` if the metal was never valued.
    pub fn metal_ratio(&self, metal: &str) -> Result<f64> {
        self.metals
            .get(metal)
            .copied()
            .ok_or_else(|| MerchantError::UnknownMetal {
                metal: metal.to_string(),
            })
    }

    /// Insert or overwrite a unit assignment
    pub fn insert_unit(&mut self, unit: String, letter: NumeralLetter) {
        self.units.insert(unit, letter);
    }

    /// Insert or overwrite a metal ratio
    pub fn insert_metal(&mut self, metal: String, ratio: f64) {
        self.metals.insert(metal, ratio);
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn metal_count(&self) -> usize {
        self.metals.len()
    }

    /// Deterministic, serializable copy of both tables
    pub fn snapshot(&self) -> TablesSnapshot {
        TablesSnapshot {
            units: self.units.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            metals: self.metals.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }
}

/// Name-sorted view of the symbol tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablesSnapshot {
    pub units: BTreeMap<String, NumeralLetter>,
    pub metals: BTreeMap<String, f64>,
}

impl TablesSnapshot {
    /// Pretty-printed JSON rendering
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
