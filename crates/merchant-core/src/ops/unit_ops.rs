//! Unit assignment and numeral queries

use crate::errors::Result;
use crate::numeral::NumeralLetter;
use crate::ops::SymbolTables;

/// Assign a letter to a unit name; last write wins
pub fn assign_unit(tables: &mut SymbolTables, unit: String, letter: NumeralLetter) {
    tracing::debug!(unit = unit.as_str(), letter = %letter, "unit assigned");
    tables.insert_unit(unit, letter);
}

/// Decoded value of a unit sequence
///
/// # Errors
///
/// Returns `UnknownUnit` if any token has no assignment.
pub fn units_value<S: AsRef<str>>(tables: &SymbolTables, units: &[S]) -> Result<u64> {
    Ok(tables.resolve_units(units)?.value())
}

/// Answer a "how much" question
///
/// # Errors
///
/// Returns `UnknownUnit` if any token has no assignment.
pub fn query_numeral<S: AsRef<str>>(
    tables: &SymbolTables,
    phrase: &str,
    units: &[S],
) -> Result<String> {
    let value = units_value(tables, units)?;
    Ok(format!("{} is {}", phrase, value))
}
