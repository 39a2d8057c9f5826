//! Metal valuation and credit queries

use crate::errors::Result;
use crate::ops::unit_ops::units_value;
use crate::ops::SymbolTables;

/// Credits per unit; a zero-valued measure yields 0 instead of dividing
pub fn ratio(credits: f64, units: u64) -> f64 {
    if units > 0 {
        credits / units as f64
    } else {
        0.0
    }
}

/// Record a metal's ratio from "<units> <metal> is <credits> Credits"
///
/// All units are resolved before the table is touched.
///
/// # Errors
///
/// Returns `UnknownUnit` if any token has no assignment; the metal table is
/// left unchanged in that case.
pub fn assign_metal<S: AsRef<str>>(
    tables: &mut SymbolTables,
    units: &[S],
    metal: String,
    credits: f64,
) -> Result<f64> {
    let measured = units_value(tables, units)?;
    let value = ratio(credits, measured);
    tracing::debug!(metal = metal.as_str(), measured, ratio = value, "metal valued");
    tables.insert_metal(metal, value);
    Ok(value)
}

/// Answer a "how many Credits" question
///
/// The metal is looked up before the units are resolved.
///
/// # Errors
///
/// Returns `UnknownMetal` if the metal has no ratio, otherwise
/// `UnknownUnit` if any token has no assignment.
pub fn query_credits<S: AsRef<str>>(
    tables: &SymbolTables,
    phrase: &str,
    units: &[S],
    metal: &str,
) -> Result<String> {
    let per_unit = tables.metal_ratio(metal)?;
    let measured = units_value(tables, units)?;
    Ok(format!(
        "{} is {} Credits",
        phrase,
        format_credits(measured as f64 * per_unit)
    ))
}

/// Significant digits kept when a credit amount has a fraction
const CREDIT_PRECISION: i32 = 14;

/// Render a credit amount: integral values without a fraction, others with
/// 14 significant digits and no trailing zeros
pub fn format_credits(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        return format!("{}", amount as i64);
    }
    let magnitude = amount.abs().log10().floor() as i32;
    let decimals = (CREDIT_PRECISION - 1 - magnitude).max(0) as usize;
    let fixed = format!("{:.*}", decimals, amount);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
