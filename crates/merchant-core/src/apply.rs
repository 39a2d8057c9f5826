//! Functional-boundary apply function
//!
//! `apply()` is the single entry point that executes a classified `Command`
//! against the symbol tables.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: an assignment either commits its one table write or
//!   fails before touching the tables
//! - **No panics**: invalid input returns typed errors
//! - **Read-only questions**: queries never mutate state; debug builds
//!   compare a snapshot taken before and after each query
//!
//! ## Example
//!
//! ```
//! use merchant_core::{apply, Command, SymbolTables};
//!
//! let mut tables = SymbolTables::new();
//! apply(&mut tables, Command::parse("glob is I").unwrap()).unwrap();
//!
//! let answer = apply(&mut tables, Command::parse("how much is glob glob?").unwrap()).unwrap();
//! assert_eq!(answer.as_deref(), Some("glob glob is 2"));
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{metal_ops, unit_ops, SymbolTables};

/// Apply a command to the symbol tables
///
/// # Returns
///
/// * `Ok(None)` - an instruction was accepted
/// * `Ok(Some(answer))` - a question was answered
///
/// # Errors
///
/// Returns `UnknownUnit` or `UnknownMetal` when a referenced symbol has no
/// prior definition. The tables are unchanged on error.
pub fn apply(tables: &mut SymbolTables, cmd: Command) -> Result<Option<String>> {
    let before = (cfg!(debug_assertions) && !cmd.is_mutation()).then(|| tables.snapshot());

    let result = execute(tables, cmd);

    if let Some(before) = before {
        debug_assert_eq!(before, tables.snapshot(), "query changed the symbol tables");
    }

    result
}

fn execute(tables: &mut SymbolTables, cmd: Command) -> Result<Option<String>> {
    match cmd {
        Command::AssignUnit { unit, letter } => {
            unit_ops::assign_unit(tables, unit, letter);
            Ok(None)
        }

        Command::AssignMetal {
            units,
            metal,
            credits,
        } => {
            metal_ops::assign_metal(tables, &units, metal, credits)?;
            Ok(None)
        }

        Command::QueryNumeral { phrase, units } => {
            unit_ops::query_numeral(tables, &phrase, &units).map(Some)
        }

        Command::QueryCredits {
            phrase,
            units,
            metal,
        } => metal_ops::query_credits(tables, &phrase, &units, &metal).map(Some),
    }
}
