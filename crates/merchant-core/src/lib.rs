//! Merchant Core - interpreter for intergalactic unit and metal trading notes
//!
//! This crate provides:
//! - A permissive Roman numeral codec
//! - Sentence classification and the four interpreter commands
//! - Per-session symbol tables for unit letters and metal ratios
//! - Line sources and the batch processing loop
//! - Canonical error and logging facilities

pub mod apply;
pub mod commands;
pub mod errors;
pub mod input;
pub mod interpreter;
pub mod logging_facility;
pub mod numeral;
pub mod ops;
pub mod sentence;

pub use merchant_core_types as types;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, MerchantError, Result};
pub use input::{LineSource, MemoryLineSource, ReaderLineSource};
pub use interpreter::{CommandInterpreter, RunSummary, FALLBACK_MESSAGE};
pub use numeral::{NumeralLetter, NumeralString};
pub use ops::{SymbolTables, TablesSnapshot};
