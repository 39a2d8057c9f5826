pub mod metal_ops;
pub mod tables;
pub mod unit_ops;

pub use tables::{SymbolTables, TablesSnapshot};
