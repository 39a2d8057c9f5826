//! Structured logging facility for the interpreter
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Session correlation through a `session_id` field
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use merchant_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, session, ...)` - Log operation start
//! - `log_op_end!(op, session, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, session, &err, duration_ms = ...)` - Log a rejected line

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
