//! Canonical logging macros
//!
//! Every boundary event belongs to one interpreter session, so each macro
//! takes the `SessionId` right after the operation name and records it as
//! the `session_id` field. Extra fields follow the fixed ones.

/// Log the start of an operation within a session
///
/// # Example
///
/// ```
/// # use merchant_core::log_op_start;
/// # use merchant_core::types::SessionId;
/// let session = SessionId::new();
/// log_op_start!("process_command", &session);
/// log_op_start!("process_input", &session, source = "stdin");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr, $session:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            session_id = $session.as_str(),
        );
    };
    ($op:expr, $session:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            session_id = $session.as_str(),
            $($field)*
        );
    };
}

/// Log the successful end of an operation within a session
///
/// # Example
///
/// ```
/// # use merchant_core::log_op_end;
/// # use merchant_core::types::SessionId;
/// let session = SessionId::new();
/// log_op_end!("process_command", &session, duration_ms = 3, answered = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $session:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            session_id = $session.as_str(),
            duration_ms = $duration,
        );
    };
    ($op:expr, $session:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            session_id = $session.as_str(),
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a rejected line within a session
///
/// Takes a `&MerchantError`; its kind and stable code become the `err_kind`
/// and `err_code` fields and its message the `error` field. Rejections are
/// expected input, so the event is a warning.
///
/// # Example
///
/// ```
/// # use merchant_core::log_op_error;
/// # use merchant_core::errors::MerchantError;
/// # use merchant_core::types::SessionId;
/// let session = SessionId::new();
/// let err = MerchantError::UnknownUnit { unit: "blarg".to_string() };
/// log_op_error!("process_command", &session, &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $session:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::MerchantError = $err;
        let kind = err.kind();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            session_id = $session.as_str(),
            duration_ms = $duration,
            err_kind = ?kind,
            err_code = kind.code(),
            error = %err,
        );
    }};
}
