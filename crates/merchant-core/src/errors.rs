use merchant_core_types::SessionId;
use thiserror::Error;

/// Result type alias using MerchantError
pub type Result<T> = std::result::Result<T, MerchantError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the interpreter can report falls into exactly one kind.
/// Each kind maps to a stable error code used by the CLI, by tests and by
/// structured log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Sentence structure
    /// The line has no `" is "` separator
    Grammar,
    /// An instruction is neither a unit assignment nor a metal valuation
    UnrecognizedInstruction,
    /// A question asks neither "how much" nor "how many"
    UnanswerableQuestion,

    // Symbol lookup
    UnknownUnit,
    UnknownMetal,

    // Integration
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Grammar => "ERR_GRAMMAR",
            ExErrorKind::UnrecognizedInstruction => "ERR_UNRECOGNIZED_INSTRUCTION",
            ExErrorKind::UnanswerableQuestion => "ERR_UNANSWERABLE_QUESTION",
            ExErrorKind::UnknownUnit => "ERR_UNKNOWN_UNIT",
            ExErrorKind::UnknownMetal => "ERR_UNKNOWN_METAL",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// Whether this kind describes malformed user input rather than an
    /// environment failure
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ExErrorKind::Io | ExErrorKind::Serialization)
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context was known at the point
/// the error crossed a boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    token: Option<String>,
    line: Option<String>,
    session_id: Option<SessionId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            token: None,
            line: None,
            session_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending unit or metal token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add the input line being processed
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Add session context
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the input line, if any
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// Get the session context, if any
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(token) = &self.token {
            write!(f, " (token: {})", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " (line: {:?})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for interpreter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MerchantError {
    /// The line lacks the `" is "` separator
    #[error("Invalid input: missing the keyword \"is\" in the sentence: {line:?}")]
    Grammar { line: String },

    /// Right side is neither a numeral letter nor "<N> credits"
    #[error("Invalid input: expected a Roman letter or \"<N> credits\", got {right:?}")]
    UnrecognizedInstruction { right: String },

    /// A unit token has no prior assignment
    #[error("Invalid input: unknown unit is found ({unit})")]
    UnknownUnit { unit: String },

    /// A credit query references a metal with no valuation
    #[error("Invalid input: no value has been assigned to metal {metal:?}")]
    UnknownMetal { metal: String },

    /// A question asks neither "how much" nor "how many"
    #[error("Invalid input: cannot answer question {line:?}")]
    UnanswerableQuestion { line: String },

    /// Reading from a line source or writing an answer failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Table snapshot encoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl MerchantError {
    /// Classification of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            MerchantError::Grammar { .. } => ExErrorKind::Grammar,
            MerchantError::UnrecognizedInstruction { .. } => ExErrorKind::UnrecognizedInstruction,
            MerchantError::UnknownUnit { .. } => ExErrorKind::UnknownUnit,
            MerchantError::UnknownMetal { .. } => ExErrorKind::UnknownMetal,
            MerchantError::UnanswerableQuestion { .. } => ExErrorKind::UnanswerableQuestion,
            MerchantError::Io { .. } => ExErrorKind::Io,
            MerchantError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

/// Conversion from MerchantError to ExError
impl From<MerchantError> for ExError {
    fn from(err: MerchantError) -> Self {
        let message = err.to_string();
        match err {
            MerchantError::Grammar { line } => ExError::new(ExErrorKind::Grammar)
                .with_op("split_sentence")
                .with_line(line)
                .with_message(message),

            MerchantError::UnrecognizedInstruction { right } => {
                ExError::new(ExErrorKind::UnrecognizedInstruction)
                    .with_op("classify_instruction")
                    .with_token(right)
                    .with_message(message)
            }

            MerchantError::UnknownUnit { unit } => ExError::new(ExErrorKind::UnknownUnit)
                .with_op("resolve_units")
                .with_token(unit)
                .with_message(message),

            MerchantError::UnknownMetal { metal } => ExError::new(ExErrorKind::UnknownMetal)
                .with_op("resolve_metal")
                .with_token(metal)
                .with_message(message),

            MerchantError::UnanswerableQuestion { line } => {
                ExError::new(ExErrorKind::UnanswerableQuestion)
                    .with_op("classify_question")
                    .with_line(line)
                    .with_message(message)
            }

            MerchantError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            MerchantError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for MerchantError {
    fn from(err: std::io::Error) -> Self {
        MerchantError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MerchantError {
    fn from(err: serde_json::Error) -> Self {
        MerchantError::Serialization {
            message: err.to_string(),
        }
    }
}
