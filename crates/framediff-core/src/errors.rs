use thiserror::Error;

/// Result type alias using FdError
pub type Result<T> = std::result::Result<T, FdError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in FrameDiff. Each kind maps to a stable error code that can be used for
/// programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdErrorKind {
    // Model loading / validation
    /// Model bytes are not valid UTF-8 JSON, or `schema_version` is wrong
    InvalidModel,
    /// A required model field (e.g. `elements`, `classification`) is absent
    MissingField,
    /// Duplicate element identity within a single snapshot
    IdentityConflict,
    NotFound,

    // Diff
    /// The computed diff failed its internal round-trip sanity check
    DeterminismViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,

    // Internal
    Internal,
}

impl FdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FdErrorKind::InvalidModel => "ERR_INVALID_MODEL",
            FdErrorKind::MissingField => "ERR_MISSING_FIELD",
            FdErrorKind::IdentityConflict => "ERR_IDENTITY_CONFLICT",
            FdErrorKind::NotFound => "ERR_NOT_FOUND",
            FdErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            FdErrorKind::Io => "ERR_IO",
            FdErrorKind::Serialization => "ERR_SERIALIZATION",
            FdErrorKind::Persistence => "ERR_PERSISTENCE",
            FdErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            FdErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct FdError {
    kind: FdErrorKind,
    op: Option<String>,
    element_id: Option<String>,
    message: String,
    source: Option<Box<FdError>>,
}

impl FdError {
    /// Create a new error with the specified kind
    pub fn new(kind: FdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add element ID context
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: FdError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> FdErrorKind {
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

    /// Get the element ID context, if any
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&FdError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for FdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(element_id) = &self.element_id {
            write!(f, " (element_id: {})", element_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for FdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Typed domain faults raised by model construction and indexing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameDiffError {
    /// Two elements in one snapshot share the same persistent identity
    #[error("Duplicate element identity within snapshot: {element_id}")]
    DuplicateIdentity { element_id: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from FrameDiffError to FdError
///
/// Typed faults from the model layer are lifted into the canonical error
/// facility at the diff entry point.
impl From<FrameDiffError> for FdError {
    fn from(err: FrameDiffError) -> Self {
        match err {
            FrameDiffError::DuplicateIdentity { element_id } => {
                FdError::new(FdErrorKind::IdentityConflict)
                    .with_element_id(element_id)
                    .with_op("build_index")
                    .with_message("Duplicate element identity within snapshot")
            }

            FrameDiffError::Serialization { message } => {
                FdError::new(FdErrorKind::Serialization).with_message(message)
            }

            FrameDiffError::Internal { message } => {
                FdError::new(FdErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FrameDiffError
impl From<serde_json::Error> for FrameDiffError {
    fn from(err: serde_json::Error) -> Self {
        FrameDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
