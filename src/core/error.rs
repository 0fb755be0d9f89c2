use thiserror::Error;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Client-side validation failures. Nothing is sent to the backend when one
/// of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Every line item was blank after filtering
    #[error("Add at least one item")]
    NoItems,

    /// A field the backend stores as NOT NULL is blank
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// Any other rejected user input (vendor name, upload type, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures reported by the backend or the transport to it.
///
/// `Display` renders the message alone so it can be shown to the user
/// unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Backend unreachable, timed out, or answered with a non-success status
    /// and no application error body
    #[error("{0}")]
    NetworkFailure(String),

    /// Backend answered with `{"error": "..."}`
    #[error("{0}")]
    ServerRejected(String),
}

impl SubmissionError {
    /// The user-facing message, exactly as received
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::NetworkFailure(msg) | SubmissionError::ServerRejected(msg) => msg,
        }
    }

    /// Convert a transport error into a network failure
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmissionError::NetworkFailure("Network error: request timed out".to_string())
        } else {
            SubmissionError::NetworkFailure(format!("Network error: {}", err))
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation errors for user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend errors, surfaced verbatim
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system errors (reading drafts and uploads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::InvalidInput(msg.into()))
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// True when the error came from the backend or the network
    pub fn is_submission(&self) -> bool {
        matches!(self, AppError::Submission(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Submission(SubmissionError::from_transport(err))
    }
}
