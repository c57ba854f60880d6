use thiserror::Error;

/// Error type for detection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Malformed caller input, rejected before any detection runs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The signature engine could not produce any verdict for the buffer.
    #[error("Binary classification failed: {0}")]
    Classification(String),

    /// No charset profile admits the input.
    #[error("No charset candidate matched the input")]
    NoCandidate,

    /// Shared reference data failed to build.
    #[error("Failed to load reference data: {0}")]
    Load(#[from] LoadError),
}

/// A reference table (charset profiles or signature rules) could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{table}: {message}")]
pub struct LoadError {
    table: String,
    message: String,
}

impl LoadError {
    /// Create a new load error for the named table.
    pub fn new(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Name of the table that failed to build.
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Result type alias for detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;
