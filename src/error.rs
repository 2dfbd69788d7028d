use thiserror::Error;

/// Error types for the grievance analysis engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrievanceError {
    // Input validation errors
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GrievanceError {
    /// Create an input validation error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "validation",
            Self::Configuration { .. } => "configuration",
        }
    }
}

/// Result type alias for the grievance engine
pub type GrievanceResult<T> = std::result::Result<T, GrievanceError>;
