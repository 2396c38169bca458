//! Application error types with stable error codes.

use thiserror::Error;

/// Application-level errors for coauthor-graph.
///
/// Unknown selections and dangling edge references are not errors; they
/// degrade to empty results. Only malformed input fails.
#[derive(Error, Debug)]
pub enum AppError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Input format errors
    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid GraphML: {message}")]
    GraphMl { message: String },

    // Domain errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid layout parameter '{parameter}': {reason}")]
    InvalidLayout {
        parameter: &'static str,
        reason: String,
    },

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::GraphMl { .. } => "INVALID_GRAPHML",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidLayout { .. } => "INVALID_LAYOUT",
            AppError::NodeNotFound(_) => "NODE_NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub(crate) fn graphml(err: impl std::fmt::Display) -> Self {
        AppError::GraphMl {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Validation("x".into()).code(), "VALIDATION_ERROR");
        assert_eq!(AppError::NodeNotFound("x".into()).code(), "NODE_NOT_FOUND");
        assert_eq!(AppError::graphml("bad").code(), "INVALID_GRAPHML");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidLayout {
            parameter: "width",
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid layout parameter 'width': must be positive"
        );
    }
}
