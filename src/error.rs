use std::fmt;

/// Result type for podracer operations
pub type Result<T> = std::result::Result<T, PodError>;

/// Main error type for the podracer library
#[derive(Debug, Clone, PartialEq)]
pub enum PodError {
    /// Vector or matrix dimensions disagree
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    /// More distinct samples requested than the buffer holds
    InsufficientSamples {
        requested: usize,
        available: usize,
    },

    /// Layer tag with no matching layer variant
    UnknownLayer(String),

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Training error
    Training(String),

    /// Configuration document could not be read or parsed
    Config(String),
}

impl fmt::Display for PodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, actual)
            }
            PodError::InsufficientSamples { requested, available } => {
                write!(
                    f,
                    "Insufficient samples: requested {} distinct experiences, buffer holds {}",
                    requested, available
                )
            }
            PodError::UnknownLayer(tag) => write!(f, "Unknown layer type '{}'", tag),
            PodError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            PodError::Training(msg) => write!(f, "Training error: {}", msg),
            PodError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PodError {}

impl From<std::io::Error> for PodError {
    fn from(err: std::io::Error) -> Self {
        PodError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PodError {
    fn from(err: serde_json::Error) -> Self {
        PodError::Config(err.to_string())
    }
}

// Helper functions for common error patterns
impl PodError {
    pub fn shape_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        PodError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        PodError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
