use std::fmt;

/// Result type for deepq operations
pub type Result<T> = std::result::Result<T, DeepQError>;

/// Main error type for the deepq library
#[derive(Debug, Clone, PartialEq)]
pub enum DeepQError {
    /// Invalid hyperparameter or configuration value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Two networks (or a network and a vector) do not line up
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// An outcome was reported without a decision waiting for one
    NoPendingDecision,

    /// IO errors (config files)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for DeepQError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepQError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            DeepQError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            DeepQError::NoPendingDecision => {
                write!(f, "No decision is waiting for an outcome; call select_action first")
            }
            DeepQError::IoError(msg) => write!(f, "IO error: {}", msg),
            DeepQError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DeepQError {}

impl From<std::io::Error> for DeepQError {
    fn from(err: std::io::Error) -> Self {
        DeepQError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DeepQError {
    fn from(err: serde_json::Error) -> Self {
        DeepQError::SerializationError(err.to_string())
    }
}

impl DeepQError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        DeepQError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        DeepQError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
