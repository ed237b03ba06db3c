use std::fmt;

/// Result type for activation operations
pub type Result<T> = std::result::Result<T, ActivationError>;

/// Main error type for building and evaluating activations
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// No activation is registered under this name
    UnknownActivation {
        name: String,
    },

    /// A registration key is already taken
    DuplicateKey {
        key: String,
    },

    /// A `+`-joined spec has an empty segment
    EmptySegment {
        spec: String,
        index: usize,
    },

    /// Invalid configuration value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Numerical computation errors
    NumericalError(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::UnknownActivation { name } => {
                write!(f, "Unknown activation '{}'", name)
            }
            ActivationError::DuplicateKey { key } => {
                write!(f, "Activation key '{}' is already registered", key)
            }
            ActivationError::EmptySegment { spec, index } => {
                write!(f, "Empty segment {} in activation spec '{}'", index, spec)
            }
            ActivationError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ActivationError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ActivationError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for ActivationError {}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ActivationError {
    fn from(err: serde_json::Error) -> Self {
        ActivationError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ActivationError {
    pub fn unknown_activation<S: Into<String>>(name: S) -> Self {
        ActivationError::UnknownActivation { name: name.into() }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ActivationError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
