//! Parameter error types

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name too long or otherwise malformed
    InvalidName,
    /// No parameter registered under this name
    UnknownParameter,
    /// Store is full
    StoreFull,
    /// Read-only parameter cannot be modified
    ReadOnly,
    /// Value type does not match the registered type
    TypeMismatch,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidName => write!(f, "invalid parameter name"),
            ParameterError::UnknownParameter => write!(f, "unknown parameter"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
            ParameterError::ReadOnly => write!(f, "parameter is read-only"),
            ParameterError::TypeMismatch => write!(f, "parameter type mismatch"),
        }
    }
}
