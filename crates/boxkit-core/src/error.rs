//! Error types for box outline generation.
//!
//! Parameter validation failures are the caller's problem; a geometry error
//! means a generated outline failed an internal consistency check and
//! indicates a bug, not bad input.

use thiserror::Error;

/// Errors that can occur while generating box panel outlines.
#[derive(Error, Debug)]
pub enum BoxError {
    /// Invalid parameters were supplied to the generator.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A generated outline failed a consistency check.
    #[error("Geometry error: {0}")]
    Geometry(String),
}

/// Errors related to box parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for generation operations.
pub type BoxResult<T> = Result<T, BoxError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_error_display() {
        let err = BoxError::Geometry("Front outline does not close".to_string());
        assert_eq!(err.to_string(), "Geometry error: Front outline does not close");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "kerf".to_string(),
            value: -0.5,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'kerf' out of range: -0.5 (valid: 0..3)"
        );

        let err = ParameterError::InvalidValue {
            name: "finger_width".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'finger_width': must be positive"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidValue {
            name: "width".to_string(),
            reason: "must be positive".to_string(),
        };
        let box_err: BoxError = param_err.into();
        assert!(matches!(box_err, BoxError::Parameter(_)));
    }
}
