use thiserror::Error;

/// Custom error type for the ScalarGrad framework.
///
/// Every error is raised at the point where the offending node would have been
/// constructed. The backward pass itself has no error paths.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Unsupported operand kind for {operation}: expected a plain real number, got {found}")]
    UnsupportedOperandKind {
        operation: String,
        found: String,
    },

    #[error("Domain error in {operation}: input {value} is outside the domain of the function")]
    DomainError { operation: String, value: f64 },

    #[error("Input size mismatch: expected {expected} values, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Operation {operation} requires at least one input node")]
    EmptyInput { operation: String },

    #[error("Target class {target} is out of bounds for {num_classes} classes")]
    TargetOutOfBounds { target: usize, num_classes: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
