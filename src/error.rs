use thiserror::Error;

/// Errors raised when the drawing core is driven outside its contract.
///
/// Both variants are caller mistakes rather than runtime failures: the app
/// shell logs them and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawingError {
    /// The operation is not valid in the current capture state
    #[error("Cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    /// A style value was rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for drawing operations
pub type DrawingResult<T> = Result<T, DrawingError>;

impl DrawingError {
    pub(crate) fn invalid_state(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidState { operation, state }
    }
}
