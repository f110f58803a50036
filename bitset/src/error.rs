//! Failures reported through the C boundary

use bitset_core::BitSetError;
use std::any::Any;

/// Errors that can occur inside a boundary call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The engine rejected the operation
    Engine(BitSetError),
    /// A null handle was passed where a bitset was expected
    NullHandle,
    /// A C string argument was null or not valid UTF-8
    InvalidString,
    /// The call panicked; carries the panic message
    Panic(String),
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Engine(err) => write!(f, "{err}"),
            CallError::NullHandle => write!(f, "Null bitset handle"),
            CallError::InvalidString => write!(f, "Invalid C string argument"),
            CallError::Panic(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitSetError> for CallError {
    fn from(err: BitSetError) -> Self {
        CallError::Engine(err)
    }
}

impl CallError {
    /// Build from a payload caught by `catch_unwind`
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let msg = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        CallError::Panic(msg)
    }
}

/// Result type for boundary calls
pub type CallResult<T> = std::result::Result<T, CallError>;
