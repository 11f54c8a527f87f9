//! Error types for engine operations
//!
//! Parsing never fails: malformed input is recovered locally (see
//! [`crate::formats::markdown::parser::Recovery`]). The only errors left are about
//! selecting an operation that does not exist.

use std::fmt;

/// Errors that can occur when selecting or running a transform
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Transform not found in registry
    TransformNotFound(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::TransformNotFound(name) => write!(f, "Transform '{name}' not found"),
        }
    }
}

impl std::error::Error for EngineError {}
