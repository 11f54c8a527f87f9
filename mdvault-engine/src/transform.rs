//! Transform trait definition
//!
//! A transform is a pure function from document to document, with a name it can be
//! selected by. Parsing and rendering stay outside: transforms only see the tree.

use crate::error::EngineError;
use crate::tree::Document;
use std::fmt;
use std::str::FromStr;

/// Trait for document transforms
///
/// # Examples
///
/// ```ignore
/// struct Uppercase;
///
/// impl Transform for Uppercase {
///     fn name(&self) -> &str {
///         "uppercase"
///     }
///
///     fn apply(&self, doc: &Document) -> Document {
///         // Build the new document
///         todo!()
///     }
/// }
/// ```
pub trait Transform: Send + Sync {
    /// The name this transform is selected by (e.g., "format", "archive")
    fn name(&self) -> &str;

    /// Optional description of this transform
    fn description(&self) -> &str {
        ""
    }

    /// Produce the transformed document
    fn apply(&self, doc: &Document) -> Document;
}

/// The operations a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Format,
    Archive,
    /// Archive first, then format the result
    FormatArchive,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Format => "format",
            Operation::Archive => "archive",
            Operation::FormatArchive => "format+archive",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "format" => Ok(Operation::Format),
            "archive" => Ok(Operation::Archive),
            "format+archive" => Ok(Operation::FormatArchive),
            other => Err(EngineError::TransformNotFound(other.to_string())),
        }
    }
}
