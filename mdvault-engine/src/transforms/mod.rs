//! Tree-to-tree transforms
//!
//! Each transform takes a document and returns a new one; inputs are never modified.
//! The [`Transform`](crate::transform::Transform) implementations here are what the
//! registry exposes by name.

pub mod archive;
pub mod pretty;

pub use archive::{archive_document, is_fully_complete, ArchiveReport, ArchiveRules};
pub use pretty::format_document;

use crate::transform::Transform;
use crate::tree::Document;

/// Pretty-print normalization
#[derive(Debug, Clone, Default)]
pub struct FormatTransform;

impl Transform for FormatTransform {
    fn name(&self) -> &str {
        "format"
    }

    fn description(&self) -> &str {
        "Normalize spacing, headings, code spans and tables"
    }

    fn apply(&self, doc: &Document) -> Document {
        format_document(doc)
    }
}

/// Checklist archiving
#[derive(Debug, Clone, Default)]
pub struct ArchiveTransform {
    rules: ArchiveRules,
}

impl ArchiveTransform {
    pub fn new(rules: ArchiveRules) -> Self {
        Self { rules }
    }
}

impl Transform for ArchiveTransform {
    fn name(&self) -> &str {
        "archive"
    }

    fn description(&self) -> &str {
        "Move fully completed checklist items under the archive heading"
    }

    fn apply(&self, doc: &Document) -> Document {
        archive_document(doc, &self.rules).document
    }
}

/// Archive, then pretty-print the result
#[derive(Debug, Clone, Default)]
pub struct FormatArchiveTransform {
    rules: ArchiveRules,
}

impl FormatArchiveTransform {
    pub fn new(rules: ArchiveRules) -> Self {
        Self { rules }
    }
}

impl Transform for FormatArchiveTransform {
    fn name(&self) -> &str {
        "format+archive"
    }

    fn description(&self) -> &str {
        "Archive completed items, then format"
    }

    fn apply(&self, doc: &Document) -> Document {
        format_document(&archive_document(doc, &self.rules).document)
    }
}
