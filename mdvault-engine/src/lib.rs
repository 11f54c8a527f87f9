//! Structural markdown engine for note vaults
//!
//!     This crate parses a markdown document into a block tree, runs deterministic
//!     transforms over it (pretty-printing and checklist archiving) and renders it back to
//!     text that is stable under repeated application.
//!
//!     This is a pure lib: it never touches the filesystem, the environment or stdout.
//!     The vault walking, diffing and write-back live in mdvault-cli.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── transform.rs            # Transform trait, Operation selector
//!     ├── registry.rs             # TransformRegistry for discovery and selection
//!     ├── tree                    # Document, Block, ListItem, ...
//!     ├── common                  # Nesting, flattening, tables, inline code spans
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── lexer.rs        # Line classification
//!     │   │   ├── parser.rs       # Text → tree
//!     │   │   ├── serializer.rs   # Tree → text
//!     │   │   └── formatting_rules.rs
//!     │   └── treeviz             # Outline for inspection
//!     └── transforms
//!         ├── pretty.rs
//!         └── archive.rs
//!
//! Core Algorithms
//!
//!     Lists are the only nested structure markdown has, and it is expressed purely with
//!     indentation. Parsing rebuilds the nesting with an explicit stack over an arena of
//!     items (./common/nesting.rs); rendering walks it back out with a stack of sibling
//!     iterators (./common/flatten.rs). Neither recurses, so deep lists cannot exhaust the
//!     call stack.
//!
//!     Both transforms are pure functions from tree to tree. Archiving "moves" an item by
//!     building a new document without it and with a copy of it elsewhere; the input is
//!     never modified, so callers can diff before and after.
//!
//! Invariants
//!
//!     - `parse` is total: odd input degrades to `Raw` blocks, never to an error
//!     - `render(parse(render(d)))` reproduces `render(d)` for recognized blocks
//!     - `format` is idempotent on rendered text
//!     - `archive` never moves an item that has an unchecked descendant

pub mod common;
pub mod error;
pub mod formats;
pub mod registry;
pub mod transform;
pub mod transforms;
pub mod tree;

pub use error::EngineError;
pub use formats::markdown::{FormattingRules, ParseOutcome, Recovery};
pub use registry::TransformRegistry;
pub use transform::{Operation, Transform};
pub use transforms::{ArchiveReport, ArchiveRules};
pub use tree::{
    Alignment, Block, Checkbox, CodeFence, Document, Heading, List, ListItem, ListStyle,
    Paragraph, Raw, Table,
};

/// Parse markdown text into a document tree.
pub fn parse(text: &str) -> Document {
    formats::markdown::parse_markdown(text).document
}

/// Parse markdown text, also reporting the recoveries the parser took.
pub fn parse_with_diagnostics(text: &str) -> ParseOutcome {
    formats::markdown::parse_markdown(text)
}

/// Render a document with the default formatting rules.
pub fn render(doc: &Document) -> String {
    render_with_rules(doc, &FormattingRules::default())
}

pub fn render_with_rules(doc: &Document, rules: &FormattingRules) -> String {
    formats::markdown::serialize_to_markdown(doc, rules)
}

/// Canonical form of `doc`.
pub fn format(doc: &Document) -> Document {
    transforms::format_document(doc)
}

/// Move fully completed checklist items under the `Archived` heading.
pub fn archive(doc: &Document) -> Document {
    archive_with_report(doc, &ArchiveRules::default()).document
}

pub fn archive_with_report(doc: &Document, rules: &ArchiveRules) -> ArchiveReport {
    transforms::archive_document(doc, rules)
}

/// Parse, transform and render in one step with default rules.
pub fn process(text: &str, operation: Operation) -> String {
    let doc = parse(text);
    let transformed = match operation {
        Operation::Format => format(&doc),
        Operation::Archive => archive(&doc),
        Operation::FormatArchive => format(&archive(&doc)),
    };
    render(&transformed)
}

/// Tree outline of `doc`, one node per line.
pub fn treeviz(doc: &Document) -> String {
    formats::to_treeviz_str(doc)
}
