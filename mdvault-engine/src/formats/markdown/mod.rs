//! Markdown format implementation
//!
//! A structural reader and writer for the subset of markdown that notes and checklists
//! are written in. It is not a CommonMark renderer: inline markup is kept as text, and
//! only block structure is modelled.
//!
//! # Element Mapping Table
//!
//! | Markdown                      | Tree                   | Notes                                  |
//! |-------------------------------|------------------------|----------------------------------------|
//! | `---` ... `---` at the top    | `Document.frontmatter` | Opaque text, rendered back verbatim    |
//! | `# Heading`, setext underline | `Heading`              | Setext form recorded, ATX after format |
//! | Text lines                    | `Paragraph`            | Lines kept as written                  |
//! | `-`, `*`, `+`, `N.` items     | `List` / `ListItem`    | Nesting from indentation, `[ ]`/`[x]`  |
//! | Pipe table with separator     | `Table`                | Alignment from `:` in the separator    |
//! | ```` ``` ```` / `~~~` fences  | `CodeFence`            | Content never touched                  |
//! | `***`, `---`, `___`           | `ThematicBreak`        |                                        |
//! | Empty line                    | `Blank`                | One block per line                     |
//! | Quotes, HTML, indented code   | `Raw`                  | Passed through as written              |
//!
//! # Lossy Conversions
//!
//! - Ordered lists are renumbered from their first number
//! - Bullet characters are replaced by the configured marker
//! - Blank lines between items of one list are dropped
//! - Tables are re-padded, separator dash counts follow column widths

pub mod formatting_rules;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use formatting_rules::FormattingRules;
pub use parser::{parse_markdown, ParseOutcome, Recovery};
pub use serializer::serialize_to_markdown;
