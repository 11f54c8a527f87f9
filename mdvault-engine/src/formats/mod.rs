//! Format implementations
//!
//! Markdown text in and out of the document tree, plus a tree outline for inspection.

pub mod icons;
pub mod markdown;
pub mod treeviz;

pub use markdown::{parse_markdown, serialize_to_markdown, FormattingRules, ParseOutcome, Recovery};
pub use treeviz::to_treeviz_str;
