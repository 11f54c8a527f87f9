//! Markdown parsing and rendering tests
//!
//! Parse → render behavior of the block model, checked against comrak where the two
//! readers should agree.

mod frontmatter;
mod parse;
mod render;
mod table;
