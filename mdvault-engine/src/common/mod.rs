//! Helpers shared by the parser, the renderer and the transforms.

pub mod flatten;
pub mod inline;
pub mod nesting;
pub mod table;
