//! The in-memory document tree shared by the parser, the transforms and the renderer.

pub mod nodes;

pub use nodes::*;
