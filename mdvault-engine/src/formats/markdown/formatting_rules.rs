use serde::{Deserialize, Serialize};

/// Configuration for the markdown renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingRules {
    /// Number of spaces per list nesting level
    pub indent_width: usize,

    /// The character to use for unordered list markers
    pub unordered_marker: char,
}

impl FormattingRules {
    /// Leading spaces for an item at `depth`. Never zero-width past the top level, since
    /// nesting is recovered from strictly increasing indentation.
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width.max(1) * depth)
    }
}

impl Default for FormattingRules {
    fn default() -> Self {
        Self {
            indent_width: 4,
            unordered_marker: '-',
        }
    }
}
