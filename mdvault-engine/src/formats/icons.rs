//! Icon mapping for the tree visualization

/// Get the Unicode icon for a node kind, as named by [`crate::tree::Block::kind`],
/// plus `document`, `frontmatter` and the list item kinds.
pub fn get_icon(kind: &str) -> &'static str {
    match kind {
        "document" => "⧉",
        "frontmatter" => "⚙",
        "heading" => "§",
        "paragraph" => "¶",
        "list" => "☰",
        "item" => "•",
        "item_unchecked" => "☐",
        "item_checked" => "☑",
        "table" => "▦",
        "code_fence" => "𝒱",
        "thematic_break" => "―",
        "blank" => "⎯",
        "raw" => "℣",
        _ => "○",
    }
}
