//! Treeviz formatter for document trees
//!
//! A visual outline of a parsed document, one node per line:
//!
//! ```text
//! ⧉ document
//! ├─ ⚙ 2 lines
//! ├─ § ## Archived
//! ├─ ⎯
//! └─ ☰ 2 items
//!    ├─ ☑ done
//!    │  └─ ☑ nested
//!    └─ ☐ todo
//! ```
//!
//! Labels are cut to 40 terminal columns and end in `…` when truncated.

use super::icons::get_icon;
use crate::tree::{Block, Checkbox, Document, ListItem};
use unicode_width::UnicodeWidthChar;

const LABEL_WIDTH: usize = 40;

/// Render the outline of `doc`.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("{} document\n", get_icon("document"));

    let mut nodes: Vec<(&'static str, String, &[ListItem])> = Vec::new();
    if let Some(frontmatter) = &doc.frontmatter {
        let count = if frontmatter.is_empty() {
            0
        } else {
            frontmatter.split('\n').count()
        };
        nodes.push(("frontmatter", format!("{count} lines"), &[]));
    }
    for block in &doc.blocks {
        let (label, items) = block_label(block);
        nodes.push((block.kind(), label, items));
    }

    let count = nodes.len();
    for (index, (kind, label, items)) in nodes.into_iter().enumerate() {
        let is_last = index + 1 == count;
        push_line(&mut output, "", is_last, get_icon(kind), &label);
        let child_prefix = if is_last { "   " } else { "│  " };
        format_items(&mut output, child_prefix, items);
    }
    output
}

fn block_label(block: &Block) -> (String, &[ListItem]) {
    match block {
        Block::Heading(heading) => (
            format!("{} {}", "#".repeat(heading.level), heading.text),
            &[],
        ),
        Block::Paragraph(paragraph) => (paragraph.lines.join(" "), &[]),
        Block::List(list) => {
            let label = match list.items.len() {
                1 => "1 item".to_string(),
                n => format!("{n} items"),
            };
            (label, &list.items)
        }
        Block::Table(table) => (
            format!("{}x{} table", table.alignments.len(), table.rows.len() + 1),
            &[],
        ),
        Block::CodeFence(fence) => (format!("{}{}", fence.fence, fence.info), &[]),
        Block::ThematicBreak | Block::Blank => (String::new(), &[]),
        Block::Raw(raw) => (raw.lines.first().cloned().unwrap_or_default(), &[]),
    }
}

/// Items are walked with an explicit stack so deep nesting costs no call depth.
fn format_items(output: &mut String, prefix: &str, items: &[ListItem]) {
    let mut stack = vec![(items.iter().peekable(), prefix.to_string())];
    while let Some((siblings, prefix)) = stack.last_mut() {
        let Some(item) = siblings.next() else {
            stack.pop();
            continue;
        };
        let is_last = siblings.peek().is_none();
        let kind = match item.checkbox {
            Checkbox::None => "item",
            Checkbox::Unchecked => "item_unchecked",
            Checkbox::Checked => "item_checked",
        };
        push_line(output, prefix, is_last, get_icon(kind), &item.text);
        if !item.children.is_empty() {
            let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
            stack.push((item.children.iter().peekable(), child_prefix));
        }
    }
}

fn push_line(output: &mut String, prefix: &str, is_last: bool, icon: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(label.trim(), LABEL_WIDTH);
    if label.is_empty() {
        output.push_str(&format!("{prefix}{connector} {icon}\n"));
    } else {
        output.push_str(&format!("{prefix}{connector} {icon} {label}\n"));
    }
}

fn truncate(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
