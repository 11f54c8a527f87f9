//! Markdown serialization (document tree → text)
//!
//! Every block renders to a fixed set of lines and the document is those lines joined
//! with `\n`, plus a final newline. The renderer adds nothing the tree does not hold:
//! blank lines come only from `Blank` blocks and empty continuation lines.

use super::formatting_rules::FormattingRules;
use super::lexer;
use crate::common::flatten::flatten_items;
use crate::common::table::serialize_pipe_table;
use crate::tree::{Block, CodeFence, Document, Heading, List};

/// Serialize a document with the given rules.
pub fn serialize_to_markdown(doc: &Document, rules: &FormattingRules) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(frontmatter) = &doc.frontmatter {
        lines.push("---".to_string());
        if !frontmatter.is_empty() {
            lines.extend(frontmatter.split('\n').map(str::to_string));
        }
        lines.push("---".to_string());
    }

    for (index, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Heading(heading) => lines.extend(heading_lines(heading)),
            Block::Paragraph(paragraph) => lines.extend(paragraph.lines.iter().cloned()),
            Block::List(list) => lines.extend(list_lines(list, rules)),
            Block::Table(table) => lines.extend(serialize_pipe_table(table)),
            Block::CodeFence(fence) => lines.extend(fence_lines(fence)),
            Block::ThematicBreak => {
                let previous = index.checked_sub(1).map(|i| &doc.blocks[i]);
                lines.push(thematic_break(previous, doc.frontmatter.is_some()).to_string());
            }
            Block::Blank => lines.push(String::new()),
            Block::Raw(raw) => lines.extend(raw.lines.iter().cloned()),
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// `---` would read back as a frontmatter opener at the top of the document, or as
/// a setext underline right after a paragraph.
fn thematic_break(previous: Option<&Block>, has_frontmatter: bool) -> &'static str {
    match previous {
        None if !has_frontmatter => "***",
        Some(Block::Paragraph(_)) => "***",
        _ => "---",
    }
}

fn heading_lines(heading: &Heading) -> Vec<String> {
    if heading.setext && (1..=2).contains(&heading.level) && !heading.text.is_empty() {
        let mut lines: Vec<String> = heading.text.split('\n').map(str::to_string).collect();
        let width = lines.last().map_or(0, |line| line.chars().count()).max(3);
        let underline = if heading.level == 1 { "=" } else { "-" };
        lines.push(underline.repeat(width));
        return lines;
    }

    let hashes = "#".repeat(heading.level.clamp(1, 6));
    let text = heading.text.split('\n').collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        vec![hashes]
    } else {
        vec![format!("{hashes} {text}")]
    }
}

fn list_lines(list: &List, rules: &FormattingRules) -> Vec<String> {
    let bullet = match rules.unordered_marker {
        marker @ ('-' | '*' | '+') => marker,
        _ => '-',
    };

    let mut lines = Vec::new();
    for flat in flatten_items(&list.items, list.style) {
        let item = flat.item;
        let marker = match flat.number {
            Some(n) => format!("{n}."),
            None => bullet.to_string(),
        };
        let indent = rules.indent(flat.depth);

        let mut line = format!("{indent}{marker}");
        if let Some(token) = item.checkbox.token() {
            line.push(' ');
            line.push_str(token);
        }
        if !item.text.is_empty() {
            line.push(' ');
            // "- --" would read back as a thematic break
            if lexer::is_thematic_break(&format!("{line}{}", item.text)) {
                line.push('\\');
            }
            line.push_str(&item.text);
        }
        lines.push(line);

        let content = " ".repeat(indent.len() + marker.len() + 1);
        lines.extend(item.continuation.iter().map(|continuation| {
            if continuation.is_empty() {
                String::new()
            } else {
                format!("{content}{continuation}")
            }
        }));
    }
    lines
}

fn fence_lines(fence: &CodeFence) -> Vec<String> {
    // info sits right against the fence unless it would lengthen it
    let opener = match fence.info.chars().next() {
        Some(first) if fence.fence.starts_with(first) => format!("{} {}", fence.fence, fence.info),
        _ => format!("{}{}", fence.fence, fence.info),
    };
    let mut lines = Vec::with_capacity(fence.lines.len() + 2);
    lines.push(opener);
    lines.extend(fence.lines.iter().cloned());
    lines.push(fence.fence.clone());
    lines
}
