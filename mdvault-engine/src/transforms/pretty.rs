//! Pretty-print normalization
//!
//! Produces the canonical shape of a document: exactly one blank line between blocks,
//! ATX headings, single-backtick code spans where double ones are not needed, trimmed
//! table cells, and no trailing whitespace. Rendering the result and parsing it back
//! gives the same tree, so formatting twice changes nothing.

use crate::common::inline::normalize_code_spans;
use crate::formats::markdown::lexer;
use crate::tree::{Block, CodeFence, Document, Heading, List, ListItem, Paragraph, Raw, Table};

/// Normalize `doc` into its canonical form.
pub fn format_document(doc: &Document) -> Document {
    let mut blocks = Vec::with_capacity(doc.blocks.len() * 2);
    for block in doc.blocks.iter().filter(|block| !block.is_blank()) {
        if !blocks.is_empty() || doc.frontmatter.is_some() {
            blocks.push(Block::Blank);
        }
        blocks.push(format_block(block));
    }

    Document {
        frontmatter: doc.frontmatter.clone(),
        blocks,
    }
}

fn format_block(block: &Block) -> Block {
    match block {
        Block::Heading(heading) => {
            let text = heading
                .text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            // read back through the ATX rules so a trailing `#` run cannot shift later
            let line = format!("{} {}", "#".repeat(heading.level), normalize_code_spans(&text));
            let text = lexer::atx_heading(&line).map(|(_, text)| text).unwrap_or(text);
            Block::Heading(Heading::atx(heading.level, text))
        }
        Block::Paragraph(paragraph) => {
            let text = paragraph
                .lines
                .iter()
                .map(|line| line.trim_end())
                .collect::<Vec<_>>()
                .join("\n");
            Block::Paragraph(Paragraph {
                lines: split_lines(&normalize_code_spans(&text)),
            })
        }
        Block::List(list) => Block::List(List {
            style: list.style,
            items: list.items.iter().map(format_subtree).collect(),
        }),
        Block::Table(table) => Block::Table(format_table(table)),
        Block::CodeFence(fence) => Block::CodeFence(CodeFence {
            fence: fence.fence.clone(),
            info: fence.info.trim().to_string(),
            lines: fence.lines.iter().map(|l| l.trim_end().to_string()).collect(),
        }),
        Block::ThematicBreak => Block::ThematicBreak,
        Block::Blank => Block::Blank,
        Block::Raw(raw) => Block::Raw(Raw {
            lines: raw.lines.iter().map(|l| l.trim_end().to_string()).collect(),
        }),
    }
}

/// Formats an item and everything below it. Items are rebuilt bottom-up from the
/// reversed pre-order listing, so depth never grows the call stack.
fn format_subtree(item: &ListItem) -> ListItem {
    let mut order: Vec<&ListItem> = item.subtree().collect();
    let mut built: Vec<ListItem> = Vec::new();
    while let Some(source) = order.pop() {
        let mut formatted = format_item_fields(source);
        // siblings come off the stack last-first
        let mut children = built.split_off(built.len() - source.children.len());
        children.reverse();
        formatted.children = children;
        built.push(formatted);
    }
    built.pop().unwrap_or_else(|| format_item_fields(item))
}

fn format_item_fields(item: &ListItem) -> ListItem {
    ListItem {
        checkbox: item.checkbox,
        text: normalize_code_spans(item.text.trim()).into_owned(),
        continuation: format_continuation(&item.continuation),
        children: Vec::new(),
        children_style: item.children_style,
    }
}

/// Trims continuation lines and rewrites code spans outside fenced code. A fence left
/// open at the end of the item is closed, otherwise it would swallow whatever is
/// rendered after the item.
fn format_continuation(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut prose: Vec<&str> = Vec::new();
    let mut fence: Option<lexer::FenceOpen> = None;

    for line in lines.iter().map(|line| line.trim_end()) {
        match &fence {
            Some(open) => {
                if open.is_closed_by(line) {
                    fence = None;
                }
                out.push(line.to_string());
            }
            None => {
                if let Some(open) = lexer::fence_open_anywhere(line) {
                    flush_prose(&mut prose, &mut out);
                    fence = Some(open);
                    out.push(line.to_string());
                } else {
                    prose.push(line);
                }
            }
        }
    }
    flush_prose(&mut prose, &mut out);
    if let Some(open) = fence {
        out.push(format!("{}{}", " ".repeat(open.indent), open.fence));
    }
    out
}

fn flush_prose(prose: &mut Vec<&str>, out: &mut Vec<String>) {
    if prose.is_empty() {
        return;
    }
    out.extend(split_lines(&normalize_code_spans(&prose.join("\n"))));
    prose.clear();
}

fn format_table(table: &Table) -> Table {
    let columns = table.alignments.len();
    let format_row = |row: &Vec<String>| -> Vec<String> {
        let mut cells: Vec<String> = row
            .iter()
            .take(columns)
            .map(|cell| normalize_code_spans(cell.trim()).into_owned())
            .collect();
        cells.resize(columns, String::new());
        cells
    };
    Table {
        alignments: table.alignments.clone(),
        header: format_row(&table.header),
        rows: table.rows.iter().map(format_row).collect(),
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
