//! Markdown parsing (text → document tree)
//!
//! Pipeline: source text → lines → block dispatch on each line's opener → Document.
//!
//! The parser is total. Input that does not fit a recognized block shape becomes a
//! `Raw` block or stays inside a paragraph, and the decision is reported as a
//! [`Recovery`] so callers can surface it. Nothing in the source is ever dropped
//! except trailing carriage returns.

use super::lexer::{self, FenceOpen, Marker};
use crate::common::nesting::ItemArena;
use crate::common::table::{has_pipe, parse_separator, parse_table_row};
use crate::tree::{
    Block, Checkbox, CodeFence, Document, Heading, List, ListItem, ListStyle, Paragraph, Raw,
    Table,
};
use serde::Serialize;
use std::fmt;

/// A local decision the parser took on input it could not read unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recovery {
    /// A construct was recognized but could not be built as written. `line` is 1-based.
    StructuralAmbiguity { line: usize, reason: String },
    /// A construct was opened and never closed before the end of the input.
    UnterminatedConstruct { line: usize, construct: String },
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recovery::StructuralAmbiguity { line, reason } => write!(f, "line {line}: {reason}"),
            Recovery::UnterminatedConstruct { line, construct } => {
                write!(f, "line {line}: unterminated {construct}")
            }
        }
    }
}

/// A parsed document plus the recoveries taken while reading it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub document: Document,
    pub recoveries: Vec<Recovery>,
}

/// Parse markdown source into a document tree.
pub fn parse_markdown(source: &str) -> ParseOutcome {
    let lines = lexer::split_lines(source);
    BlockParser::new(&lines).run()
}

struct BlockParser<'s> {
    lines: &'s [&'s str],
    pos: usize,
    blocks: Vec<Block>,
    recoveries: Vec<Recovery>,
}

impl<'s> BlockParser<'s> {
    fn new(lines: &'s [&'s str]) -> Self {
        BlockParser {
            lines,
            pos: 0,
            blocks: Vec::new(),
            recoveries: Vec::new(),
        }
    }

    fn run(mut self) -> ParseOutcome {
        let frontmatter = self.frontmatter();

        while let Some(line) = self.current() {
            if lexer::is_blank(line) {
                self.blocks.push(Block::Blank);
                self.pos += 1;
            } else if lexer::indent_width(line) >= 4 {
                self.indented_raw();
            } else if let Some(open) = lexer::fence_open(line) {
                self.code_fence(open);
            } else if let Some((level, text)) = lexer::atx_heading(line) {
                self.blocks.push(Block::Heading(Heading::atx(level, text)));
                self.pos += 1;
            } else if lexer::is_thematic_break(line) {
                self.blocks.push(Block::ThematicBreak);
                self.pos += 1;
            } else if let Some(marker) = lexer::list_marker(line) {
                self.list(marker);
            } else if self.table_starts_here() {
                self.table();
            } else if lexer::is_block_quote(line) || lexer::is_html_start(line) {
                self.raw_run();
            } else {
                self.paragraph();
            }
        }

        ParseOutcome {
            document: Document {
                frontmatter,
                blocks: self.blocks,
            },
            recoveries: self.recoveries,
        }
    }

    fn current(&self) -> Option<&'s str> {
        self.lines.get(self.pos).copied()
    }

    fn peek(&self, offset: usize) -> Option<&'s str> {
        self.lines.get(self.pos + offset).copied()
    }

    fn line_number(&self) -> usize {
        self.pos + 1
    }

    /// Frontmatter needs `---` on the very first line and a closing `---` later on.
    /// Without the closing line the opening one is read as ordinary markdown.
    fn frontmatter(&mut self) -> Option<String> {
        if self.lines.first()?.trim_end() != "---" {
            return None;
        }
        let close = self
            .lines
            .iter()
            .skip(1)
            .position(|line| line.trim_end() == "---")?
            + 1;
        self.pos = close + 1;
        Some(self.lines[1..close].join("\n"))
    }

    fn table_starts_here(&self) -> bool {
        match (self.current(), self.peek(1)) {
            (Some(header), Some(separator)) => {
                has_pipe(header) && parse_separator(separator).is_some()
            }
            _ => false,
        }
    }

    fn code_fence(&mut self, open: FenceOpen) {
        let start = self.line_number();
        self.pos += 1;

        let mut lines = Vec::new();
        let mut closed = false;
        while let Some(line) = self.current() {
            self.pos += 1;
            if open.is_closed_by(line) {
                closed = true;
                break;
            }
            lines.push(lexer::relative_to(line, open.indent));
        }

        if !closed {
            log::debug!("code fence opened on line {start} runs to end of input");
            self.recoveries.push(Recovery::UnterminatedConstruct {
                line: start,
                construct: "code fence".to_string(),
            });
        }
        self.blocks.push(Block::CodeFence(CodeFence {
            fence: open.fence,
            info: open.info,
            lines,
        }));
    }

    fn table(&mut self) {
        let start = self.line_number();
        let header = parse_table_row(self.lines[self.pos]);
        let alignments = parse_separator(self.lines[self.pos + 1]).unwrap_or_default();

        let mut end = self.pos + 2;
        while self
            .lines
            .get(end)
            .is_some_and(|line| !lexer::is_blank(line) && has_pipe(line))
        {
            end += 1;
        }

        if header.len() != alignments.len() {
            log::debug!("table header on line {start} does not match its separator");
            self.recoveries.push(Recovery::StructuralAmbiguity {
                line: start,
                reason: format!(
                    "table header has {} cells but the separator has {}",
                    header.len(),
                    alignments.len()
                ),
            });
            self.push_raw(end);
            return;
        }

        let columns = alignments.len();
        let rows = self.lines[self.pos + 2..end]
            .iter()
            .map(|line| {
                let mut cells = parse_table_row(line);
                cells.resize(columns, String::new());
                cells
            })
            .collect();
        self.pos = end;
        self.blocks.push(Block::Table(Table {
            alignments,
            header,
            rows,
        }));
    }

    /// Indented code: contiguous lines indented four or more columns.
    fn indented_raw(&mut self) {
        let mut end = self.pos;
        while self
            .lines
            .get(end)
            .is_some_and(|line| !lexer::is_blank(line) && lexer::indent_width(line) >= 4)
        {
            end += 1;
        }
        self.push_raw(end);
    }

    /// Block quotes and HTML: everything up to the next blank line.
    fn raw_run(&mut self) {
        let mut end = self.pos;
        while self
            .lines
            .get(end)
            .is_some_and(|line| !lexer::is_blank(line))
        {
            end += 1;
        }
        self.push_raw(end);
    }

    fn push_raw(&mut self, end: usize) {
        let lines = self.lines[self.pos..end]
            .iter()
            .map(|line| line.to_string())
            .collect();
        self.pos = end;
        self.blocks.push(Block::Raw(Raw { lines }));
    }

    fn paragraph(&mut self) {
        let mut lines = vec![self.lines[self.pos].to_string()];
        self.pos += 1;

        while let Some(line) = self.current() {
            if lexer::is_blank(line) {
                break;
            }
            if let Some(level) = lexer::setext_underline(line) {
                self.pos += 1;
                let text = lines
                    .iter()
                    .map(|line| line.trim())
                    .collect::<Vec<_>>()
                    .join("\n");
                self.blocks.push(Block::Heading(Heading {
                    level,
                    text,
                    setext: true,
                }));
                return;
            }
            if self.interrupts_paragraph(line) {
                break;
            }
            lines.push(line.to_string());
            self.pos += 1;
        }

        self.blocks.push(Block::Paragraph(Paragraph { lines }));
    }

    fn interrupts_paragraph(&self, line: &str) -> bool {
        if lexer::indent_width(line) >= 4 {
            return false;
        }
        if lexer::fence_open(line).is_some()
            || lexer::atx_heading(line).is_some()
            || lexer::is_thematic_break(line)
            || lexer::is_block_quote(line)
            || self.table_starts_here()
        {
            return true;
        }
        // only non-empty items, and ordered ones starting at 1, interrupt a paragraph
        match lexer::list_marker(line) {
            Some(marker) => {
                let empty = marker.checkbox == Checkbox::None && marker.text.trim().is_empty();
                !empty && matches!(marker.number, None | Some(1))
            }
            None => false,
        }
    }

    fn list(&mut self, first: Marker) {
        let ordered = first.is_ordered();
        let style = marker_style(&first);
        let mut arena = ItemArena::new();
        let mut fence: Option<(usize, FenceOpen, usize)> = None;
        let mut blank_run_start: Option<usize> = None;

        while let Some(line) = self.current() {
            if let Some((owner, open, started)) = fence.take() {
                let column = arena.content_column(owner);
                if lexer::is_blank(line) {
                    arena.push_continuation(owner, String::new());
                } else {
                    arena.push_continuation(owner, lexer::relative_to(line, column));
                }
                self.pos += 1;
                if !open.is_closed_by(line) {
                    fence = Some((owner, open, started));
                }
                continue;
            }

            if lexer::is_blank(line) {
                blank_run_start.get_or_insert(self.pos);
                self.pos += 1;
                continue;
            }

            let indent = lexer::indent_width(line);
            let marker = lexer::list_marker(line).filter(|_| !lexer::is_thematic_break(line));

            if let Some(marker) = marker {
                if arena.is_root_indent(indent) && marker.is_ordered() != ordered {
                    break;
                }
                blank_run_start = None;
                let marker_style = marker_style(&marker);
                arena.open_item(
                    indent,
                    marker.content_column(),
                    ListItem::new(marker.checkbox, marker.text.clone()),
                    marker_style,
                );
                self.pos += 1;
                continue;
            }

            let Some(owner) = arena.innermost() else {
                break;
            };
            let indented = indent >= arena.content_column(owner);
            if !indented && (blank_run_start.is_some() || self.ends_list(line)) {
                break;
            }
            if let Some(blank_start) = blank_run_start.take() {
                for _ in blank_start..self.pos {
                    arena.push_continuation(owner, String::new());
                }
            }

            let column = arena.content_column(owner);
            if let Some(open) = lexer::fence_open_anywhere(line) {
                fence = Some((owner, open, self.line_number()));
            }
            arena.push_continuation(owner, lexer::relative_to(line, column));
            self.pos += 1;
        }

        if let Some((_, _, started)) = fence {
            log::debug!("code fence inside list item on line {started} runs to end of input");
            self.recoveries.push(Recovery::UnterminatedConstruct {
                line: started,
                construct: "code fence".to_string(),
            });
        }
        // trailing blank lines belong to the enclosing document
        if let Some(blank_start) = blank_run_start {
            self.pos = blank_start;
        }

        self.blocks.push(Block::List(List::new(style, arena.finish())));
    }

    /// Whether an unindented non-item line closes the list instead of continuing its
    /// last item lazily.
    fn ends_list(&self, line: &str) -> bool {
        lexer::fence_open(line).is_some()
            || lexer::atx_heading(line).is_some()
            || lexer::is_thematic_break(line)
            || lexer::is_block_quote(line)
            || lexer::is_html_start(line)
            || self.table_starts_here()
    }
}

fn marker_style(marker: &Marker) -> ListStyle {
    match marker.number {
        Some(start) => ListStyle::Ordered { start },
        None => ListStyle::Bullet,
    }
}
