//! Checklist archiving
//!
//! Moves finished work out of the way. A top-level item is *fully complete* when it is
//! checked and so is everything below it; such items are cut out of their list with
//! their whole subtree and prepended to the list under the archive heading, newest
//! first. Anything with an open descendant stays exactly where it is.
//!
//! The archive section is the first top-level heading whose text matches
//! [`ArchiveRules::heading`]. It runs until the next heading of the same or a shallower
//! level, and lists inside it are never archived from. When no such heading exists,
//! one is appended at the end of the document.

use crate::formats::markdown::lexer;
use crate::tree::{Block, Checkbox, CodeFence, Document, Heading, List, ListItem, ListStyle};
use serde::{Deserialize, Serialize};

/// Where archived items go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRules {
    /// Heading text of the archive section, compared after trimming
    pub heading: String,

    /// Level used when the archive heading has to be created
    pub heading_level: usize,
}

impl Default for ArchiveRules {
    fn default() -> Self {
        Self {
            heading: "Archived".to_string(),
            heading_level: 2,
        }
    }
}

/// The archived document and how many top-level items were moved.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveReport {
    pub document: Document,
    pub archived: usize,
}

/// Whether `item` and every descendant are checked.
pub fn is_fully_complete(item: &ListItem) -> bool {
    item.subtree().all(|node| node.checkbox == Checkbox::Checked)
}

/// Location of the archive section within the top-level blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Section {
    heading: usize,
    end: usize,
    list: Option<usize>,
}

impl Section {
    fn contains(&self, index: usize) -> bool {
        (self.heading..self.end).contains(&index)
    }
}

fn locate_section(blocks: &[Block], rules: &ArchiveRules) -> Option<Section> {
    let wanted = rules.heading.trim();
    let (heading, level) = blocks.iter().enumerate().find_map(|(i, block)| match block {
        Block::Heading(h) if h.text.trim() == wanted => Some((i, h.level)),
        _ => None,
    })?;

    let end = blocks
        .iter()
        .enumerate()
        .skip(heading + 1)
        .find_map(|(i, block)| match block {
            Block::Heading(h) if h.level <= level => Some(i),
            _ => None,
        })
        .unwrap_or(blocks.len());

    let list = blocks[heading + 1..end]
        .iter()
        .position(|block| !block.is_blank())
        .map(|offset| heading + 1 + offset)
        .filter(|&i| matches!(blocks[i], Block::List(_)));

    Some(Section { heading, end, list })
}

/// Archive fully-complete items of `doc`.
pub fn archive_document(doc: &Document, rules: &ArchiveRules) -> ArchiveReport {
    let section = locate_section(&doc.blocks, rules);
    let in_section = |index: usize| section.is_some_and(|s| s.contains(index));

    let mut blocks = Vec::with_capacity(doc.blocks.len() + 4);
    let mut archived: Vec<ListItem> = Vec::new();
    let mut source_style: Option<ListStyle> = None;
    let mut heading_at = None;
    let mut list_at = None;
    let mut dropped_list = false;

    for (index, block) in doc.blocks.iter().enumerate() {
        if section.is_some_and(|s| s.heading == index) {
            heading_at = Some(blocks.len());
        }
        if section.is_some_and(|s| s.list == Some(index)) {
            list_at = Some(blocks.len());
        }

        let Block::List(list) = block else {
            if !block.is_blank() {
                dropped_list = false;
            }
            blocks.push(block.clone());
            continue;
        };
        if in_section(index) {
            blocks.push(block.clone());
            continue;
        }

        let (done, remaining): (Vec<ListItem>, Vec<ListItem>) =
            list.items.iter().cloned().partition(is_fully_complete);
        if !done.is_empty() {
            source_style.get_or_insert(list.style);
            archived.extend(done);
        }
        if remaining.is_empty() {
            dropped_list = true;
            continue;
        }
        push_list(&mut blocks, List::new(list.style, remaining), dropped_list);
        dropped_list = false;
    }

    let count = archived.len();
    if count == 0 {
        return ArchiveReport {
            document: doc.clone(),
            archived: 0,
        };
    }
    log::debug!("archiving {count} item(s) under '{}'", rules.heading);

    let new_list_style = match source_style {
        Some(ListStyle::Ordered { .. }) => ListStyle::Ordered { start: 1 },
        _ => ListStyle::Bullet,
    };

    match (list_at, heading_at) {
        (Some(at), _) => {
            if let Block::List(list) = &mut blocks[at] {
                archived.append(&mut list.items);
                list.items = archived;
            }
        }
        (None, Some(at)) => {
            let list = Block::List(List::new(new_list_style, archived));
            let next = at + 1;
            if let Some(following) = blocks[next..].iter_mut().find(|b| !b.is_blank()) {
                detach_from_list(following);
            }
            let mut inserted = vec![Block::Blank, list];
            if blocks.get(next).is_some_and(|b| !b.is_blank()) {
                inserted.push(Block::Blank);
            }
            blocks.splice(next..next, inserted);
        }
        (None, None) => {
            if !blocks.is_empty() {
                blocks.push(Block::Blank);
            }
            blocks.push(Block::Heading(Heading::atx(
                rules.heading_level.clamp(1, 6),
                rules.heading.trim(),
            )));
            blocks.push(Block::Blank);
            blocks.push(Block::List(List::new(new_list_style, archived)));
        }
    }

    ArchiveReport {
        document: Document {
            frontmatter: doc.frontmatter.clone(),
            blocks,
        },
        archived: count,
    }
}

/// Rewrites the block that will follow a newly inserted archive list so it does not read
/// back as a continuation of the list's last item. Indented code becomes a fenced block
/// and leading indentation is dropped elsewhere.
fn detach_from_list(block: &mut Block) {
    match block {
        Block::Raw(raw) => {
            let indent = raw.lines.first().map_or(0, |line| lexer::indent_width(line));
            if indent >= 4 {
                *block = Block::CodeFence(fence_indented_code(&raw.lines));
            } else if indent > 0 {
                for line in &mut raw.lines {
                    *line = lexer::relative_to(line, indent);
                }
            }
        }
        Block::Paragraph(paragraph) => {
            if let Some(first) = paragraph.lines.first_mut() {
                *first = first.trim_start().to_string();
            }
        }
        _ => {}
    }
}

fn fence_indented_code(lines: &[String]) -> CodeFence {
    let lines: Vec<String> = lines.iter().map(|line| lexer::relative_to(line, 4)).collect();
    let longest_run = lines
        .iter()
        .map(|line| line.trim_start().chars().take_while(|c| *c == '`').count())
        .max()
        .unwrap_or(0);
    CodeFence {
        fence: "`".repeat((longest_run + 1).max(3)),
        info: String::new(),
        lines,
    }
}

/// Two lists of the same kind separated only by blank lines read back as one list, so
/// once the list between them is gone they are merged here.
fn push_list(blocks: &mut Vec<Block>, list: List, merge: bool) {
    if merge {
        if let Some(Block::List(previous)) = blocks.iter_mut().rev().find(|b| !b.is_blank()) {
            if previous.style.is_ordered() == list.style.is_ordered() {
                previous.items.extend(list.items);
                return;
            }
        }
    }
    blocks.push(Block::List(list));
}
