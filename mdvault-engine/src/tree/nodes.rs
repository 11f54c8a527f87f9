//! Core data structures for the document tree.
//!
//! A [`Document`] owns everything below it. Lists own their items and items own their
//! children, so moving an item always means moving its whole subtree.

use serde::Serialize;

/// A parsed markdown document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    /// Text between the opening and closing `---` lines, without the delimiters.
    pub frontmatter: Option<String>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Document {
            frontmatter: None,
            blocks,
        }
    }

    pub fn with_frontmatter(frontmatter: impl Into<String>, blocks: Vec<Block>) -> Self {
        Document {
            frontmatter: Some(frontmatter.into()),
            blocks,
        }
    }

    /// Top-level lists, in document order.
    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.blocks.iter().filter_map(|block| match block {
            Block::List(list) => Some(list),
            _ => None,
        })
    }
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    Table(Table),
    CodeFence(CodeFence),
    ThematicBreak,
    Blank,
    /// Unrecognized or degraded lines, preserved as written.
    Raw(Raw),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List(_) => "list",
            Block::Table(_) => "table",
            Block::CodeFence(_) => "code_fence",
            Block::ThematicBreak => "thematic_break",
            Block::Blank => "blank",
            Block::Raw(_) => "raw",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}

/// A heading. `setext` records the underlined source form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: usize,
    /// Heading text. Setext headings may span several lines joined by `\n`.
    pub text: String,
    pub setext: bool,
}

impl Heading {
    pub fn atx(level: usize, text: impl Into<String>) -> Self {
        Heading {
            level,
            text: text.into(),
            setext: false,
        }
    }
}

/// A run of contiguous text lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub lines: Vec<String>,
}

/// Marker style of a group of sibling items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Ordered { start: u64 },
}

impl ListStyle {
    pub fn is_ordered(&self) -> bool {
        matches!(self, ListStyle::Ordered { .. })
    }
}

/// A top-level list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub style: ListStyle,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(style: ListStyle, items: Vec<ListItem>) -> Self {
        List { style, items }
    }

    pub fn bullet(items: Vec<ListItem>) -> Self {
        List::new(ListStyle::Bullet, items)
    }
}

/// Checkbox state of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkbox {
    None,
    Unchecked,
    Checked,
}

impl Checkbox {
    /// The `[ ]` / `[x]` token, if the item carries one.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Checkbox::None => None,
            Checkbox::Unchecked => Some("[ ]"),
            Checkbox::Checked => Some("[x]"),
        }
    }
}

/// A list item and the items nested under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub checkbox: Checkbox,
    pub text: String,
    /// Further lines of the item body, indented relative to the item's content column.
    pub continuation: Vec<String>,
    pub children: Vec<ListItem>,
    /// Marker style of `children`.
    pub children_style: ListStyle,
}

impl ListItem {
    pub fn new(checkbox: Checkbox, text: impl Into<String>) -> Self {
        ListItem {
            checkbox,
            text: text.into(),
            continuation: Vec::new(),
            children: Vec::new(),
            children_style: ListStyle::Bullet,
        }
    }

    pub fn checked(text: impl Into<String>) -> Self {
        ListItem::new(Checkbox::Checked, text)
    }

    pub fn unchecked(text: impl Into<String>) -> Self {
        ListItem::new(Checkbox::Unchecked, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        ListItem::new(Checkbox::None, text)
    }

    pub fn with_children(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self
    }

    pub fn with_children_style(mut self, style: ListStyle) -> Self {
        self.children_style = style;
        self
    }

    /// This item followed by every descendant, depth first.
    pub fn subtree(&self) -> Subtree<'_> {
        Subtree { stack: vec![self] }
    }
}

/// Depth-first iterator over an item subtree, driven by an explicit stack.
pub struct Subtree<'a> {
    stack: Vec<&'a ListItem>,
}

impl<'a> Iterator for Subtree<'a> {
    type Item = &'a ListItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}

/// Column alignment taken from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// A pipe table. Every row holds exactly `alignments.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub alignments: Vec<Alignment>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeFence {
    /// The fence run, e.g. "```" or "~~~~".
    pub fence: String,
    pub info: String,
    pub lines: Vec<String>,
}

/// Lines passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raw {
    pub lines: Vec<String>,
}
