//! Rebuilds nested list items from a flat sequence of marker lines.
//!
//! # The High-Level Concept
//!
//! Markdown expresses list nesting only through indentation. The parser sees item lines
//! one at a time, each with an indentation column, and has to decide which earlier item
//! (if any) the new one belongs to. A stack of "open" items records the current chain of
//! ancestors, exactly like the open containers in an event stream.
//!
//! # The Algorithm
//!
//! 1. **Opening an item at column `w`:**
//!    - Pop every open item whose column is `>= w`. Those are siblings or deeper.
//!    - If an item remains, it is the parent. Otherwise the new item is a root.
//!    - Push the new item.
//!
//! 2. **Attaching a continuation line:**
//!    - The owner is always the innermost open item. Its indentation is stored
//!      relative to that item's content column.
//!    - After a blank line a line only stays in the list when it reaches that content
//!      column, so a rendered line always reads back at the column it was written at.
//!
//! 3. **Completion:**
//!    - Items live in an arena and refer to children by index. A child always has a
//!      larger index than its parent, so folding the arena from the back assembles
//!      every subtree before its parent needs it, without recursion.

use crate::tree::{ListItem, ListStyle};

struct Node {
    item: ListItem,
    children: Vec<usize>,
    content_column: usize,
}

struct Open {
    indent: usize,
    index: usize,
}

/// Arena of list items under construction.
#[derive(Default)]
pub struct ItemArena {
    nodes: Vec<Node>,
    roots: Vec<usize>,
    stack: Vec<Open>,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item opened at `indent` would be a root item.
    pub fn is_root_indent(&self, indent: usize) -> bool {
        self.stack.first().map_or(true, |root| root.indent >= indent)
    }

    /// Opens an item at `indent`. `style` is the marker style of the item's own group,
    /// recorded on the parent when this is its first child.
    pub fn open_item(
        &mut self,
        indent: usize,
        content_column: usize,
        item: ListItem,
        style: ListStyle,
    ) -> usize {
        while self.stack.last().is_some_and(|open| open.indent >= indent) {
            self.stack.pop();
        }

        let index = self.nodes.len();
        match self.stack.last() {
            Some(parent) => {
                let parent = &mut self.nodes[parent.index];
                if parent.children.is_empty() {
                    parent.item.children_style = style;
                }
                parent.children.push(index);
            }
            None => self.roots.push(index),
        }

        self.nodes.push(Node {
            item,
            children: Vec::new(),
            content_column,
        });
        self.stack.push(Open { indent, index });
        index
    }

    /// The innermost open item. Continuation lines always attach here: an item's
    /// own lines are written before its children, so text can only be kept in source
    /// order by the item that is still last.
    pub fn innermost(&self) -> Option<usize> {
        self.stack.last().map(|open| open.index)
    }

    pub fn content_column(&self, index: usize) -> usize {
        self.nodes[index].content_column
    }

    pub fn push_continuation(&mut self, index: usize, line: String) {
        self.nodes[index].item.continuation.push(line);
    }

    /// Assembles the finished root items.
    pub fn finish(self) -> Vec<ListItem> {
        let ItemArena {
            mut nodes, roots, ..
        } = self;
        let mut built: Vec<Option<ListItem>> = Vec::with_capacity(nodes.len());
        built.resize_with(nodes.len(), || None);

        while let Some(node) = nodes.pop() {
            let index = nodes.len();
            let mut item = node.item;
            item.children = node
                .children
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[index] = Some(item);
        }

        roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }
}
