//! Flattens nested list items into the line order they are written in.
//!
//! # The High-Level Concept
//!
//! Rendering a list is a pre-order walk: each item is written, then its children one
//! level deeper. The walk keeps its own stack of sibling iterators instead of recursing,
//! so arbitrarily deep lists render with constant call depth.
//!
//! Each frame remembers the marker style of its sibling group and the next ordinal for
//! ordered groups, which is how renumbering falls out of the walk. A group that would
//! count past nine digits starts early enough to end on the largest ordinal instead.

use crate::tree::{ListItem, ListStyle};
use std::slice::Iter;

/// A list item together with its position in the rendered list.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatItem<'a> {
    pub item: &'a ListItem,
    pub depth: usize,
    /// Ordinal for items of an ordered group, `None` for bullets.
    pub number: Option<u64>,
}

struct Frame<'a> {
    items: Iter<'a, ListItem>,
    depth: usize,
    next_number: Option<u64>,
}

/// Ordered markers read back only with up to nine digits.
const MAX_ORDINAL: u64 = 999_999_999;

impl<'a> Frame<'a> {
    fn new(items: &'a [ListItem], depth: usize, style: ListStyle) -> Self {
        let next_number = match style {
            ListStyle::Bullet => None,
            ListStyle::Ordered { start } => {
                let last_offset = items.len().saturating_sub(1) as u64;
                Some(start.min(MAX_ORDINAL.saturating_sub(last_offset)))
            }
        };
        Frame {
            items: items.iter(),
            depth,
            next_number,
        }
    }
}

/// Walks `items` in pre-order.
pub fn flatten_items(items: &[ListItem], style: ListStyle) -> Vec<FlatItem<'_>> {
    let mut flat = Vec::new();
    let mut stack = vec![Frame::new(items, 0, style)];

    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.next() else {
            stack.pop();
            continue;
        };
        let number = frame.next_number;
        if let Some(n) = frame.next_number.as_mut() {
            *n += 1;
        }
        let depth = frame.depth;

        flat.push(FlatItem {
            item,
            depth,
            number,
        });
        if !item.children.is_empty() {
            stack.push(Frame::new(&item.children, depth + 1, item.children_style));
        }
    }

    flat
}
