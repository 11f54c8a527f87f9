//! Line classification for the block parser.
//!
//! Markdown block structure is decided line by line, so the lexer works on whole lines:
//! it measures indentation and recognizes the openers of each block kind. Deciding what
//! a line means in context (paragraph continuation, list nesting, ...) is the parser's job.

use crate::tree::Checkbox;
use once_cell::sync::Lazy;
use regex::Regex;

static ATX_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").unwrap());
static ATX_CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[ \t]+)#+$").unwrap());
static THEMATIC_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}(?:(?:\*[ \t]*){3,}|(?:-[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});
static SETEXT_UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}(=+|-+)[ \t]*$").unwrap());
static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( {0,3})(`{3,}|~{3,})(.*)$").unwrap());
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)([-*+]|(\d{1,9})\.)(?:[ \t]+(.*))?$").unwrap());
static CHECKBOX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([ xX])\](?:[ \t]+(.*))?$").unwrap());
static HTML_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(?:<[A-Za-z][A-Za-z0-9-]*(?:[ \t/>]|$)|</[A-Za-z]|<!)").unwrap());

/// Tab stops used when measuring indentation.
const TAB_WIDTH: usize = 4;

/// Splits source text into lines, dropping `\r` before each `\n`.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Indentation of `line` in columns, with tabs advancing to the next tab stop.
pub fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH - width % TAB_WIDTH,
            _ => break,
        }
    }
    width
}

/// Re-indents `line` relative to `column`: leading whitespace up to `column` is dropped,
/// anything beyond it is kept as spaces.
pub fn relative_to(line: &str, column: usize) -> String {
    let extra = indent_width(line).saturating_sub(column);
    format!("{}{}", " ".repeat(extra), line.trim_start())
}

/// An ATX heading: level and text with the optional closing sequence removed.
pub fn atx_heading(line: &str) -> Option<(usize, String)> {
    let caps = ATX_HEADING.captures(line)?;
    let level = caps[1].len();
    let text = caps.get(2).map_or("", |m| m.as_str());
    let text = ATX_CLOSING.replace(text, "");
    Some((level, text.trim().to_string()))
}

pub fn is_thematic_break(line: &str) -> bool {
    THEMATIC_BREAK.is_match(line)
}

/// Level of a setext underline (`=` → 1, `-` → 2).
pub fn setext_underline(line: &str) -> Option<usize> {
    let caps = SETEXT_UNDERLINE.captures(line)?;
    if caps[1].starts_with('=') {
        Some(1)
    } else {
        Some(2)
    }
}

/// An opening code fence.
#[derive(Debug, Clone, PartialEq)]
pub struct FenceOpen {
    pub indent: usize,
    pub fence: String,
    pub info: String,
}

impl FenceOpen {
    fn fence_char(&self) -> char {
        self.fence.chars().next().unwrap_or('`')
    }

    /// Whether `line` closes this fence: the same character, at least as many of them,
    /// and nothing else on the line.
    pub fn is_closed_by(&self, line: &str) -> bool {
        let trimmed = line.trim();
        let run = trimmed.chars().take_while(|c| *c == self.fence_char()).count();
        indent_width(line) <= 3 + self.indent
            && run >= self.fence.len()
            && run == trimmed.chars().count()
    }
}

/// Recognizes a fence opener at up to three columns of indentation.
pub fn fence_open(line: &str) -> Option<FenceOpen> {
    let caps = FENCE_OPEN.captures(line)?;
    let fence = caps[2].to_string();
    let info = caps[3].trim().to_string();
    // backtick fences cannot carry backticks in their info string
    if fence.starts_with('`') && info.contains('`') {
        return None;
    }
    Some(FenceOpen {
        indent: caps[1].len(),
        fence,
        info,
    })
}

/// Recognizes a fence opener at any indentation (used inside list items).
pub fn fence_open_anywhere(line: &str) -> Option<FenceOpen> {
    let indent = indent_width(line);
    fence_open(line.trim_start()).map(|open| FenceOpen { indent, ..open })
}

/// A list item marker line.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub indent: usize,
    /// Width of the marker itself (`-` is 1, `10.` is 3).
    pub width: usize,
    /// The number of an ordered marker, `None` for bullets.
    pub number: Option<u64>,
    pub checkbox: Checkbox,
    pub text: String,
}

impl Marker {
    pub fn is_ordered(&self) -> bool {
        self.number.is_some()
    }

    /// Column where the item's content starts.
    pub fn content_column(&self) -> usize {
        self.indent + self.width + 1
    }
}

pub fn list_marker(line: &str) -> Option<Marker> {
    let caps = LIST_MARKER.captures(line)?;
    let indent = indent_width(&caps[1]);
    let width = caps[2].len();
    let number = match caps.get(3) {
        Some(digits) => Some(digits.as_str().parse().ok()?),
        None => None,
    };
    let rest = caps.get(4).map_or("", |m| m.as_str());
    let (checkbox, text) = match CHECKBOX.captures(rest) {
        Some(check) => {
            let state = if &check[1] == " " {
                Checkbox::Unchecked
            } else {
                Checkbox::Checked
            };
            (state, check.get(2).map_or("", |m| m.as_str()).to_string())
        }
        None => (Checkbox::None, rest.to_string()),
    };
    Some(Marker {
        indent,
        width,
        number,
        checkbox,
        text,
    })
}

pub fn is_block_quote(line: &str) -> bool {
    indent_width(line) <= 3 && line.trim_start().starts_with('>')
}

pub fn is_html_start(line: &str) -> bool {
    HTML_START.is_match(line)
}
