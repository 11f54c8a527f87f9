//! Pipe table rows: splitting, separator recognition and column layout.

use crate::tree::{Alignment, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

static SEPARATOR_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:?-+:?$").unwrap());

/// Minimum column width, so the separator always has room for its colons.
const MIN_COLUMN_WIDTH: usize = 3;

/// Whether `line` holds a `|` that is not escaped with a backslash.
pub fn has_pipe(line: &str) -> bool {
    let mut escaped = false;
    for ch in line.chars() {
        match ch {
            '\\' => escaped = !escaped,
            '|' if !escaped => return true,
            _ => escaped = false,
        }
    }
    false
}

/// Splits a table row into trimmed cells on unescaped `|`, ignoring one leading and
/// one trailing pipe.
pub fn parse_table_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = match line.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') || rest.ends_with("\\\\") => rest,
        _ => line,
    };

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in line.chars() {
        match ch {
            '|' if !escaped => {
                cells.push(current.trim().to_string());
                current.clear();
                continue;
            }
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
        current.push(ch);
    }
    cells.push(current.trim().to_string());
    cells
}

/// Alignments of a separator row such as `| :-- | :-: | --: |`, or `None` if `line`
/// is not one.
pub fn parse_separator(line: &str) -> Option<Vec<Alignment>> {
    if !has_pipe(line) {
        return None;
    }
    parse_table_row(line)
        .iter()
        .map(|cell| {
            if !SEPARATOR_CELL.is_match(cell) {
                return None;
            }
            Some(match (cell.starts_with(':'), cell.ends_with(':')) {
                (true, true) => Alignment::Center,
                (false, true) => Alignment::Right,
                (true, false) => Alignment::Left,
                (false, false) => Alignment::None,
            })
        })
        .collect()
}

/// Display width of a cell in terminal columns.
pub fn cell_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Lays out a table with every column padded to its widest cell.
pub fn serialize_pipe_table(table: &Table) -> Vec<String> {
    let columns = table.alignments.len();
    let cell = |row: &[String], i: usize| row.get(i).map(String::as_str).unwrap_or("").to_string();

    let mut col_widths = vec![MIN_COLUMN_WIDTH; columns];
    for row in std::iter::once(&table.header).chain(&table.rows) {
        for (i, width) in col_widths.iter_mut().enumerate() {
            *width = (*width).max(cell_width(&cell(row, i)));
        }
    }

    let render_row = |row: &[String]| {
        let cells: Vec<String> = (0..columns)
            .map(|i| pad(&cell(row, i), col_widths[i], table.alignments[i]))
            .collect();
        format!("| {} |", cells.join(" | "))
    };

    let separator: Vec<String> = table
        .alignments
        .iter()
        .zip(&col_widths)
        .map(|(align, width)| {
            let dashes = "-".repeat(width.saturating_sub(2));
            match align {
                Alignment::Left => format!(":{dashes}-"),
                Alignment::Right => format!("-{dashes}:"),
                Alignment::Center => format!(":{dashes}:"),
                Alignment::None => format!("-{dashes}-"),
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(render_row(&table.header));
    lines.push(format!("| {} |", separator.join(" | ")));
    lines.extend(table.rows.iter().map(|row| render_row(row)));
    lines
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(cell_width(text));
    match align {
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
        Alignment::Left | Alignment::None => format!("{text}{}", " ".repeat(fill)),
    }
}
