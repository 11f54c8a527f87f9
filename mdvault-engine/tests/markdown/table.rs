use crate::common::format_text;
use indoc::indoc;
use mdvault_engine::{parse, parse_with_diagnostics, Alignment, Block, Recovery};
use pretty_assertions::assert_eq;

#[test]
fn test_columns_are_padded_to_widest_cell() {
    let md = indoc! {"
        | key | size |
        |---|---|
        | deƒault | 1 |
        | smol | 2 |
    "};
    assert_eq!(
        format_text(md),
        indoc! {"
            | key     | size |
            | ------- | ---- |
            | deƒault | 1    |
            | smol    | 2    |
        "}
    );
}

#[test]
fn test_alignment_markers() {
    let md = indoc! {"
        | Left | Center | Right | None |
        | :--- | :----: | ----: | --- |
        | L | C | R | N |
    "};
    let doc = parse(md);
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected a table");
    };
    assert_eq!(
        table.alignments,
        vec![
            Alignment::Left,
            Alignment::Center,
            Alignment::Right,
            Alignment::None
        ]
    );
    assert_eq!(
        format_text(md),
        indoc! {"
            | Left | Center | Right | None |
            | :--- | :----: | ----: | ---- |
            | L    |   C    |     R | N    |
        "}
    );
}

#[test]
fn test_ragged_rows_are_filled() {
    let md = "| a | b | c |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |\n";
    assert_eq!(
        format_text(md),
        indoc! {"
            | a   | b   | c   |
            | --- | --- | --- |
            | 1   |     |     |
            | 1   | 2   | 3   |
        "}
    );
}

#[test]
fn test_wide_characters_count_two_columns() {
    let md = "| 名前 | x |\n| --- | --- |\n| 山田 | y |\n";
    assert_eq!(
        format_text(md),
        indoc! {"
            | 名前 | x   |
            | ---- | --- |
            | 山田 | y   |
        "}
    );
}

#[test]
fn test_escaped_pipe_stays_in_cell() {
    let doc = parse("| a \\| b | c |\n| --- | --- |\n");
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected a table");
    };
    assert_eq!(table.header, vec!["a \\| b", "c"]);
}

#[test]
fn test_table_ends_at_line_without_pipe() {
    let doc = parse("| a |\n| --- |\n| 1 |\nafter\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["table", "paragraph"]);
}

#[test]
fn test_table_interrupts_paragraph() {
    let doc = parse("intro\n| a |\n| --- |\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "table"]);
}

#[test]
fn test_mismatched_separator_is_kept_verbatim() {
    let md = "| a | b |\n| --- |\n| 1 | 2 |\n";
    let outcome = parse_with_diagnostics(md);
    assert_eq!(
        outcome.recoveries,
        vec![Recovery::StructuralAmbiguity {
            line: 1,
            reason: "table header has 2 cells but the separator has 1".to_string()
        }]
    );
    assert_eq!(format_text(md), md);
}
