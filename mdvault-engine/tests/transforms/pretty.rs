use crate::common::format_text;
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_setext_becomes_atx() {
    assert_eq!(format_text("header\n---\n"), "## header\n");
    assert_eq!(format_text("Title\n===\n"), "# Title\n");
}

#[test]
fn test_blank_lines_are_collapsed() {
    assert_eq!(
        format_text("\n\n# A\n\n\n\ntext  \n\n\n- x\n\n"),
        "# A\n\ntext\n\n- x\n"
    );
}

#[test]
fn test_blocks_get_separated() {
    assert_eq!(
        format_text("# A\ntext\n- x\n## B\n"),
        "# A\n\ntext\n\n- x\n\n## B\n"
    );
}

#[test]
fn test_double_backtick_spans_are_simplified() {
    assert_eq!(
        format_text("use ``foo`` and ``a ` b``\n"),
        "use `foo` and ``a ` b``\n"
    );
    assert_eq!(format_text("- item ``x``\n"), "- item `x`\n");
}

#[test]
fn test_code_fences_are_left_alone() {
    let md = "```\n``not touched``\n    indented\n```\n";
    assert_eq!(format_text(md), md);
}

#[test]
fn test_markers_and_indentation_are_normalized() {
    let md = indoc! {"
        * [ ] one
          + [X] two
        * three
    "};
    assert_eq!(
        format_text(md),
        indoc! {"
            - [ ] one
                - [x] two
            - three
        "}
    );
}

#[test]
fn test_trailing_heading_hashes_are_dropped() {
    assert_eq!(format_text("##   Title   ##\n"), "## Title\n");
}

#[test]
fn test_format_is_idempotent_on_a_messy_note() {
    let md = indoc! {"
        ---
        date: 2024-01-01
        ---
        Weekly
        ======
        Some ``code`` here
        - [x] done
           - [ ] open child
          wrapped line
        | a | b |
        |:-|-:|
        | 1 | 22 |
        ```sh
        echo hi   
        ```
        > quote
    "};
    let once = format_text(md);
    assert_eq!(format_text(&once), once);
    assert_eq!(
        once,
        indoc! {"
            ---
            date: 2024-01-01
            ---

            # Weekly

            Some `code` here

            - [x] done
                - [ ] open child
                  wrapped line

            | a   |   b |
            | :-- | --: |
            | 1   |  22 |

            ```sh
            echo hi
            ```

            > quote
        "}
    );
}
