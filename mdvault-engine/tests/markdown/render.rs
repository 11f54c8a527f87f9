use crate::common::format_text;
use indoc::indoc;
use mdvault_engine::{
    parse, render, render_with_rules, Block, CodeFence, Document, FormattingRules, Heading, List,
    ListItem, ListStyle,
};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_document_renders_nothing() {
    assert_eq!(render(&Document::default()), "");
}

#[test]
fn test_canonical_text_round_trips() {
    let text = indoc! {"
        # Notes

        Some text with `code`.

        - [ ] open
            - [x] done
              with a second line
        - plain

        1. first
        2. second

        ```rust
        fn main() {}
        ```

        ---

        > quoted
    "};
    assert_eq!(render(&parse(text)), text);
}

#[test]
fn test_thematic_break_at_document_start() {
    let doc = Document::new(vec![Block::ThematicBreak]);
    assert_eq!(render(&doc), "***\n");
    assert_eq!(parse("***\n"), doc);
}

#[test]
fn test_thematic_break_after_paragraph() {
    assert_eq!(format_text("text\n***\n"), "text\n\n---\n");
}

#[test]
fn test_unterminated_fence_gets_closed() {
    assert_eq!(render(&parse("```\ncode")), "```\ncode\n```\n");
}

#[test]
fn test_fence_with_info_and_tildes() {
    let doc = Document::new(vec![Block::CodeFence(CodeFence {
        fence: "~~~".to_string(),
        info: "text".to_string(),
        lines: vec!["```".to_string(), "inner".to_string()],
    })]);
    let text = render(&doc);
    assert_eq!(text, "~~~text\n```\ninner\n~~~\n");
    assert_eq!(parse(&text), doc);
}

#[test]
fn test_fence_info_is_written_without_a_gap() {
    assert_eq!(format_text("```rust\nfn main() {}\n```\n"), "```rust\nfn main() {}\n```\n");
    assert_eq!(format_text("``` rust\nfn main() {}\n```\n"), "```rust\nfn main() {}\n```\n");
}

#[test]
fn test_fence_info_starting_with_the_fence_character_keeps_its_gap() {
    let doc = Document::new(vec![Block::CodeFence(CodeFence {
        fence: "~~~".to_string(),
        info: "~x".to_string(),
        lines: vec!["body".to_string()],
    })]);
    let text = render(&doc);
    assert_eq!(text, "~~~ ~x\nbody\n~~~\n");
    assert_eq!(parse(&text), doc);
}

#[test]
fn test_item_that_looks_like_a_rule_stays_an_item() {
    let once = format_text("+ --\n");
    assert_eq!(once, "- \\--\n");
    assert_eq!(format_text(&once), once);
    assert_eq!(parse(&once).lists().count(), 1);
}

#[test]
fn test_ordered_lists_are_renumbered() {
    assert_eq!(render(&parse("3. a\n7. b\n1. c\n")), "3. a\n4. b\n5. c\n");
}

#[test]
fn test_renumbering_never_outgrows_the_marker() {
    let text = render(&parse("999999998. a\n999999999. b\n1. c\n"));
    assert_eq!(text, "999999997. a\n999999998. b\n999999999. c\n");
    let list = parse(&text).lists().next().cloned().expect("a list");
    assert_eq!(list.items.len(), 3);
}

#[test]
fn test_setext_heading_keeps_its_style_when_rendered_directly() {
    let doc = Document::new(vec![Block::Heading(Heading {
        level: 1,
        text: "Title".to_string(),
        setext: true,
    })]);
    assert_eq!(render(&doc), "Title\n=====\n");
}

#[test]
fn test_custom_indent_and_marker() {
    let rules = FormattingRules {
        indent_width: 2,
        unordered_marker: '*',
    };
    let doc = Document::new(vec![Block::List(List::new(
        ListStyle::Bullet,
        vec![ListItem::unchecked("a").with_children(vec![ListItem::checked("b")])],
    ))]);
    assert_eq!(render_with_rules(&doc, &rules), "* [ ] a\n  * [x] b\n");
}

#[test]
fn test_invalid_marker_falls_back_to_dash() {
    let rules = FormattingRules {
        indent_width: 4,
        unordered_marker: '#',
    };
    let doc = Document::new(vec![Block::List(List::bullet(vec![ListItem::plain("a")]))]);
    assert_eq!(render_with_rules(&doc, &rules), "- a\n");
}

#[test]
fn test_continuation_lines_follow_content_column() {
    let mut item = ListItem::plain("a");
    item.continuation = vec!["b".to_string(), String::new(), "  c".to_string()];
    let doc = Document::new(vec![Block::List(List::new(
        ListStyle::Ordered { start: 9 },
        vec![item, ListItem::plain("d")],
    ))]);
    assert_eq!(render(&doc), "9. a\n   b\n\n     c\n10. d\n");
}
