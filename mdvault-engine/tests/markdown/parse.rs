use indoc::indoc;
use mdvault_engine::{
    parse, parse_with_diagnostics, Block, Checkbox, Heading, ListItem, ListStyle, Paragraph,
    Recovery,
};
use pretty_assertions::assert_eq;

fn paragraph(lines: &[&str]) -> Block {
    Block::Paragraph(Paragraph {
        lines: lines.iter().map(|line| line.to_string()).collect(),
    })
}

#[test]
fn test_heading_levels() {
    let doc = parse("# one\n###### six\n####### seven\n#tag\n");
    assert_eq!(doc.blocks[0], Block::Heading(Heading::atx(1, "one")));
    assert_eq!(doc.blocks[1], Block::Heading(Heading::atx(6, "six")));
    assert_eq!(doc.blocks[2], paragraph(&["####### seven", "#tag"]));
}

#[test]
fn test_closing_hashes_are_not_text() {
    let doc = parse("## Archived ##\n");
    assert_eq!(doc.blocks, vec![Block::Heading(Heading::atx(2, "Archived"))]);
}

#[test]
fn test_setext_headings() {
    let doc = parse("Title\n=====\n\nSub\n---\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading(Heading {
                level: 1,
                text: "Title".to_string(),
                setext: true
            }),
            Block::Blank,
            Block::Heading(Heading {
                level: 2,
                text: "Sub".to_string(),
                setext: true
            }),
        ]
    );
}

#[test]
fn test_lone_star_after_text_is_not_a_list() {
    // an empty item cannot interrupt a paragraph
    assert_eq!(parse("text\n*\n").blocks, vec![paragraph(&["text", "*"])]);
}

#[test]
fn test_ordered_item_not_starting_at_one_stays_in_paragraph() {
    assert_eq!(
        parse("text\n2. x\n").blocks,
        vec![paragraph(&["text", "2. x"])]
    );
}

#[test]
fn test_ordered_item_starting_at_one_interrupts_paragraph() {
    let doc = parse("text\n1. x\n");
    assert_eq!(doc.blocks[0], paragraph(&["text"]));
    let list = doc.lists().next().expect("a list");
    assert_eq!(list.style, ListStyle::Ordered { start: 1 });
}

#[test]
fn test_checklist_tree() {
    let doc = parse(indoc! {"
        - [ ] a
            - [x] b
                - [ ] c
        - d
    "});
    let list = doc.lists().next().expect("a list");
    assert_eq!(
        list.items,
        vec![
            ListItem::unchecked("a").with_children(vec![
                ListItem::checked("b").with_children(vec![ListItem::unchecked("c")])
            ]),
            ListItem::plain("d"),
        ]
    );
}

#[test]
fn test_tab_indented_children() {
    let doc = parse("- [x] a\n\t- [x] b\n");
    let list = doc.lists().next().expect("a list");
    assert_eq!(list.items[0].children[0].text, "b");
    assert_eq!(list.items[0].children[0].checkbox, Checkbox::Checked);
}

#[test]
fn test_lazy_continuation_line() {
    let doc = parse("- a\nstill a\n- b\n");
    let list = doc.lists().next().expect("a list");
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].continuation, vec!["still a"]);
}

#[test]
fn test_heading_ends_list_without_blank_line() {
    let doc = parse("- a\n## Next\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["list", "heading"]);
}

#[test]
fn test_block_quote_and_html_are_raw() {
    let doc = parse("> quoted\n> more\n\n<div>\nhtml\n</div>\n");
    let kinds: Vec<_> = doc.blocks.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec!["raw", "blank", "raw"]);
}

#[test]
fn test_indented_code_is_raw() {
    let doc = parse("    let x = 1;\n    let y = 2;\n");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind(), "raw");
}

#[test]
fn test_crlf_input() {
    let doc = parse("# Title\r\n\r\n- [x] done\r\n");
    assert_eq!(doc.blocks[0], Block::Heading(Heading::atx(1, "Title")));
    let list = doc.lists().next().expect("a list");
    assert_eq!(list.items[0].text, "done");
}

#[test]
fn test_unterminated_fence_recovery() {
    let outcome = parse_with_diagnostics("- a\n  ```\n  code\n");
    assert_eq!(
        outcome.recoveries,
        vec![Recovery::UnterminatedConstruct {
            line: 2,
            construct: "code fence".to_string()
        }]
    );
    assert_eq!(outcome.recoveries[0].to_string(), "line 2: unterminated code fence");
}

#[test]
fn test_recoveries_serialize_with_kind_tag() {
    let outcome = parse_with_diagnostics("```\nopen");
    let json = serde_json::to_value(&outcome.recoveries).unwrap();
    assert_eq!(json[0]["kind"], "unterminated_construct");
    assert_eq!(json[0]["line"], 1);
}
