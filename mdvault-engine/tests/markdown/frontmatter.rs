use crate::common::format_text;
use indoc::indoc;
use mdvault_engine::{parse, render, Block, Document};
use pretty_assertions::assert_eq;

#[test]
fn test_frontmatter_is_opaque() {
    let md = indoc! {"
        ---
        title: Notes
        tags: [a, b]
        ---
        # Body
    "};
    let doc = parse(md);
    assert_eq!(doc.frontmatter.as_deref(), Some("title: Notes\ntags: [a, b]"));
    assert_eq!(render(&doc), md);
}

#[test]
fn test_frontmatter_bytes_pass_through_formatting() {
    let md = "---\nkey:   value   \n  - odd ``yaml``\n\n---\n# Body\n";
    assert_eq!(
        format_text(md),
        "---\nkey:   value   \n  - odd ``yaml``\n\n---\n\n# Body\n"
    );
}

#[test]
fn test_empty_frontmatter() {
    let doc = parse("---\n---\ntext\n");
    assert_eq!(doc.frontmatter.as_deref(), Some(""));
    assert_eq!(render(&doc), "---\n---\ntext\n");
}

#[test]
fn test_frontmatter_only_on_first_line() {
    let doc = parse("text\n\n---\nnot: frontmatter\n---\n");
    assert_eq!(doc.frontmatter, None);
}

#[test]
fn test_thematic_break_after_frontmatter_uses_dashes() {
    let doc = Document::with_frontmatter("a: 1", vec![Block::Blank, Block::ThematicBreak]);
    let text = render(&doc);
    assert_eq!(text, "---\na: 1\n---\n\n---\n");
    assert_eq!(parse(&text), doc);
}
