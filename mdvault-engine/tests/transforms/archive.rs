use indoc::indoc;
use mdvault_engine::{archive_with_report, parse, process, ArchiveRules, Block, Operation};
use pretty_assertions::assert_eq;

/// Each case runs `format+archive` on the input and compares the rendered text. The
/// output must also be stable: archiving it again changes nothing.
macro_rules! archive_cases {
    ($($name:ident $input:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                let input = indoc!($input);
                let expected = indoc!($expected);
                let actual = process(input, Operation::FormatArchive);
                assert_eq!(actual, expected);
                assert_eq!(process(&actual, Operation::FormatArchive), actual);
            }
        )*
    };
}

archive_cases! {
    untouched r#"
    - [ ] item 1
    "# => r#"
    - [ ] item 1
    "#

    single_item r#"
    - [x] item 1
    "# => r#"
    ## Archived

    - [x] item 1
    "#

    multiple_items r#"
    - [x] item 1
    - [x] item 2
    - [ ] item 3
    "# => r#"
    - [ ] item 3

    ## Archived

    - [x] item 1
    - [x] item 2
    "#

    items_with_open_children_stay r#"
    - [x] item 1
        - [x] item 1.1
        - [x] item 1.2
    - [x] item 2
        - [ ] item 2.1
    - [ ] item 3
    "# => r#"
    - [x] item 2
        - [ ] item 2.1
    - [ ] item 3

    ## Archived

    - [x] item 1
        - [x] item 1.1
        - [x] item 1.2
    "#

    plain_parents_are_never_complete r#"
    - [x] item 1
        1. [x] item 1.1
        2. [x] item 1.2
    - collection
        - [x] item 2.1
        - [ ] item 2.2
    - second collection
        - [x] item 3.1
        - [x] item 3.2
    - [ ] item 4
    "# => r#"
    - collection
        - [x] item 2.1
        - [ ] item 2.2
    - second collection
        - [x] item 3.1
        - [x] item 3.2
    - [ ] item 4

    ## Archived

    - [x] item 1
        1. [x] item 1.1
        2. [x] item 1.2
    "#

    non_todo_lists_stay r#"
    - [x] item 1
        1. [x] item 1.1
        2. [x] item 1.2
    - collection
        - stuff
        - more stuff
    "# => r#"
    - collection
        - stuff
        - more stuff

    ## Archived

    - [x] item 1
        1. [x] item 1.1
        2. [x] item 1.2
    "#

    prepends_to_existing_archive r#"
    - [ ] 1
    - [ ] 2
    - [x] 3
        - [x] 3.1
    - [ ] 4
    - [x] 5

    ## Archived

    - [x] a1
    - [x] a2
    - [x] a3
        - [x] a3.1
    - [x] a4
    "# => r#"
    - [ ] 1
    - [ ] 2
    - [ ] 4

    ## Archived

    - [x] 3
        - [x] 3.1
    - [x] 5
    - [x] a1
    - [x] a2
    - [x] a3
        - [x] a3.1
    - [x] a4
    "#

    heading_without_list_gets_one r#"
    # Notes
    - [x] a

    ## Archived

    Some text
    "# => r#"
    # Notes

    ## Archived

    - [x] a

    Some text
    "#

    ordered_lists_archive_into_ordered_list r#"
    1. [x] a
    2. [ ] b
    "# => r#"
    1. [ ] b

    ## Archived

    1. [x] a
    "#

    items_from_several_lists r#"
    - [x] a
    - [ ] b

    # Mid

    - [x] c
    "# => r#"
    - [ ] b

    # Mid

    ## Archived

    - [x] a
    - [x] c
    "#

    frontmatter_is_kept r#"
    ---
    title: t
    ---
    - [x] a
    "# => r#"
    ---
    title: t
    ---

    ## Archived

    - [x] a
    "#

    heading_followed_by_indented_code r#"
    - [x] done

    ## Archived

        code line
    "# => r#"
    ## Archived

    - [x] done

    ```
    code line
    ```
    "#

    heading_followed_by_text r#"
    - [x] done

    ## Archived
    Some text
    "# => r#"
    ## Archived

    - [x] done

    Some text
    "#
}

#[test]
fn test_lists_inside_archive_section_are_not_archived_again() {
    let md = indoc! {"
        - [ ] open

        # Archived

        - [x] old

        ## Sub

        - [x] inside
    "};
    let report = archive_with_report(&parse(md), &ArchiveRules::default());
    assert_eq!(report.archived, 0);
    assert_eq!(report.document, parse(md));
}

#[test]
fn test_indented_list_under_archive_heading_stays_code() {
    let md = "- [x] done\n### Deep ##\n## Archived\n    - [x] nested done\n\n";
    let once = process(md, Operation::FormatArchive);
    assert_eq!(
        once,
        indoc! {"
            ### Deep

            ## Archived

            - [x] done

            ```
            - [x] nested done
            ```
        "}
    );
    assert_eq!(process(&once, Operation::FormatArchive), once);
}

#[test]
fn test_archive_alone_keeps_following_text_apart() {
    let archived = process("- [x] done\n\n## Archived\nSome text\n", Operation::Archive);
    let doc = parse(&archived);
    let items: Vec<_> = doc.lists().flat_map(|list| list.items.iter()).collect();
    assert_eq!(items.len(), 1);
    assert!(items[0].continuation.is_empty());
    assert!(doc
        .blocks
        .iter()
        .any(|block| matches!(block, Block::Paragraph(p) if p.lines == ["Some text"])));
}

#[test]
fn test_archive_alone_does_not_reformat() {
    let md = "- [x] a\n- [ ]   b  \n";
    assert_eq!(
        process(md, Operation::Archive),
        "- [ ] b  \n\n## Archived\n\n- [x] a\n"
    );
}

#[test]
fn test_custom_archive_heading() {
    let rules = ArchiveRules {
        heading: "Done".to_string(),
        heading_level: 3,
    };
    let report = archive_with_report(&parse("- [x] a\n- [ ] b\n"), &rules);
    assert_eq!(report.archived, 1);
    assert_eq!(
        mdvault_engine::render(&report.document),
        "- [ ] b\n\n### Done\n\n- [x] a\n"
    );
}

#[test]
fn test_input_document_is_not_modified() {
    let doc = parse("- [x] a\n");
    let before = doc.clone();
    let _ = archive_with_report(&doc, &ArchiveRules::default());
    assert_eq!(doc, before);
}

const CHECKLIST: &str = indoc! {"
    - [x] top level
        - [x] nested
        - [ ] nested not done
    - [ ] not done
    - [x] totally
        - [x] done

    ## Archived

    - [x] done
    - [x] also done
"};

#[test]
fn test_checklist_scenario_before_checking() {
    assert_eq!(
        process(CHECKLIST, Operation::FormatArchive),
        indoc! {"
            - [x] top level
                - [x] nested
                - [ ] nested not done
            - [ ] not done

            ## Archived

            - [x] totally
                - [x] done
            - [x] done
            - [x] also done
        "}
    );
}

#[test]
fn test_checklist_scenario_with_older_archive_entries() {
    let md = indoc! {"
        - [x] top level
            - [x] nested
            - [x] nested not done
        - [ ] not done

        ## Archived

        - [x] done
        - [x] also done
        - [x] totally
            - [x] done
    "};
    assert_eq!(
        process(md, Operation::FormatArchive),
        indoc! {"
            - [ ] not done

            ## Archived

            - [x] top level
                - [x] nested
                - [x] nested not done
            - [x] done
            - [x] also done
            - [x] totally
                - [x] done
        "}
    );
}

#[test]
fn test_checklist_scenario_after_checking() {
    let checked = CHECKLIST.replace("[ ] nested not done", "[x] nested not done");
    let expected = indoc! {"
        - [ ] not done

        ## Archived

        - [x] top level
            - [x] nested
            - [x] nested not done
        - [x] totally
            - [x] done
        - [x] done
        - [x] also done
    "};
    assert_eq!(process(&checked, Operation::FormatArchive), expected);

    // archiving in two steps ends in the same place
    let first = process(CHECKLIST, Operation::FormatArchive);
    let second = first.replace("[ ] nested not done", "[x] nested not done");
    assert_eq!(process(&second, Operation::FormatArchive), expected);
}
