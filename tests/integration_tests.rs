use doctree_rst::{
    doctree, to_string, to_string_with_options, to_writer, Doctree, Error, RstOptions,
};

/// A small article exercising most block constructs at once.
fn article() -> Doctree {
    doctree!(document [
        section [
            title [ "Release notes" ],
            paragraph [ "Highlights of the cycle." ],
            bullet_list { "bullet": "-" } [
                list_item [ paragraph [ "Faster startup." ] ],
                list_item [ paragraph [ "Fewer crashes." ] ]
            ],
            comment [ "drafted by the release bot" ],
            transition,
            paragraph [
                "Details in the changelog",
                footnote_reference [ "1" ],
                "."
            ],
            footnote [ label [ "1" ], paragraph [ "Shipped with 2.0." ] ]
        ]
    ])
}

#[test]
fn test_simple_document() {
    let tree = doctree!(document [
        section [
            title [ "Overview" ],
            paragraph [ "First." ],
            paragraph [ "Second." ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Simple document:\n{}", rst);

    assert_eq!(rst, "Overview\n========\n\nFirst.\n\nSecond.\n");
}

#[test]
fn test_full_article() {
    let rst = to_string(&article()).unwrap();
    println!("Article:\n{}", rst);

    assert!(rst.starts_with("Release notes\n=============\n\n"));
    assert!(rst.contains("- Faster startup.\n- Fewer crashes.\n"));
    assert!(rst.contains(".. drafted by the release bot"));
    assert!(rst.contains("\n----\n"));
    assert!(rst.contains("Details in the changelog[1]_."));
    assert!(rst.contains(".. [1] Shipped with 2.0."));
}

#[test]
fn test_nested_sections() {
    let tree = doctree!(document [
        section [
            title [ "Top" ],
            paragraph [ "a" ],
            section [
                title [ "Mid" ],
                paragraph [ "b" ]
            ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    assert_eq!(rst, "Top\n===\n\na\n\nMid\n---\n\nb\n");
}

#[test]
fn test_nested_lists_indent_under_the_marker() {
    let tree = doctree!(document [
        bullet_list { "bullet": "-" } [
            list_item [
                paragraph [ "top" ],
                bullet_list { "bullet": "*" } [
                    list_item [ paragraph [ "inner" ] ]
                ]
            ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Nested lists:\n{}", rst);

    assert_eq!(rst, "- top\n\n  * inner\n");
}

#[test]
fn test_enumerated_list_with_start_offset() {
    let tree = doctree!(document [
        enumerated_list { "enumtype": "arabic", "start": 3 } [
            list_item [ paragraph [ "three" ] ],
            list_item [ paragraph [ "four" ] ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    assert_eq!(rst, "3. three\n4. four\n");
}

#[test]
fn test_definition_list() {
    let tree = doctree!(document [
        definition_list [
            definition_list_item [
                term [ "API" ],
                classifier [ "noun" ],
                definition [ paragraph [ "A contract." ] ]
            ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Definition list:\n{}", rst);

    assert_eq!(rst, "API : noun\n  A contract.\n");
}

#[test]
fn test_field_list() {
    let tree = doctree!(document [
        field_list [
            field [
                field_name [ "Tags" ],
                field_body [ paragraph [ "rust" ] ]
            ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    assert_eq!(rst, ":Tags: rust\n");
}

#[test]
fn test_docinfo_fields() {
    let tree = doctree!(document [
        docinfo [
            author [ "Jane Doe" ],
            status [ "draft" ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Docinfo:\n{}", rst);

    assert_eq!(rst, ":Author: Jane Doe\n:Status: draft\n");
}

#[test]
fn test_block_quote_with_attribution() {
    let tree = doctree!(document [
        paragraph [ "He said:" ],
        block_quote [
            paragraph [ "Quoted." ],
            attribution [ "A Poet" ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Block quote:\n{}", rst);

    assert_eq!(rst, "He said:\n\n  Quoted.\n\n  -- A Poet\n");
}

#[test]
fn test_epigraph_classed_quote_becomes_a_directive() {
    let tree = doctree!(document [
        block_quote { "classes": ["epigraph"] } [
            paragraph [ "So it goes." ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    assert_eq!(rst, ".. epigraph::\n\n   So it goes.\n");
}

#[test]
fn test_admonitions() {
    let note = doctree!(document [
        note [ paragraph [ "Mind the gap." ] ]
    ]);
    assert_eq!(to_string(&note).unwrap(), ".. note::\n\n   Mind the gap.\n");

    let titled = doctree!(document [
        admonition [
            title [ "Heads up" ],
            paragraph [ "Detail." ]
        ]
    ]);
    assert_eq!(
        to_string(&titled).unwrap(),
        ".. admonition:: Heads up\n\n   Detail.\n"
    );
}

#[test]
fn test_image_and_figure() {
    let image = doctree!(document [ image { "uri": "logo.png" } ]);
    assert_eq!(to_string(&image).unwrap(), ".. image:: logo.png\n");

    let figure = doctree!(document [
        figure [
            image { "uri": "chart.png" },
            caption [ "Growth" ]
        ]
    ]);
    assert_eq!(
        to_string(&figure).unwrap(),
        ".. figure:: chart.png\n\n  Growth\n"
    );
}

#[test]
fn test_figure_with_linked_image() {
    let tree = doctree!(document [
        figure [
            reference { "refuri": "https://example.org" } [
                image { "uri": "chart.png" }
            ],
            caption [ "Growth" ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    println!("Linked figure:\n{}", rst);

    assert_eq!(
        rst,
        ".. figure:: chart.png\n  :target: https://example.org\n\n  Growth\n"
    );
}

#[test]
fn test_abstract_topic_renders_as_a_field_label() {
    let tree = doctree!(document [
        topic { "classes": ["abstract"] } [
            title [ "Abstract" ],
            paragraph [ "Summary." ]
        ]
    ]);

    let rst = to_string(&tree).unwrap();
    assert_eq!(rst, ":Abstract:\n\n  Summary.\n");
}

#[test]
fn test_contents_topic_is_skipped() {
    let tree = doctree!(document [
        topic { "classes": ["contents"] } [
            title [ "Contents" ],
            bullet_list { "bullet": "*" } [
                list_item [ paragraph [ "entry" ] ]
            ]
        ]
    ]);

    // A generated table of contents has no source form
    assert_eq!(to_string(&tree).unwrap(), "");
}

#[test]
fn test_tree_from_json_fixture() {
    let json = r#"{
        "tag": "document",
        "children": [
            {
                "tag": "section",
                "children": [
                    { "tag": "title", "children": [ { "text": "From JSON" } ] },
                    { "tag": "paragraph", "children": [ { "text": "Parsed and rendered." } ] }
                ]
            }
        ]
    }"#;

    let tree: Doctree = serde_json::from_str(json).unwrap();
    let rst = to_string(&tree).unwrap();
    println!("From JSON:\n{}", rst);

    assert_eq!(rst, "From JSON\n=========\n\nParsed and rendered.\n");
}

#[test]
fn test_tree_survives_a_json_round_trip() {
    let tree = article();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Doctree = serde_json::from_str(&json).unwrap();

    assert_eq!(back.node_count(), tree.node_count());
    assert_eq!(to_string(&back).unwrap(), to_string(&tree).unwrap());
}

#[test]
fn test_to_writer_matches_to_string() {
    let tree = article();
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &tree).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&tree).unwrap());
}

#[test]
fn test_empty_document() {
    let tree = doctree!(document);
    assert_eq!(to_string(&tree).unwrap(), "");
}

#[test]
fn test_custom_indent_and_palette() {
    let tree = doctree!(document [
        section [
            title [ "T" ],
            bullet_list { "bullet": "*" } [
                list_item [
                    paragraph [ "first" ],
                    paragraph [ "second" ]
                ]
            ]
        ]
    ]);

    let options = RstOptions::new().with_section_adornments(vec!['#', '*']);
    let rst = to_string_with_options(&tree, options).unwrap();
    println!("Custom options:\n{}", rst);

    assert!(rst.starts_with("T\n#\n\n"));
    assert!(rst.contains("* first\n\n  second\n"));
}

#[test]
fn test_unknown_tag_fails_with_path() {
    let tree = doctree!(document [ section [ title [ "T" ], sparkline [ "?" ] ] ]);

    match to_string(&tree) {
        Err(Error::UnsupportedNodeKind { tag, path }) => {
            assert_eq!(tag, "sparkline");
            assert_eq!(path, "document/section/sparkline");
        }
        other => panic!("expected UnsupportedNodeKind, got {:?}", other),
    }
}

#[test]
fn test_missing_bullet_is_malformed() {
    let tree = doctree!(document [
        bullet_list [ list_item [ paragraph [ "x" ] ] ]
    ]);

    match to_string(&tree) {
        Err(Error::MalformedAttribute { name, tag, .. }) => {
            assert_eq!(name, "bullet");
            assert_eq!(tag, "bullet_list");
        }
        other => panic!("expected MalformedAttribute, got {:?}", other),
    }
}

#[test]
fn test_unknown_enumtype_is_malformed() {
    let tree = doctree!(document [
        enumerated_list { "enumtype": "hexadecimal" } [
            list_item [ paragraph [ "x" ] ]
        ]
    ]);

    match to_string(&tree) {
        Err(Error::MalformedAttribute { name, value, .. }) => {
            assert_eq!(name, "enumtype");
            assert_eq!(value, "hexadecimal");
        }
        other => panic!("expected MalformedAttribute, got {:?}", other),
    }
}

#[test]
fn test_failure_returns_no_partial_output() {
    // The bad node sits after renderable content; the caller still sees
    // only the error.
    let tree = doctree!(document [
        paragraph [ "Fine." ],
        sparkline [ "?" ]
    ]);

    let result = to_string(&tree);
    assert!(result.is_err());
}
