//! Property-based tests - pragmatic approach testing rendering guarantees
//!
//! These tests complement the 50+ integration tests by verifying spacing,
//! numbering, and round-trip rules across generated inputs. Focus is on
//! common document shapes.

use doctree_rst::{to_string, Doctree, Error};
use proptest::prelude::*;

fn paragraphs(words: &[String]) -> Doctree {
    let mut tree = Doctree::new();
    for word in words {
        let para = tree.add_element(tree.root(), "paragraph");
        tree.add_text(para, word.clone());
    }
    tree
}

fn nested_sections(depth: usize) -> Doctree {
    let mut tree = Doctree::new();
    let mut parent = tree.root();
    for _ in 0..depth {
        let section = tree.add_element(parent, "section");
        let title = tree.add_element(section, "title");
        tree.add_text(title, "T");
        parent = section;
    }
    let para = tree.add_element(parent, "paragraph");
    tree.add_text(para, "Body.");
    tree
}

fn renders_same_after_json(tree: &Doctree) -> bool {
    let first = match to_string(tree) {
        Ok(rst) => rst,
        Err(e) => {
            eprintln!("Render failed: {}", e);
            return false;
        }
    };
    let json = match serde_json::to_string(tree) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            return false;
        }
    };
    match serde_json::from_str::<Doctree>(&json) {
        Ok(back) => match to_string(&back) {
            Ok(second) if second == first => true,
            Ok(second) => {
                eprintln!("Re-render differed.\nFirst:\n{}\nSecond:\n{}", first, second);
                false
            }
            Err(e) => {
                eprintln!("Re-render failed: {}", e);
                false
            }
        },
        Err(e) => {
            eprintln!("Deserialize failed: {}", e);
            eprintln!("JSON was: {}", json);
            false
        }
    }
}

proptest! {
    // Spacing rules
    #[test]
    fn prop_paragraph_text_renders_as_a_line(text in "[a-z][a-z0-9 ]{0,39}") {
        let tree = paragraphs(&[text.clone()]);
        prop_assert_eq!(to_string(&tree).unwrap(), format!("{}\n", text.trim_end()));
    }

    #[test]
    fn prop_sibling_paragraphs_get_blank_lines(
        words in prop::collection::vec("[a-z]{1,10}", 1..8)
    ) {
        let tree = paragraphs(&words);
        prop_assert_eq!(to_string(&tree).unwrap(), format!("{}\n", words.join("\n\n")));
    }

    // Section adornments
    #[test]
    fn prop_sections_render_within_the_palette(depth in 1usize..=8) {
        let palette = ['=', '-', '~', '^', '+', '"', '\'', '_'];
        let mut expected = String::new();
        for level in 0..depth {
            expected.push_str(&format!("T\n{}\n\n", palette[level]));
        }
        expected.push_str("Body.\n");
        prop_assert_eq!(to_string(&nested_sections(depth)).unwrap(), expected);
    }

    #[test]
    fn prop_sections_beyond_the_palette_fail(depth in 9usize..=14) {
        match to_string(&nested_sections(depth)) {
            Err(Error::AdornmentExhausted { depth: at, available, .. }) => {
                prop_assert_eq!(at, 9);
                prop_assert_eq!(available, 8);
            }
            other => prop_assert!(false, "Expected AdornmentExhausted, got {:?}", other),
        }
    }

    // List markers
    #[test]
    fn prop_enumerated_markers_honor_the_start(
        start in 1i64..=40,
        words in prop::collection::vec("[a-z]{1,10}", 1..6)
    ) {
        let mut tree = Doctree::new();
        let list = tree.add_element(tree.root(), "enumerated_list");
        tree.set_attr(list, "enumtype", "arabic");
        tree.set_attr(list, "start", start);
        for word in &words {
            let item = tree.add_element(list, "list_item");
            let para = tree.add_element(item, "paragraph");
            tree.add_text(para, word.clone());
        }

        let lines: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, word)| format!("{}. {}", start + i as i64, word))
            .collect();
        prop_assert_eq!(to_string(&tree).unwrap(), format!("{}\n", lines.join("\n")));
    }

    #[test]
    fn prop_bullet_item_bodies_indent_under_the_marker(
        bullet in prop::sample::select(vec!["-", "*", "+"]),
        first in "[a-z]{1,10}",
        second in "[a-z]{1,10}"
    ) {
        let mut tree = Doctree::new();
        let list = tree.add_element(tree.root(), "bullet_list");
        tree.set_attr(list, "bullet", bullet);
        let item = tree.add_element(list, "list_item");
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, first.clone());
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, second.clone());

        prop_assert_eq!(
            to_string(&tree).unwrap(),
            format!("{} {}\n\n  {}\n", bullet, first, second)
        );
    }

    // Round trips and ordering
    #[test]
    fn prop_rendering_is_deterministic(
        words in prop::collection::vec("[a-z]{1,10}", 1..6)
    ) {
        let tree = paragraphs(&words);
        prop_assert_eq!(to_string(&tree).unwrap(), to_string(&tree).unwrap());
    }

    #[test]
    fn prop_a_json_round_trip_preserves_the_rendering(
        title in "[a-z]{1,10}",
        words in prop::collection::vec("[a-z]{1,10}", 1..5),
        start in 1i64..=20
    ) {
        let mut tree = Doctree::new();
        let section = tree.add_element(tree.root(), "section");
        let heading = tree.add_element(section, "title");
        tree.add_text(heading, title);
        for word in &words {
            let para = tree.add_element(section, "paragraph");
            tree.add_text(para, word.clone());
        }
        let list = tree.add_element(section, "enumerated_list");
        tree.set_attr(list, "enumtype", "arabic");
        tree.set_attr(list, "start", start);
        let item = tree.add_element(list, "list_item");
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, "numbered");

        prop_assert!(renders_same_after_json(&tree));
    }

    #[test]
    fn prop_anonymous_roles_number_in_traversal_order(count in 1usize..6) {
        let mut tree = Doctree::new();
        let para = tree.add_element(tree.root(), "paragraph");
        for i in 0..count {
            let span = tree.add_element(para, "inline");
            tree.set_attr(span, "classes", vec!["emphasis".to_string()]);
            tree.add_text(span, "x");
            if i + 1 < count {
                tree.add_text(para, " ");
            }
        }

        let rst = to_string(&tree).unwrap();
        let mut last = 0;
        for k in 1..=count {
            let needle = format!(".. role:: inline_role{}(emphasis)", k);
            let at = rst.find(&needle);
            prop_assert!(at.is_some(), "Missing declaration: {}", needle);
            let at = at.unwrap();
            prop_assert!(at >= last, "Declarations out of order at {}", needle);
            last = at;
        }
    }
}
