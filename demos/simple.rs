//! Building a document tree and rendering it as reStructuredText.
//!
//! Run with: cargo run --example simple

use doctree_rst::{to_string, Doctree};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut tree = Doctree::new();
    let section = tree.add_element(tree.root(), "section");
    let title = tree.add_element(section, "title");
    tree.add_text(title, "Getting started");
    let para = tree.add_element(section, "paragraph");
    tree.add_text(para, "Build a tree node by node, then render it.");
    let list = tree.add_element(section, "bullet_list");
    tree.set_attr(list, "bullet", "-");
    for step in ["Add elements.", "Add text.", "Render."] {
        let item = tree.add_element(list, "list_item");
        let para = tree.add_element(item, "paragraph");
        tree.add_text(para, step);
    }

    // Render to RST
    let rst = to_string(&tree)?;
    println!("RST output:\n{}", rst);

    assert!(rst.starts_with("Getting started\n==============="));
    println!("✓ Title underline matches the title width");

    Ok(())
}
