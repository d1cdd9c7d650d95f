//! Classed inline spans and deferred role declarations.
//!
//! Run with: cargo run --example inline_roles

use doctree_rst::{doctree, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = doctree!(document [
        paragraph [
            "Press ",
            inline { "classes": ["kbd"] } [ "Ctrl" ],
            " and open ",
            emphasis { "classes": ["filename"] } [ "notes.txt" ],
            ".",
        ],
    ]);

    let rst = to_string(&tree)?;
    println!("RST output:\n{}", rst);

    // Declarations flush after the body, in first-use order
    assert!(rst.contains(":kbd:`Ctrl`"));
    assert!(rst.contains(".. role:: kbd"));
    assert!(rst.contains(".. role:: filename(emphasis)"));
    println!("✓ Every applied role is declared");

    Ok(())
}
