//! Building document trees with the doctree! macro.
//!
//! Run with: cargo run --example macro

use doctree_rst::{doctree, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Elements are bare names, attributes sit in braces, children in brackets
    let tree = doctree!(document [
        section [
            title [ "Weekly report" ],
            paragraph [ "Highlights from ", emphasis [ "this" ], " week." ],
            enumerated_list { "enumtype": "arabic", "start": 1 } [
                list_item [ paragraph [ "Shipped the parser." ] ],
                list_item [ paragraph [ "Fixed the cache." ] ],
            ],
        ],
    ]);

    println!("Nodes in the tree: {}\n", tree.node_count());

    let rst = to_string(&tree)?;
    println!("RST output:\n{}", rst);

    assert!(rst.contains("1. Shipped the parser."));
    assert!(rst.contains("2. Fixed the cache."));
    println!("✓ Enumerated markers count up from the start attribute");

    Ok(())
}
