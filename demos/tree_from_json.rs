//! Deserializing a tree from JSON and rendering it.
//!
//! Run with: cargo run --example tree_from_json

use doctree_rst::{to_string, Doctree};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The nested object form an upstream parser would emit
    let json = r#"{
        "tag": "document",
        "children": [
            {
                "tag": "section",
                "children": [
                    { "tag": "title", "children": [ { "text": "From JSON" } ] },
                    {
                        "tag": "paragraph",
                        "children": [ { "text": "Parsed upstream, rendered here." } ]
                    },
                    {
                        "tag": "bullet_list",
                        "attrs": { "bullet": "*" },
                        "children": [
                            {
                                "tag": "list_item",
                                "children": [
                                    {
                                        "tag": "paragraph",
                                        "children": [ { "text": "no schema required" } ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let tree: Doctree = serde_json::from_str(json)?;
    println!("Parsed {} nodes\n", tree.node_count());

    let rst = to_string(&tree)?;
    println!("RST output:\n{}", rst);

    // The tree serializes back to the same nested shape
    let round = serde_json::to_string_pretty(&tree)?;
    println!("Serialized again:\n{}", round);

    Ok(())
}
