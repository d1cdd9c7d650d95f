//! Rendering table subtrees as grid tables.
//!
//! Run with: cargo run --example grid_tables

use doctree_rst::{doctree, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = doctree!(document [
        table [
            title [ "Team" ],
            tgroup [
                colspec { "colwidth": 10 },
                colspec { "colwidth": 6 },
                thead [
                    row [
                        entry [ paragraph [ "Name" ] ],
                        entry [ paragraph [ "Role" ] ],
                    ],
                ],
                tbody [
                    row [
                        entry [ paragraph [ "Alice" ] ],
                        entry [ paragraph [ "admin" ] ],
                    ],
                    row [
                        entry [ paragraph [ "Bob" ] ],
                        entry [ paragraph [ "guest" ] ],
                    ],
                ],
            ],
        ],
    ]);

    let rst = to_string(&tree)?;
    println!("RST output:\n{}", rst);

    // Declared column widths set the floor; the head rule uses `=`
    assert!(rst.contains(".. table:: Team"));
    assert!(rst.contains("+="));
    println!("✓ Grid rows line up under the declared widths");

    Ok(())
}
