//! Customizing output with RstOptions.
//!
//! Run with: cargo run --example custom_options

use doctree_rst::{doctree, to_string, to_string_with_options, RstOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tree = doctree!(document [
        section [
            title [ "Options" ],
            paragraph [ "Escaping keeps 2 * 3 literal." ],
        ],
    ]);

    // Default: '=' titles, escaping on
    println!("Default:");
    println!("{}", to_string(&tree)?);

    // A different adornment palette
    println!("Palette '#', '*':");
    let palette = RstOptions::new().with_section_adornments(vec!['#', '*']);
    println!("{}", to_string_with_options(&tree, palette)?);

    // Escaping off: markup characters pass through untouched
    println!("Escaping off:");
    let raw = RstOptions::new().with_escape_text(false);
    println!("{}", to_string_with_options(&tree, raw)?);

    // Wider indent for quoted and definition bodies
    println!("Four-space indent:");
    let quote = doctree!(document [
        paragraph [ "He said:" ],
        block_quote [ paragraph [ "Quoted." ] ],
    ]);
    let wide = RstOptions::new().with_indent("    ");
    println!("{}", to_string_with_options(&quote, wide)?);

    Ok(())
}
