//! # doctree_rst
//!
//! A serializer from parsed document trees to reStructuredText (RST) markup.
//!
//! ## What is a document tree?
//!
//! The element/attribute/text shape a `docutils`-style parser produces:
//! `section` and `paragraph` elements, `bullet_list`s carrying a `bullet`
//! attribute, `emphasis` spans, text leaves. This library walks such a tree
//! once and writes it back out as RST source with exact, deterministic
//! spacing — the kind of output you can commit, diff, and re-parse.
//!
//! ## Key Features
//!
//! - **Single-pass rendering**: one depth-first walk with an explicit work
//!   stack; no recursion, no post-processing reorder
//! - **Exact spacing**: blank-line and indentation rules are deterministic,
//!   so equal trees always produce equal bytes
//! - **Deferred roles**: classed inline spans become `:name:` role
//!   applications with their `.. role::` declarations collected at the end
//! - **Grid tables**: table subtrees render as `+---+` grids with declared
//!   column-width floors
//! - **Serde Compatible**: trees deserialize from the nested
//!   `{tag, attrs, children}` object form via `#[derive(Deserialize)]`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! doctree-rst = "0.1"
//! ```
//!
//! ### Basic Rendering
//!
//! ```rust
//! use doctree_rst::{doctree, to_string};
//!
//! let tree = doctree!(document [
//!     section [
//!         title [ "Intro" ],
//!         paragraph [ "Hello." ],
//!     ],
//! ]);
//!
//! let rst = to_string(&tree).unwrap();
//! assert_eq!(rst, "Intro\n=====\n\nHello.\n");
//! ```
//!
//! ### Building Trees Node by Node
//!
//! ```rust
//! use doctree_rst::{to_string, Doctree};
//!
//! let mut tree = Doctree::new();
//! let section = tree.add_element(tree.root(), "section");
//! let title = tree.add_element(section, "title");
//! tree.add_text(title, "Builder");
//! let para = tree.add_element(section, "paragraph");
//! tree.add_text(para, "Node by node.");
//!
//! let rst = to_string(&tree).unwrap();
//! assert!(rst.starts_with("Builder\n======="));
//! ```
//!
//! ### Trees over the Wire
//!
//! A tree deserializes from the nested object form, so a parser on the other
//! side of a pipe or a queue only has to emit JSON:
//!
//! ```rust
//! use doctree_rst::{to_string, Doctree};
//!
//! let tree: Doctree = serde_json::from_str(
//!     r#"{
//!         "tag": "document",
//!         "children": [
//!             { "tag": "paragraph", "children": [ { "text": "Parsed upstream." } ] }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(to_string(&tree).unwrap(), "Parsed upstream.\n");
//! ```
//!
//! ### Custom Options
//!
//! ```rust
//! use doctree_rst::{doctree, to_string_with_options, RstOptions};
//!
//! let tree = doctree!(document [ section [ title [ "Wide" ] ] ]);
//! let options = RstOptions::new().with_section_adornments(vec!['#', '*']);
//! let rst = to_string_with_options(&tree, options).unwrap();
//! assert!(rst.starts_with("Wide\n####"));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Rendering**: O(n) in the number of nodes; each node is entered and
//!   exited exactly once
//! - **Separation decisions**: O(1) via a cached trailing-whitespace run;
//!   no rescans of accumulated output
//! - **Memory**: the work stack and context stack are bounded by tree depth
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API; malformed trees surface as [`Error`]
//! - Rendering is all-or-nothing: an error returns no partial output
//!
//! ## Output Dialect
//!
//! For the exact constructs and spacing rules of the emitted markup, see the
//! [`spec`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable walkthroughs:
//!
//! - **`simple.rs`** - Your first render (sections, paragraphs, lists)
//! - **`macro.rs`** - Building trees with the doctree! macro
//! - **`tree_from_json.rs`** - Deserializing a tree and rendering it
//! - **`inline_roles.rs`** - Classed spans and deferred role declarations
//! - **`grid_tables.rs`** - Table subtrees as grid tables
//! - **`custom_options.rs`** - Indents, palettes, and escaping
//!
//! Run any example with: `cargo run --example <name>`

pub mod attrs;
mod buffer;
mod context;
pub mod error;
mod inline;
pub mod macros;
pub mod node;
pub mod options;
pub mod spec;
mod table;
pub mod tag;
pub mod writer;

pub use attrs::{AttrValue, Attributes};
pub use error::{Error, Result};
pub use node::{Children, Doctree, Node, NodeId, NodeKind};
pub use options::RstOptions;
pub use tag::{AdmonitionKind, DirectiveKind, DocinfoField, Tag};
pub use writer::RstWriter;

use std::io;

/// Renders a document tree to a reStructuredText string.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::{doctree, to_string};
///
/// let tree = doctree!(document [ paragraph [ "Hello." ] ]);
/// assert_eq!(to_string(&tree).unwrap(), "Hello.\n");
/// ```
///
/// # Errors
///
/// Returns an error if the tree contains a node the writer cannot render
/// (e.g., an unknown tag or a malformed attribute).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(tree: &Doctree) -> Result<String> {
    to_string_with_options(tree, RstOptions::default())
}

/// Renders a document tree to a reStructuredText string with custom options.
///
/// Allows customization of indents, the section adornment palette, and
/// inline escaping.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::{doctree, to_string_with_options, RstOptions};
///
/// let tree = doctree!(document [ section [ title [ "News" ] ] ]);
/// let options = RstOptions::new().with_section_adornments(vec!['#']);
/// let rst = to_string_with_options(&tree, options).unwrap();
/// assert_eq!(rst, "News\n####\n");
/// ```
///
/// # Errors
///
/// Returns an error if the tree contains a node the writer cannot render.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(tree: &Doctree, options: RstOptions) -> Result<String> {
    RstWriter::new(tree, options).render()
}

/// Renders a document tree as reStructuredText into a writer.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::{doctree, to_writer};
///
/// let tree = doctree!(document [ paragraph [ "Hello." ] ]);
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tree).unwrap();
/// assert_eq!(buffer, b"Hello.\n");
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, tree: &Doctree) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, tree, RstOptions::default())
}

/// Renders a document tree as reStructuredText into a writer with custom
/// options.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, tree: &Doctree, options: RstOptions) -> Result<()>
where
    W: io::Write,
{
    let rst = to_string_with_options(tree, options)?;
    writer
        .write_all(rst.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
