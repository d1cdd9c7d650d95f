//! Error types for document-tree serialization.
//!
//! Every failure that can arise while walking a tree carries enough context
//! to locate the offending node without re-running the walk.
//!
//! ## Error Categories
//!
//! - **Unsupported nodes**: a tag kind outside the writer's taxonomy
//! - **Malformed attributes**: an attribute value outside its expected set
//! - **Adornment exhaustion**: sections nested deeper than the palette
//! - **Context underflow**: a formatting-state lookup with no enclosing frame
//! - **I/O Errors**: failures in the `to_writer` convenience layer
//!
//! ## Error Context
//!
//! Tree-walk errors include:
//! - The tag name of the node being visited
//! - The ancestor path from the root, rendered as `document/section/...`
//!
//! ## Examples
//!
//! ```rust
//! use doctree_rst::{doctree, to_string, Error};
//!
//! let tree = doctree!(document [ mystery [ "?" ] ]);
//! match to_string(&tree) {
//!     Err(Error::UnsupportedNodeKind { tag, path }) => {
//!         assert_eq!(tag, "mystery");
//!         assert_eq!(path, "document/mystery");
//!     }
//!     other => panic!("expected UnsupportedNodeKind, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while rendering a document
/// tree.
///
/// Rendering is all-or-nothing: a failed call returns no partial output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Tag kind matched neither the dispatch table nor any catch-all category
    #[error("unsupported node kind `{tag}` at {path}")]
    UnsupportedNodeKind { tag: String, path: String },

    /// Attribute value outside its expected closed set
    #[error("malformed attribute `{name}` = `{value}` on <{tag}> at {path}")]
    MalformedAttribute {
        name: String,
        value: String,
        tag: String,
        path: String,
    },

    /// Section nesting deeper than the configured adornment palette
    #[error(
        "section adornments exhausted at {path}: depth {depth} with {available} adornment(s) configured"
    )]
    AdornmentExhausted {
        depth: usize,
        available: usize,
        path: String,
    },

    /// Formatting-state lookup found no frame defining the slot
    #[error("context underflow at {path}: no enclosing frame defines `{slot}`")]
    ContextUnderflow { slot: String, path: String },

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an error for a tag kind the writer does not know.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_rst::Error;
    ///
    /// let err = Error::unsupported_node("mystery", "document/section");
    /// assert!(err.to_string().contains("mystery"));
    /// ```
    pub fn unsupported_node(tag: &str, path: impl Into<String>) -> Self {
        Error::UnsupportedNodeKind {
            tag: tag.to_string(),
            path: path.into(),
        }
    }

    /// Creates an error for an attribute value outside its expected set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_rst::Error;
    ///
    /// let err = Error::malformed_attribute(
    ///     "enumtype",
    ///     "hexadecimal",
    ///     "enumerated_list",
    ///     "document/enumerated_list",
    /// );
    /// assert!(err.to_string().contains("enumtype"));
    /// ```
    pub fn malformed_attribute(
        name: &str,
        value: &str,
        tag: &str,
        path: impl Into<String>,
    ) -> Self {
        Error::MalformedAttribute {
            name: name.to_string(),
            value: value.to_string(),
            tag: tag.to_string(),
            path: path.into(),
        }
    }

    /// Creates an error for section nesting past the adornment palette.
    pub fn adornment_exhausted(depth: usize, available: usize, path: impl Into<String>) -> Self {
        Error::AdornmentExhausted {
            depth,
            available,
            path: path.into(),
        }
    }

    /// Creates an error for a context-stack lookup with no matching frame.
    ///
    /// This always indicates a dispatch bug rather than bad input; the slot
    /// name identifies which piece of formatting state was missing.
    pub fn context_underflow(slot: &str, path: impl Into<String>) -> Self {
        Error::ContextUnderflow {
            slot: slot.to_string(),
            path: path.into(),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
