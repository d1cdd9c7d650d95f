//! Configuration options for reStructuredText output.
//!
//! This module provides [`RstOptions`], the knobs for the rendered markup:
//!
//! - indent unit for nested block content
//! - extra indent for directive and literal-block bodies
//! - the section adornment palette, ordered by nesting depth
//! - inline-text escaping
//!
//! ## Examples
//!
//! ```rust
//! use doctree_rst::{doctree, to_string_with_options, RstOptions};
//!
//! let tree = doctree!(document [
//!     section [ title [ "Intro" ], paragraph [ "Hello." ] ]
//! ]);
//!
//! // Wider indent, custom palette
//! let options = RstOptions::new()
//!     .with_indent("    ")
//!     .with_section_adornments(vec!['#', '*', '=']);
//! let rst = to_string_with_options(&tree, options).unwrap();
//! assert!(rst.contains("#####"));
//! ```

/// Configuration options for rendering a document tree as reStructuredText.
///
/// Controls indentation, the section adornment palette, and escaping.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::RstOptions;
///
/// // Defaults: two-space indent, standard adornment palette
/// let options = RstOptions::new();
///
/// // Custom configuration
/// let options = RstOptions::new()
///     .with_indent("    ")
///     .with_escape_text(false);
/// ```
#[derive(Clone, Debug)]
pub struct RstOptions {
    pub indent: String,
    pub directive_indent: String,
    pub section_adornments: Vec<char>,
    pub escape_text: bool,
}

impl Default for RstOptions {
    fn default() -> Self {
        RstOptions {
            indent: "  ".to_string(),
            directive_indent: "   ".to_string(),
            section_adornments: vec!['=', '-', '~', '^', '+', '"', '\'', '_'],
            escape_text: true,
        }
    }
}

impl RstOptions {
    /// Creates default options (two-space indent, three-space directive
    /// indent, eight-glyph adornment palette, escaping on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_rst::RstOptions;
    ///
    /// let options = RstOptions::new();
    /// assert_eq!(options.indent, "  ");
    /// assert_eq!(options.section_adornments[0], '=');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indent unit applied per nesting level of block content.
    ///
    /// List item bodies still indent by their marker width regardless of
    /// this setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_rst::RstOptions;
    ///
    /// let options = RstOptions::new().with_indent("    ");
    /// assert_eq!(options.indent, "    ");
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the indent applied to directive and literal-block bodies.
    ///
    /// Default is three spaces, lining bodies up under the directive name.
    #[must_use]
    pub fn with_directive_indent(mut self, indent: impl Into<String>) -> Self {
        self.directive_indent = indent.into();
        self
    }

    /// Sets the adornment palette used for section titles, ordered by
    /// nesting depth.
    ///
    /// A document whose sections nest deeper than this palette fails with
    /// [`Error::AdornmentExhausted`](crate::Error::AdornmentExhausted).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_rst::RstOptions;
    ///
    /// let options = RstOptions::new().with_section_adornments(vec!['#', '*']);
    /// assert_eq!(options.section_adornments.len(), 2);
    /// ```
    #[must_use]
    pub fn with_section_adornments(mut self, adornments: Vec<char>) -> Self {
        self.section_adornments = adornments;
        self
    }

    /// Enables or disables escaping of inline markup characters in text.
    ///
    /// On by default. Verbatim blocks are never escaped either way.
    #[must_use]
    pub fn with_escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }
}
