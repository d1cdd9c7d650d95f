//! reStructuredText Output Dialect
//!
//! This module documents the reStructuredText (RST) dialect emitted by this
//! library: which constructs are produced for which document-tree nodes, and
//! the spacing rules that hold the output together.
//!
//! # Overview
//!
//! The writer serializes a parsed document tree — the element/attribute/text
//! shape used by `docutils` — back into RST source. The output targets plain
//! `docutils` RST: no Sphinx-only constructs, and every emitted block is
//! valid input for a standard RST parser.
//!
//! ## Design Philosophy
//!
//! - **One pass**: a single depth-first walk over the tree produces the whole
//!   document; nothing is reordered afterwards except deferred role
//!   declarations, which flush at the end
//! - **Exact spacing**: blank lines and indents follow fixed rules, so the
//!   same tree always renders to the same bytes
//! - **All-or-nothing**: an unsupported node or a malformed attribute aborts
//!   rendering with an error instead of producing partial markup
//!
//! # Document Structure
//!
//! ## Sections and Titles
//!
//! Section titles are underlined with an adornment character drawn from a
//! fixed palette, indexed by nesting depth:
//!
//! ```text
//! Top Level
//! =========
//!
//! Nested
//! ------
//!
//! Deeper
//! ~~~~~~
//! ```
//!
//! **Rules**:
//! - The default palette is `= - ~ ^ + " ' _`, one character per depth
//! - The underline repeats the character to the exact length of the title
//!   text as written (escapes included)
//! - A document `subtitle` uses the character two palette positions past the
//!   document title's character
//! - Nesting deeper than the palette is an error, not a silent reuse
//!
//! ## Transitions
//!
//! A `transition` node renders as a four-dash rule on its own line,
//! surrounded by blank lines:
//!
//! ```text
//! Before.
//!
//! ----
//!
//! After.
//! ```
//!
//! # Spacing Model
//!
//! Block constructs decide their own *leading* separation; nothing reasons
//! about what follows it.
//!
//! **Rules**:
//! - The first contributing child of a block container (`document`,
//!   `section`, `footnote`, `list_item`, `definition`, `field_body`) starts
//!   immediately; no separation is inserted
//! - Every later sibling is preceded by exactly one blank line
//! - Directly after a title's underline, separation is already guaranteed;
//!   the next block adds nothing
//! - Same-tag runs of `title`, `comment`, `footnote`, and
//!   `substitution_definition` sit one line apart instead of a blank line
//!   apart:
//!
//! ```text
//! .. first note
//! .. second note
//! ```
//!
//! Blank-line insertion is idempotent: it tops up the newline run already at
//! the end of the output rather than appending unconditionally.
//!
//! # Indentation
//!
//! - **Body indent**: 2 spaces per nesting level (block quotes, footnote
//!   bodies, definitions, field bodies)
//! - **Directive indent**: 3 spaces, aligning content under the `::` of a
//!   directive marker
//! - Markers count toward indentation: text on the marker's own line
//!   continues after the marker, and only continuation lines receive the
//!   full indent prefix
//! - Blank lines are never padded with indent
//!
//! # Block Constructs
//!
//! ## Bullet and Enumerated Lists
//!
//! ```text
//! * first item
//! * second item
//!
//! 3. counts from three
//! 4. and onward
//! ```
//!
//! - The bullet glyph comes from the list's `bullet` attribute
//! - Enumerated markers combine the `enumtype` and `start` attributes; item
//!   *N* of a list starting at *S* is numbered *S + N − 1*
//! - Item bodies align under the marker, indenting by the marker's width;
//!   a multi-block item separates its blocks with blank lines at that indent
//!
//! ### Enumeration symbol sets
//!
//! | `enumtype` | Sequence | Domain |
//! |------------|----------|--------|
//! | `arabic` | `1, 2, 3, …` | 1 and up |
//! | `loweralpha` | `a, b, … z` | 1–26 |
//! | `upperalpha` | `A, B, … Z` | 1–26 |
//! | `lowerroman` | `i, ii, iii, iv, …` | 1–4999 |
//! | `upperroman` | `I, II, III, IV, …` | 1–4999 |
//!
//! An ordinal outside a set's domain is a malformed-attribute error.
//!
//! ## Definition Lists
//!
//! ```text
//! term : classifier
//!   The definition body, indented one level.
//! ```
//!
//! ## Field Lists and Docinfo
//!
//! Fields render as `:Name: value` lines; a bibliographic `docinfo` block
//! renders its well-known children (`author`, `date`, `status`, …) the same
//! way with capitalized labels:
//!
//! ```text
//! :Author: Jane Doe
//! :Status: draft
//! ```
//!
//! ## Option Lists
//!
//! ```text
//! -v, --verbose  Increase chattiness.
//! ```
//!
//! Options in a group join with `, `, an argument follows its option string
//! after the node's `delimiter` attribute (a space when absent), and the
//! description follows two spaces after the group.
//!
//! ## Literal Blocks
//!
//! ```text
//! ::
//!
//!    preformatted line
//!
//!    internal blank lines survive
//! ```
//!
//! Inside a literal block the writer is *verbatim*: no escaping, no spacing
//! decisions, every line gets the indent prefix and nothing else. Doctest
//! blocks render the same way without the `::` opener.
//!
//! ## Line Blocks
//!
//! ```text
//! | Roses are red
//! |   a nested block indents after the bar
//! ```
//!
//! ## Block Quotes
//!
//! ```text
//! He said:
//!
//!   Quoted paragraph.
//!
//!   -- Attribution
//! ```
//!
//! # Explicit Markup
//!
//! | Node | Output |
//! |------|--------|
//! | `footnote` | `.. [label] body` (`.. [#]` when auto-numbered) |
//! | `citation` | `.. [CIT2002] body` |
//! | `target` (named) | `.. _name: uri` |
//! | `target` (anonymous) | `.. __: uri` |
//! | `substitution_definition` | `.. \|name\| replace:: body` |
//! | `comment` | `.. text` |
//!
//! Footnote and citation bodies indent one level under the marker; the first
//! block continues on the marker line.
//!
//! # Directives
//!
//! Admonitions (`note`, `warning`, `tip`, …) and the directive-backed nodes
//! (`image`, `figure`, `topic`, `rubric`, `epigraph`, `sidebar`, `raw`, …)
//! render as `.. name::` markers with their bodies at directive indent:
//!
//! ```text
//! .. note::
//!
//!    Mind the gap.
//!
//! .. figure:: chart.png
//!
//!   A caption.
//! ```
//!
//! A generic `admonition` with a `title` child puts the title on the marker
//! line: `.. admonition:: Heads up`. A `topic` classed `contents` is the
//! rendered artifact of a table-of-contents pass and is skipped entirely.
//!
//! # Inline Markup
//!
//! | Node | Output |
//! |------|--------|
//! | `emphasis` | `*text*` |
//! | `strong` | `**text**` |
//! | `literal` | ` ``text`` ` |
//! | `title_reference` | `` `text` `` |
//! | `reference` | `` `text`_ `` or the bare URI |
//! | `footnote_reference` | `[1]_` |
//! | `citation_reference` | `[CIT2002]_` |
//! | `subscript` / `superscript` | text, undecorated |
//!
//! A reference whose text equals its URI is written bare; an anonymous
//! reference ends in `__` instead of `_`.
//!
//! ## Escaping
//!
//! Plain text escapes the inline markup characters `` \ ` * | `` with a
//! backslash, and `_` only where it ends a word (a trailing underscore would
//! read as a reference). Escaping is disabled inside `literal` spans,
//! literal blocks, and raw directives.
//!
//! # Interpreted-Text Roles
//!
//! A classed `inline` node (or a classed `emphasis`/`strong`/`literal`)
//! renders as a role application, and the matching `.. role::` declaration
//! is deferred to the end of the document:
//!
//! ```text
//! Press :kbd:`Ctrl` to continue.
//!
//! .. role:: kbd
//! ```
//!
//! **Resolution**, given a node's class list:
//! - The markup classes `emphasis`, `strong`, and `literal` are pulled out;
//!   the first becomes the declared role's base, the rest fold back into the
//!   class list
//! - The first remaining class names the role; with no class left the writer
//!   coins `inline_role1`, `inline_role2`, … in order of first use
//! - Leftover classes become a `:class:` option line under the declaration
//!
//! Declarations append per occurrence, in document order, without
//! deduplication. Cells rendered inside tables contribute to the same
//! declaration list as the surrounding document.
//!
//! # Tables
//!
//! Tables render as grid tables. Declared `colwidth` attributes act as
//! column floors; rendered content can only widen a column. A header row is
//! set off with `=`:
//!
//! ```text
//! +-------+-------+
//! | Name  | Role  |
//! +=======+=======+
//! | Alice | admin |
//! +-------+-------+
//! ```
//!
//! A table `title` turns the grid into the body of a `.. table:: Title`
//! directive. Row or column spans are not modelled.
//!
//! # Edge Cases
//!
//! - An empty tree (a bare `document`) renders as the empty string
//! - `system_message` subtrees are processing artifacts and are dropped
//!   from the output; `problematic` and `generated` wrappers are
//!   transparent, their children render as if hoisted into the parent
//! - A `decoration` wrapper is transparent; the `header` and `footer`
//!   nodes inside it render as `.. header::` / `.. footer::` directives
//! - Output always ends with exactly one newline unless it is empty
//!
//! # Errors
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Tag the writer has no rendering for | `UnsupportedNodeKind` |
//! | Attribute value outside its domain | `MalformedAttribute` |
//! | Sections nested past the palette | `AdornmentExhausted` |
//! | Context lookup finding no frame | `ContextUnderflow` |
//!
//! Every error carries the slash-joined ancestor path of the offending node
//! (`document/section/paragraph`) for diagnosis.
//!
//! # Conformance
//!
//! The emitted dialect is the `docutils` reStructuredText described at:
//! <https://docutils.sourceforge.io/rst.html>
//!
//! For runnable walkthroughs, see the crate's `demos/` directory.

// This module contains only documentation; no implementation code
