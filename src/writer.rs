//! Tree-to-reStructuredText rendering.
//!
//! [`RstWriter`] walks a [`Doctree`] with an explicit work stack (one enter
//! and one exit step per node, no recursion) and appends markup fragments to
//! an output buffer. Formatting state lives on a stack of typed frames that
//! is pushed and popped in lockstep with the walk, so indent, sibling
//! counts, list markers and section adornments always reflect the position
//! being rendered.
//!
//! Blank-line separation is decided once per block construct: the first
//! child of a block container inherits its container's position, a later
//! sibling gets a blank line before it, and consecutive same-tag directive
//! lines (comments, footnotes, substitution definitions) stay adjacent
//! with a single line break. Title underlines guarantee the blank line
//! after themselves and flag the fact, so the following construct does not
//! separate twice.
//!
//! Role declarations for inline spans are not legible mid-paragraph, so
//! they are logged during the walk and flushed after the document body,
//! one `.. role::` block per occurrence in visitation order.
//!
//! ## Examples
//!
//! ```rust
//! use doctree_rst::{doctree, RstOptions, RstWriter};
//!
//! let tree = doctree!(document [
//!     section [ title [ "Intro" ], paragraph [ "Hello." ] ]
//! ]);
//!
//! let rst = RstWriter::new(&tree, RstOptions::default()).render().unwrap();
//! assert_eq!(rst, "Intro\n=====\n\nHello.\n");
//! ```

use crate::buffer::OutputBuffer;
use crate::context::{ContextStack, Frame, ListStyle};
use crate::error::{Error, Result};
use crate::inline::{escape_inline, EnumKind, RoleRegistry};
use crate::node::{Doctree, Node, NodeId, NodeKind};
use crate::options::RstOptions;
use crate::table::{column_widths, compose, TableLayout};
use crate::tag::{DirectiveKind, Tag};

/// Whether a node's children take part in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Children,
    SkipChildren,
}

/// One pending step of the traversal.
#[derive(Debug, Clone, Copy)]
enum Step {
    Enter { id: NodeId, prev: Option<NodeId> },
    Exit { id: NodeId },
}

/// How a `reference` node renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefMode {
    /// Direct child of a figure: becomes a `:target:` option line.
    FigureTarget,
    /// Text equals the URI: written bare.
    Bare,
    Decorated { anonymous: bool },
}

/// How a `target` node renders.
enum TargetForm {
    Block(String),
    Inline,
    Silent,
}

/// Renders one document tree as reStructuredText.
///
/// A writer is built for one tree and consumed by [`render`](Self::render).
/// Rendering is all-or-nothing: on error no partial output is returned.
pub struct RstWriter<'a> {
    tree: &'a Doctree,
    options: RstOptions,
    buffer: OutputBuffer,
    ctx: ContextStack,
    registry: RoleRegistry,
    /// Ancestor ids from the root down to the node being visited.
    path: Vec<NodeId>,
    /// Set after a title underline; the next separation check consumes it.
    force_block: bool,
    /// Verbatim mode: lines copied through with indent only, no escaping.
    verbatim: bool,
    /// Depth of enclosing literal spans, which suppress escaping.
    literal_depth: usize,
    /// Columns already written on the current output line.
    line_col: usize,
    section_depth: usize,
    line_block_depth: usize,
}

impl<'a> RstWriter<'a> {
    /// Creates a writer for `tree` with the given options.
    #[must_use]
    pub fn new(tree: &'a Doctree, options: RstOptions) -> Self {
        let base = Frame {
            indent: Some(String::new()),
            adornment: options.section_adornments.first().copied(),
            ..Frame::default()
        };
        RstWriter {
            tree,
            options,
            buffer: OutputBuffer::new(),
            ctx: ContextStack::new(base),
            registry: RoleRegistry::new(),
            path: Vec::new(),
            force_block: false,
            verbatim: false,
            literal_depth: 0,
            line_col: 0,
            section_depth: 0,
            line_block_depth: 0,
        }
    }

    /// Renders the whole tree, flushes deferred role declarations, and
    /// returns the markup.
    ///
    /// # Errors
    ///
    /// Fails on an unknown tag, a malformed attribute, section nesting
    /// deeper than the adornment palette, or a formatting-state lookup
    /// outside any defining frame.
    pub fn render(mut self) -> Result<String> {
        self.walk(self.tree.root())?;
        self.flush_roles();
        Ok(self.finish())
    }

    fn walk(&mut self, root: NodeId) -> Result<()> {
        let mut stack = vec![Step::Enter {
            id: root,
            prev: None,
        }];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter { id, prev } => {
                    self.path.push(id);
                    let visit = self.enter(id, prev)?;
                    stack.push(Step::Exit { id });
                    if visit == Visit::Children {
                        let children: Vec<NodeId> = self.tree.children(id).collect();
                        for (pos, &child) in children.iter().enumerate().rev() {
                            let prev = pos.checked_sub(1).map(|p| children[p]);
                            stack.push(Step::Enter { id: child, prev });
                        }
                    }
                }
                Step::Exit { id } => {
                    self.exit(id)?;
                    self.path.pop();
                }
            }
        }
        Ok(())
    }

    fn enter(&mut self, id: NodeId, prev: Option<NodeId>) -> Result<Visit> {
        let tree = self.tree;
        let node = match tree.node(id) {
            Some(node) => node,
            None => return Ok(Visit::SkipChildren),
        };
        let (tag, attrs) = match node.kind() {
            NodeKind::Text(text) => {
                self.write_text(text);
                return Ok(Visit::SkipChildren);
            }
            NodeKind::Element { tag, attrs } => (tag, attrs),
        };

        match tag {
            Tag::Document | Tag::Entry => {
                self.ctx.push(Frame::with_index());
            }
            Tag::Section => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.section_depth += 1;
                let depth = self.section_depth;
                let available = self.options.section_adornments.len();
                let glyph = match self.options.section_adornments.get(depth - 1) {
                    Some(&glyph) => glyph,
                    None => {
                        return Err(Error::adornment_exhausted(
                            depth,
                            available,
                            self.path_string(),
                        ))
                    }
                };
                self.ctx.push(Frame {
                    index: Some(0),
                    adornment: Some(glyph),
                    ..Frame::default()
                });
            }
            Tag::Title => match self.parent_tag() {
                Some(Tag::Topic) => {
                    self.ensure_block(tag, prev)?;
                    self.bump()?;
                    self.write_indented(":");
                }
                Some(Tag::Admonition(_)) => {
                    self.bump()?;
                    self.write_plain(" ");
                }
                _ => {
                    self.bump()?;
                    self.ctx.push(Frame {
                        capture: Some(String::new()),
                        ..Frame::default()
                    });
                }
            },
            Tag::Subtitle => {
                self.bump()?;
                self.ctx.push(Frame {
                    capture: Some(String::new()),
                    ..Frame::default()
                });
            }
            Tag::Paragraph => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.ctx.push(Frame::with_index());
            }
            Tag::Emphasis => {
                self.bump()?;
                self.open_simple_inline(attrs.classes(), "emphasis", "*");
            }
            Tag::Strong => {
                self.bump()?;
                self.open_simple_inline(attrs.classes(), "strong", "**");
            }
            Tag::Literal => {
                self.bump()?;
                self.open_simple_inline(attrs.classes(), "literal", "``");
                self.literal_depth += 1;
            }
            Tag::Inline => {
                self.bump()?;
                let name = self.registry.register(attrs.classes());
                self.write_indented(&format!(":{}:`", name));
            }
            Tag::TitleReference => {
                self.bump()?;
                self.write_indented("`");
            }
            Tag::Reference => {
                self.bump()?;
                match self.reference_mode(id) {
                    RefMode::FigureTarget | RefMode::Bare => {}
                    RefMode::Decorated { .. } => self.write_indented("`"),
                }
            }
            Tag::FootnoteReference => {
                self.bump()?;
                self.write_indented("[");
            }
            Tag::CitationReference => {
                self.bump()?;
                self.write_indented("[");
            }
            Tag::Target => match self.target_form(id) {
                TargetForm::Block(line) => {
                    self.ensure_block(tag, prev)?;
                    self.bump()?;
                    self.write_indented(&line);
                    return Ok(Visit::SkipChildren);
                }
                TargetForm::Inline => {
                    self.bump()?;
                    self.write_indented("_`");
                }
                TargetForm::Silent => return Ok(Visit::SkipChildren),
            },
            Tag::SubstitutionDefinition => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                let name = match attrs.first_name() {
                    Some(name) => name.to_string(),
                    None => {
                        return Err(Error::malformed_attribute(
                            "names",
                            "",
                            tag.as_str(),
                            self.path_string(),
                        ))
                    }
                };
                self.write_indented(&format!(".. |{}| replace:: ", name));
            }
            Tag::Footnote => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                if attrs.flag("auto") {
                    self.write_indented(".. [#] ");
                } else {
                    self.write_indented(".. [");
                }
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::Citation => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented(".. [");
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::Label => {
                if self.label_is_suppressed() {
                    return Ok(Visit::SkipChildren);
                }
            }
            Tag::BulletList => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                let bullet = match attrs.bullet() {
                    Some(bullet) => bullet.to_string(),
                    None => {
                        return Err(Error::malformed_attribute(
                            "bullet",
                            "",
                            tag.as_str(),
                            self.path_string(),
                        ))
                    }
                };
                self.ctx.push(Frame {
                    index: Some(0),
                    list: Some(ListStyle::Bullet(bullet)),
                    ..Frame::default()
                });
            }
            Tag::EnumeratedList => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                let name = attrs.enumtype().unwrap_or("");
                let kind = match EnumKind::from_name(name) {
                    Some(kind) => kind,
                    None => {
                        return Err(Error::malformed_attribute(
                            "enumtype",
                            name,
                            tag.as_str(),
                            self.path_string(),
                        ))
                    }
                };
                let start = attrs.start().unwrap_or(1);
                self.ctx.push(Frame {
                    index: Some(0),
                    list: Some(ListStyle::Enumerated { kind, start }),
                    ..Frame::default()
                });
            }
            Tag::ListItem => {
                let style = match self.ctx.list_style() {
                    Some(style) => style.clone(),
                    None => return Err(self.underflow("list")),
                };
                let position = self.bump()?;
                let marker = match style {
                    ListStyle::Bullet(bullet) => format!("{} ", bullet),
                    ListStyle::Enumerated { kind, start } => {
                        let ordinal = start + position as i64 - 1;
                        match kind.symbol(ordinal) {
                            Some(symbol) => format!("{}. ", symbol),
                            None => {
                                return Err(Error::malformed_attribute(
                                    "start",
                                    &ordinal.to_string(),
                                    tag.as_str(),
                                    self.path_string(),
                                ))
                            }
                        }
                    }
                };
                let body_indent = format!(
                    "{}{}",
                    self.ctx.indent(),
                    " ".repeat(marker.chars().count())
                );
                self.write_indented(&marker);
                self.ctx.push(Frame {
                    index: Some(0),
                    indent: Some(body_indent),
                    ..Frame::default()
                });
            }
            Tag::DefinitionList | Tag::FieldList | Tag::OptionList => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.ctx.push(Frame::with_index());
            }
            Tag::DefinitionListItem | Tag::Field | Tag::OptionListItem => {
                self.bump()?;
                self.ctx.push(Frame::with_index());
            }
            Tag::Term => {
                self.ensure_newlines(1);
                self.bump()?;
            }
            Tag::Classifier => {
                self.write_plain(" : ");
            }
            Tag::Definition => {
                self.bump()?;
                self.ensure_newlines(1);
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::FieldName => {
                self.bump()?;
                self.write_indented(":");
            }
            Tag::FieldBody => {
                self.bump()?;
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::OptionGroup => {
                self.ensure_newlines(1);
                self.ctx.push(Frame::with_index());
            }
            Tag::Option => {
                // Later options in a group join the first on one line.
                if self.bump()? > 1 {
                    self.write_plain(", ");
                }
            }
            Tag::OptionString => {}
            Tag::OptionArgument => {
                self.write_plain(attrs.delimiter().unwrap_or(" "));
            }
            Tag::Description => {
                self.write_plain("  ");
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::LiteralBlock => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                if attrs.preserves_space() {
                    self.write_indented(".. parsed-literal::");
                } else {
                    self.write_indented("::");
                }
                self.push_body_frame(&self.options.directive_indent.clone());
                self.ensure_newlines(2);
                self.verbatim = true;
            }
            Tag::DoctestBlock => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.verbatim = true;
            }
            Tag::LineBlock => {
                // A nested line block continues the enclosing block's run of
                // `|` lines; a blank line would split the block in two.
                if matches!(self.parent_tag(), Some(Tag::LineBlock)) {
                    self.ensure_newlines(1);
                } else {
                    self.ensure_block(tag, prev)?;
                }
                self.bump()?;
                self.line_block_depth += 1;
                self.ctx.push(Frame::with_index());
            }
            Tag::Line => {
                self.bump()?;
                let depth = self.line_block_depth.max(1);
                let marker = format!("|{}", " ".repeat(2 * depth - 1));
                let body_indent = format!(
                    "{}{}",
                    self.ctx.indent(),
                    " ".repeat(marker.chars().count())
                );
                self.write_indented(&marker);
                self.ctx.push(Frame {
                    index: Some(0),
                    indent: Some(body_indent),
                    ..Frame::default()
                });
            }
            Tag::BlockQuote => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                if attrs.has_class("epigraph") {
                    self.write_indented(".. epigraph::");
                    self.push_body_frame(&self.options.directive_indent.clone());
                    self.ensure_newlines(2);
                } else {
                    self.push_body_frame(&self.options.indent.clone());
                }
            }
            Tag::Attribution => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented("-- ");
            }
            Tag::Comment => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented(".. ");
                let indent = self.deeper_indent(&self.options.indent.clone());
                self.ctx.push(Frame {
                    indent: Some(indent),
                    ..Frame::default()
                });
            }
            Tag::Transition => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented("----");
                self.ensure_newlines(2);
                return Ok(Visit::SkipChildren);
            }
            Tag::Topic => {
                if attrs.has_class("contents") {
                    return Ok(Visit::SkipChildren);
                }
                self.ensure_block(tag, prev)?;
                self.bump()?;
                if attrs.has_class("abstract") || attrs.has_class("dedication") {
                    self.ctx.push(Frame::with_index());
                } else {
                    self.write_indented(".. topic::");
                    self.push_body_frame(&self.options.directive_indent.clone());
                    self.ensure_newlines(2);
                }
            }
            Tag::Image => {
                let uri = match attrs.uri() {
                    Some(uri) => uri.to_string(),
                    None => {
                        return Err(Error::malformed_attribute(
                            "uri",
                            "",
                            tag.as_str(),
                            self.path_string(),
                        ))
                    }
                };
                if self.inside_figure_head() {
                    self.bump()?;
                    self.write_plain(&uri);
                    self.ensure_newlines(1);
                } else {
                    self.ensure_block(tag, prev)?;
                    self.bump()?;
                    self.write_indented(&format!(".. image:: {}", uri));
                    self.ensure_newlines(1);
                }
            }
            Tag::Figure => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented(".. figure:: ");
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::Caption => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.ctx.push(Frame::with_index());
            }
            Tag::Legend | Tag::Docinfo => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.ctx.push(Frame::with_index());
            }
            Tag::Decoration | Tag::Generated | Tag::Problematic => {}
            Tag::Subscript | Tag::Superscript => {}
            Tag::SystemMessage => return Ok(Visit::SkipChildren),
            Tag::Table => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.render_table(id)?;
                return Ok(Visit::SkipChildren);
            }
            Tag::Tgroup | Tag::Colspec | Tag::Thead | Tag::Tbody | Tag::Row => {}
            Tag::DocinfoField(field) => {
                self.bump()?;
                self.write_indented(&format!(":{}: ", field.label()));
                self.push_body_frame(&self.options.indent.clone());
            }
            Tag::Admonition(kind) => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented(&format!(".. {}::", kind.as_str()));
                self.push_body_frame(&self.options.directive_indent.clone());
                let titled = tree.first_child(id).and_then(|c| tree.tag(c)) == Some(&Tag::Title);
                if !titled {
                    self.ensure_newlines(2);
                }
            }
            Tag::Directive(kind) => {
                self.ensure_block(tag, prev)?;
                self.bump()?;
                self.write_indented(&format!(".. {}::", kind.as_str()));
                self.push_body_frame(&self.options.directive_indent.clone());
                self.ensure_newlines(2);
                if *kind == DirectiveKind::Raw {
                    self.verbatim = true;
                }
            }
            Tag::Other(name) => {
                return Err(Error::unsupported_node(name, self.path_string()));
            }
        }
        Ok(Visit::Children)
    }

    fn exit(&mut self, id: NodeId) -> Result<()> {
        let tree = self.tree;
        let tag = match tree.node(id).map(Node::kind) {
            Some(NodeKind::Element { tag, .. }) => tag.clone(),
            _ => return Ok(()),
        };

        match tag {
            Tag::Document | Tag::Entry => {
                self.pop_frame()?;
            }
            Tag::Section => {
                self.pop_frame()?;
                self.section_depth -= 1;
                self.ensure_newlines(1);
            }
            Tag::Title => match self.parent_tag() {
                Some(Tag::Topic) => {
                    self.write_plain(":");
                    let deeper = self.deeper_indent(&self.options.indent.clone());
                    self.ctx.set_indent(deeper);
                    self.ensure_newlines(2);
                    self.force_block = true;
                }
                Some(Tag::Admonition(_)) => {
                    self.ensure_newlines(2);
                }
                _ => {
                    let frame = self.pop_frame()?;
                    let text = frame.capture.unwrap_or_default();
                    self.ensure_newlines(1);
                    let glyph = self.ctx.adornment();
                    self.write_indented(&glyph.to_string().repeat(text.chars().count()));
                    self.ensure_newlines(2);
                    self.force_block = true;
                }
            },
            Tag::Subtitle => {
                let frame = self.pop_frame()?;
                let text = frame.capture.unwrap_or_default();
                self.ensure_newlines(1);
                let current = self.ctx.adornment();
                let palette = &self.options.section_adornments;
                let position = palette
                    .iter()
                    .position(|&c| c == current)
                    .unwrap_or(palette.len());
                let glyph = match palette.get(position + 2) {
                    Some(&glyph) => glyph,
                    None => {
                        return Err(Error::adornment_exhausted(
                            position + 2,
                            palette.len(),
                            self.path_string(),
                        ))
                    }
                };
                self.write_indented(&glyph.to_string().repeat(text.chars().count()));
                self.ensure_newlines(2);
                self.force_block = true;
            }
            Tag::Paragraph => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Emphasis => self.close_simple_inline(id, "*"),
            Tag::Strong => self.close_simple_inline(id, "**"),
            Tag::Literal => {
                self.literal_depth = self.literal_depth.saturating_sub(1);
                self.close_simple_inline(id, "``");
            }
            Tag::Inline | Tag::TitleReference => {
                self.write_plain("`");
            }
            Tag::Reference => match self.reference_mode(id) {
                RefMode::FigureTarget => {
                    if let Some(uri) = tree.attrs(id).and_then(|a| a.refuri()) {
                        let line = format!(":target: {}", uri);
                        self.ensure_newlines(1);
                        self.write_indented(&line);
                        self.ensure_newlines(2);
                    }
                }
                RefMode::Bare => {}
                RefMode::Decorated { anonymous } => {
                    self.write_plain(if anonymous { "`__" } else { "`_" });
                }
            },
            Tag::FootnoteReference | Tag::CitationReference => {
                self.write_plain("]_");
            }
            Tag::Target => match self.target_form(id) {
                TargetForm::Block(_) => self.ensure_newlines(1),
                TargetForm::Inline => self.write_plain("`"),
                TargetForm::Silent => {}
            },
            Tag::SubstitutionDefinition => {
                self.ensure_newlines(1);
            }
            Tag::Footnote | Tag::Citation => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Label => {
                if !self.label_is_suppressed()
                    && matches!(self.parent_tag(), Some(Tag::Footnote | Tag::Citation))
                {
                    self.write_plain("] ");
                }
            }
            Tag::BulletList | Tag::EnumeratedList => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::ListItem => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::DefinitionList | Tag::FieldList | Tag::OptionList => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::DefinitionListItem | Tag::OptionListItem => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Field => {
                self.pop_frame()?;
            }
            Tag::Term | Tag::Classifier => {}
            Tag::Definition => {
                self.pop_frame()?;
                self.ensure_newlines(2);
            }
            Tag::FieldName => {
                self.write_plain(": ");
            }
            Tag::FieldBody => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::OptionGroup => {
                self.pop_frame()?;
            }
            Tag::Option | Tag::OptionString | Tag::OptionArgument => {}
            Tag::Description => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::LiteralBlock => {
                self.verbatim = false;
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::DoctestBlock => {
                self.verbatim = false;
                self.ensure_newlines(1);
            }
            Tag::LineBlock => {
                self.line_block_depth = self.line_block_depth.saturating_sub(1);
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Line => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::BlockQuote => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Attribution => {
                self.ensure_newlines(1);
            }
            Tag::Comment => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Transition => {}
            Tag::Topic => {
                let skipped = tree
                    .attrs(id)
                    .map_or(false, |attrs| attrs.has_class("contents"));
                if !skipped {
                    self.pop_frame()?;
                    self.ensure_newlines(1);
                }
            }
            Tag::Image => {}
            Tag::Figure => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Caption | Tag::Legend | Tag::Docinfo => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Decoration | Tag::Generated | Tag::Problematic => {}
            Tag::Subscript | Tag::Superscript => {}
            Tag::SystemMessage => {}
            Tag::Table => {
                self.ensure_newlines(1);
            }
            Tag::Tgroup | Tag::Colspec | Tag::Thead | Tag::Tbody | Tag::Row => {}
            Tag::DocinfoField(_) => {
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Admonition(_) | Tag::Directive(_) => {
                if matches!(tag, Tag::Directive(DirectiveKind::Raw)) {
                    self.verbatim = false;
                }
                self.pop_frame()?;
                self.ensure_newlines(1);
            }
            Tag::Other(_) => {}
        }
        Ok(())
    }

    // Inline span helpers ---------------------------------------------------

    /// Opens emphasis, strong, or literal: classed spans become role
    /// references with the decoration name folded into the class list.
    fn open_simple_inline(&mut self, classes: &[String], kind: &str, decoration: &str) {
        if classes.is_empty() {
            self.write_indented(decoration);
        } else {
            let mut all = classes.to_vec();
            all.push(kind.to_string());
            let name = self.registry.register(&all);
            self.write_indented(&format!(":{}:`", name));
        }
    }

    fn close_simple_inline(&mut self, id: NodeId, decoration: &str) {
        let classed = self
            .tree
            .attrs(id)
            .map_or(false, |attrs| !attrs.classes().is_empty());
        if classed {
            self.write_plain("`");
        } else {
            self.write_plain(decoration);
        }
    }

    fn reference_mode(&self, id: NodeId) -> RefMode {
        if matches!(self.parent_tag(), Some(Tag::Figure)) {
            return RefMode::FigureTarget;
        }
        let attrs = self.tree.attrs(id);
        let refuri = attrs.and_then(|a| a.refuri());
        let refid = attrs.and_then(|a| a.refid());
        match (refuri, refid) {
            (Some(uri), _) if self.tree.text_of(id) == uri => RefMode::Bare,
            (Some(_), _) | (None, Some(_)) => RefMode::Decorated {
                anonymous: attrs.map_or(false, |a| a.flag("anonymous")),
            },
            (None, None) => RefMode::Bare,
        }
    }

    fn target_form(&self, id: NodeId) -> TargetForm {
        let tree = self.tree;
        let attrs = tree.attrs(id);
        let name = attrs.and_then(|a| a.first_name());
        let refuri = attrs.and_then(|a| a.refuri());
        let refid = attrs.and_then(|a| a.refid());
        let anonymous = attrs.map_or(false, |a| a.flag("anonymous"));

        if anonymous || name.is_none() {
            return match (refuri, refid) {
                (Some(uri), _) => TargetForm::Block(format!(".. __: {}", uri)),
                (None, Some(refid)) => TargetForm::Block(format!(".. __: `{}`_", refid)),
                (None, None) if anonymous => TargetForm::Block(".. __:".to_string()),
                (None, None) if tree.first_child(id).is_some() => TargetForm::Inline,
                (None, None) => TargetForm::Silent,
            };
        }
        let name = name.unwrap_or_default();
        match (refuri, refid) {
            (Some(uri), _) => TargetForm::Block(format!(".. _{}: {}", name, uri)),
            (None, Some(refid)) => TargetForm::Block(format!(".. _{}: `{}`_", name, refid)),
            (None, None) => TargetForm::Block(format!(".. _{}:", name)),
        }
    }

    /// True for a label whose footnote numbers itself; the marker already
    /// wrote `[#]` and the label text must not repeat it.
    fn label_is_suppressed(&self) -> bool {
        let tree = self.tree;
        self.parent_id().map_or(false, |parent| {
            matches!(tree.tag(parent), Some(Tag::Footnote))
                && tree.attrs(parent).map_or(false, |a| a.flag("auto"))
        })
    }

    /// True where an image contributes the argument of a `.. figure::` line:
    /// as the figure's direct child, or wrapped in its link reference.
    fn inside_figure_head(&self) -> bool {
        match self.parent_tag() {
            Some(Tag::Figure) => true,
            Some(Tag::Reference) => matches!(self.ancestor_tag(2), Some(Tag::Figure)),
            _ => false,
        }
    }

    // Table rendering -------------------------------------------------------

    /// Renders a table subtree as a grid table. Cell bodies go through a
    /// nested writer; their deferred role declarations migrate into this
    /// writer's registry so flush order is preserved.
    fn render_table(&mut self, id: NodeId) -> Result<()> {
        let layout = TableLayout::scan(self.tree, id);
        let head = self.render_rows(&layout.head)?;
        let body = self.render_rows(&layout.body)?;
        if head.is_empty() && body.is_empty() {
            return Ok(());
        }
        let widths = column_widths(&layout.colwidths, &head, &body);
        let grid = compose(&widths, &head, &body);
        if let Some(title) = layout.title {
            let text = self.tree.text_of(title);
            self.write_indented(&format!(".. table:: {}", text));
            let indent = self.deeper_indent(&self.options.directive_indent.clone());
            self.ctx.push(Frame {
                indent: Some(indent),
                ..Frame::default()
            });
            self.ensure_newlines(2);
            self.write_indented(&grid);
            self.pop_frame()?;
        } else {
            self.write_indented(&grid);
        }
        self.ensure_newlines(1);
        Ok(())
    }

    fn render_rows(&mut self, rows: &[Vec<NodeId>]) -> Result<Vec<Vec<Vec<String>>>> {
        let mut rendered = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cells = Vec::with_capacity(row.len());
            for &cell in row {
                cells.push(self.render_fragment(cell)?);
            }
            rendered.push(cells);
        }
        Ok(rendered)
    }

    /// Renders one subtree in isolation and returns its trimmed lines.
    fn render_fragment(&mut self, root: NodeId) -> Result<Vec<String>> {
        let mut nested = RstWriter::new(self.tree, self.options.clone());
        nested.registry = std::mem::take(&mut self.registry);
        let outcome = nested.walk(root);
        self.registry = std::mem::take(&mut nested.registry);
        outcome?;
        let mut text = nested.buffer.into_string();
        text.truncate(text.trim_end().len());
        if text.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(text.lines().map(String::from).collect())
        }
    }

    // Output plumbing -------------------------------------------------------

    /// Decides separation before a block construct.
    ///
    /// Nothing is inserted in block mode or for a container's first
    /// contributing child. A later sibling gets a blank line, except that
    /// same-tag runs of adjacency-exempt constructs stay one line apart.
    fn ensure_block(&mut self, tag: &Tag, prev: Option<NodeId>) -> Result<()> {
        if self.block_level()? {
            self.force_block = false;
            return Ok(());
        }
        let index = match self.ctx.index() {
            Some(index) => index,
            None => return Err(self.underflow("index")),
        };
        if index == 0 {
            return Ok(());
        }
        let tree = self.tree;
        if let Some(prev_tag) = prev.and_then(|p| tree.tag(p)) {
            if prev_tag == tag && allows_adjacent(tag) {
                self.ensure_newlines(1);
                return Ok(());
            }
        }
        self.ensure_newlines(2);
        Ok(())
    }

    /// Block mode: separation is already guaranteed. Holds when a title
    /// underline forced it, at the tree root, and for the first child of a
    /// block container.
    fn block_level(&self) -> Result<bool> {
        if self.force_block {
            return Ok(true);
        }
        let tree = self.tree;
        let parent = match self.parent_id() {
            Some(parent) => parent,
            None => return Ok(true),
        };
        let index = match self.ctx.index() {
            Some(index) => index,
            None => return Err(self.underflow("index")),
        };
        Ok(index == 0 && tree.tag(parent).map_or(false, Tag::is_block_container))
    }

    fn bump(&mut self) -> Result<usize> {
        match self.ctx.bump_index() {
            Some(value) => Ok(value),
            None => Err(self.underflow("index")),
        }
    }

    fn pop_frame(&mut self) -> Result<Frame> {
        match self.ctx.pop() {
            Some(frame) => Ok(frame),
            None => Err(self.underflow("frame")),
        }
    }

    fn push_body_frame(&mut self, unit: &str) {
        let indent = self.deeper_indent(unit);
        self.ctx.push(Frame {
            index: Some(0),
            indent: Some(indent),
            ..Frame::default()
        });
    }

    fn deeper_indent(&self, unit: &str) -> String {
        format!("{}{}", self.ctx.indent(), unit)
    }

    fn write_text(&mut self, raw: &str) {
        if self.verbatim || self.literal_depth > 0 || !self.options.escape_text {
            self.write_indented(raw);
        } else {
            self.write_indented(&escape_inline(raw));
        }
    }

    /// Writes text at the current position, applying the frame indent at
    /// line starts. A line already partly written (a marker, a field name)
    /// counts toward the indent, so only the remainder is padded. In
    /// verbatim mode lines are copied through with the indent prefix only
    /// and internal blank lines survive.
    fn write_indented(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                if self.verbatim {
                    self.break_line();
                } else {
                    self.ensure_newlines(1);
                }
            }
            if line.is_empty() {
                continue;
            }
            if self.line_col == 0 {
                let indent = self.ctx.indent().to_string();
                self.push_raw(&indent);
            } else if !self.verbatim {
                let indent_len = self.ctx.indent().chars().count();
                if self.line_col < indent_len {
                    let pad: String = self.ctx.indent().chars().skip(self.line_col).collect();
                    self.push_raw(&pad);
                }
            }
            self.push_visible(line);
        }
    }

    /// Appends text mid-line with no indent handling (span closers, the
    /// `] ` after a label).
    fn write_plain(&mut self, text: &str) {
        self.push_visible(text);
    }

    fn push_visible(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(capture) = self.ctx.capture_mut() {
            capture.push_str(text);
        }
        self.push_raw(text);
    }

    fn push_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.line_col += text.chars().count();
        self.buffer.push(text.to_string());
    }

    fn break_line(&mut self) {
        self.buffer.push("\n");
        self.line_col = 0;
    }

    fn ensure_newlines(&mut self, count: usize) {
        self.buffer.ensure_newlines(count);
        if self.buffer.at_line_start() {
            self.line_col = 0;
        }
    }

    fn flush_roles(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        let registry = std::mem::take(&mut self.registry);
        for declaration in registry.declarations() {
            self.ensure_newlines(2);
            match &declaration.inherit {
                Some(base) => {
                    self.write_indented(&format!(".. role:: {}({})", declaration.name, base))
                }
                None => self.write_indented(&format!(".. role:: {}", declaration.name)),
            }
            if !declaration.classes.is_empty() {
                self.ensure_newlines(1);
                let line = format!(
                    "{}:class: {}",
                    self.options.indent,
                    declaration.classes.join(" ")
                );
                self.write_indented(&line);
            }
        }
    }

    fn finish(self) -> String {
        let mut out = self.buffer.into_string();
        out.truncate(out.trim_end().len());
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    // Position helpers ------------------------------------------------------

    fn parent_id(&self) -> Option<NodeId> {
        if self.path.len() < 2 {
            None
        } else {
            Some(self.path[self.path.len() - 2])
        }
    }

    fn parent_tag(&self) -> Option<&'a Tag> {
        self.tree.tag(self.parent_id()?)
    }

    /// Tag `levels_up` ancestors above the current node.
    fn ancestor_tag(&self, levels_up: usize) -> Option<&'a Tag> {
        let position = self.path.len().checked_sub(levels_up + 1)?;
        self.tree.tag(self.path[position])
    }

    fn path_string(&self) -> String {
        let tree = self.tree;
        self.path
            .iter()
            .map(|&id| tree.tag(id).map_or("Text", Tag::as_str))
            .collect::<Vec<_>>()
            .join("/")
    }

    fn underflow(&self, slot: &str) -> Error {
        Error::context_underflow(slot, self.path_string())
    }
}

/// Same-tag runs of these constructs sit one line apart instead of a blank
/// line apart.
fn allows_adjacent(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Title | Tag::Comment | Tag::Footnote | Tag::SubstitutionDefinition
    )
}
