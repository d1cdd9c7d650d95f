//! Typed formatting-state scopes, pushed and popped in lockstep with the
//! tree walk.
//!
//! Each [`Frame`] carries one optional slot per formatting concern. A lookup
//! resolves to the nearest enclosing frame that fills the slot; the base
//! frame supplies document-wide defaults (empty indent, the palette's first
//! adornment), so indent and adornment lookups never fail. A missing `index`
//! slot means a handler ran outside any sibling scope, which the writer
//! reports as a context underflow.

use crate::inline::EnumKind;

/// List state introduced by entering a bullet or enumerated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListStyle {
    Bullet(String),
    Enumerated { kind: EnumKind, start: i64 },
}

/// One scope of formatting state.
#[derive(Debug, Clone, Default)]
pub(crate) struct Frame {
    /// Indent prefix for lines opened inside this scope.
    pub indent: Option<String>,
    /// Count of children that have started contributing output.
    pub index: Option<usize>,
    /// Marker state for the enclosing list.
    pub list: Option<ListStyle>,
    /// Adornment glyph for titles at this section depth.
    pub adornment: Option<char>,
    /// Accumulates every visible character written while active.
    pub capture: Option<String>,
}

impl Frame {
    pub(crate) fn with_index() -> Self {
        Frame {
            index: Some(0),
            ..Frame::default()
        }
    }
}

/// Stack of [`Frame`]s. The base frame pushed at construction is permanent;
/// popping it is an underflow.
#[derive(Debug)]
pub(crate) struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    pub(crate) fn new(base: Frame) -> Self {
        ContextStack { frames: vec![base] }
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the top frame. `None` when only the base frame remains.
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Nearest indent prefix. The base frame guarantees a value.
    pub(crate) fn indent(&self) -> &str {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.indent.as_deref())
            .unwrap_or("")
    }

    /// Replaces the indent slot of the top frame.
    ///
    /// Used after a marker is written at the enclosing indent, so the body
    /// that follows aligns under the marker's text.
    pub(crate) fn set_indent(&mut self, indent: String) {
        if let Some(top) = self.frames.last_mut() {
            top.indent = Some(indent);
        }
    }

    /// Nearest sibling counter.
    pub(crate) fn index(&self) -> Option<usize> {
        self.frames.iter().rev().find_map(|f| f.index)
    }

    /// Increments the nearest sibling counter, returning the new value.
    pub(crate) fn bump_index(&mut self) -> Option<usize> {
        let slot = self
            .frames
            .iter_mut()
            .rev()
            .find_map(|f| f.index.as_mut())?;
        *slot += 1;
        Some(*slot)
    }

    /// Nearest list marker state.
    pub(crate) fn list_style(&self) -> Option<&ListStyle> {
        self.frames.iter().rev().find_map(|f| f.list.as_ref())
    }

    /// Nearest adornment glyph. The base frame guarantees a value.
    pub(crate) fn adornment(&self) -> char {
        self.frames
            .iter()
            .rev()
            .find_map(|f| f.adornment)
            .unwrap_or('=')
    }

    /// Nearest active capture target, if any.
    pub(crate) fn capture_mut(&mut self) -> Option<&mut String> {
        self.frames.iter_mut().rev().find_map(|f| f.capture.as_mut())
    }
}
