//! Append-only output buffer with cheap trailing-whitespace introspection.
//!
//! The writer needs to ask "how many newlines does the output currently end
//! with?" before every block boundary. [`OutputBuffer`] keeps that answer
//! cached as fragments are appended, so separation decisions never rescan
//! accumulated text.

/// Ordered fragments of rendered output.
///
/// Fragments are appended during traversal and concatenated once at the end.
/// The trailing whitespace run is tracked incrementally across fragment
/// boundaries.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    fragments: Vec<String>,
    /// Maximal run of whitespace the buffered text currently ends with.
    trailing_ws: String,
    total_len: usize,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment and updates the cached tail state.
    pub(crate) fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match text.rfind(|c: char| !c.is_whitespace()) {
            Some(pos) => {
                let rest = pos + text[pos..].chars().next().map_or(1, char::len_utf8);
                self.trailing_ws.clear();
                self.trailing_ws.push_str(&text[rest..]);
            }
            None => self.trailing_ws.push_str(&text),
        }
        self.total_len += text.len();
        self.fragments.push(text);
    }

    /// Number of consecutive `\n` characters the buffered text ends with.
    ///
    /// Whitespace other than a newline (say, a marker's trailing space)
    /// interrupts the count.
    pub(crate) fn trailing_newlines(&self) -> usize {
        self.trailing_ws
            .chars()
            .rev()
            .take_while(|&c| c == '\n')
            .count()
    }

    /// Appends newlines until the text ends with at least `count` of them.
    ///
    /// Idempotent: a second call with no intervening [`push`](Self::push)
    /// appends nothing. An empty buffer is left empty; the start of output
    /// already sits at a block boundary.
    pub(crate) fn ensure_newlines(&mut self, count: usize) {
        if self.is_empty() {
            return;
        }
        let have = self.trailing_newlines();
        if have < count {
            self.push("\n".repeat(count - have));
        }
    }

    /// True when the next character would begin a fresh line.
    pub(crate) fn at_line_start(&self) -> bool {
        self.is_empty() || self.trailing_ws.ends_with('\n')
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Concatenates all fragments into the final output string.
    pub(crate) fn into_string(self) -> String {
        let mut out = String::with_capacity(self.total_len);
        for fragment in &self.fragments {
            out.push_str(fragment);
        }
        out
    }
}
