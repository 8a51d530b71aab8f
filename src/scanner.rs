//! The scanner/dispatcher: one pass, one cursor, no backtracking.
//!
//! [`Session`] owns all state for a single rendering pass. `scan` runs
//! synchronously until either end of input or the close of a transclusion
//! region; in the latter case it hands the parsed reference back to the
//! async driver, which resolves the page and splices the result before
//! resuming the same session.

use tracing::debug;

use crate::cursor::Cursor;
use crate::render::HtmlWriter;
use crate::state::{ListKind, Mode, ParserState};
use crate::template::TemplateRef;

/// Why `scan` returned.
pub(crate) enum ScanOutcome {
    /// End of input; call [`Session::finish`].
    Finished,
    /// A `{{ }}` region closed; resolve it, splice, and call `scan` again.
    Transclude(TemplateRef),
}

/// One rendering pass over one input string.
pub(crate) struct Session<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) writer: HtmlWriter,
    pub(crate) state: ParserState,
    wrap_container: bool,
    wrap_paragraph: bool,
}

impl<'a> Session<'a> {
    /// A top-level document render: paragraph wrapper always, container
    /// wrapper per the caller's flag.
    pub(crate) fn document(input: &'a str, wrap_container: bool) -> Self {
        let mut session = Self::new(input, wrap_container, true);
        if wrap_container {
            session.writer.container_start();
        }
        session.writer.paragraph_start();
        session
    }

    /// A transcluded-page render: bare output, spliced inline into the
    /// including document.
    pub(crate) fn fragment(input: &'a str) -> Self {
        Self::new(input, false, false)
    }

    fn new(input: &'a str, wrap_container: bool, wrap_paragraph: bool) -> Self {
        Self {
            cursor: Cursor::new(input.as_bytes()),
            writer: HtmlWriter::with_capacity_for(input.len()),
            state: ParserState::new(),
            wrap_container,
            wrap_paragraph,
        }
    }

    /// Scan forward until end of input or a transclusion close.
    pub(crate) fn scan(&mut self) -> ScanOutcome {
        while let Some(b) = self.cursor.peek() {
            match self.state.mode {
                Mode::Normal => self.dispatch(b),
                Mode::Transclusion { content_start } => {
                    if let Some(reference) = self.advance_region(content_start, true) {
                        return ScanOutcome::Transclude(reference);
                    }
                }
                Mode::Variable { content_start } => {
                    self.advance_region(content_start, false);
                }
            }
        }
        ScanOutcome::Finished
    }

    /// Splice an already-rendered HTML fragment at the current position.
    pub(crate) fn splice(&mut self, html: &str) {
        if !html.is_empty() {
            self.state.mark_visible();
        }
        self.writer.write_html(html);
        self.state.at_line_start = false;
    }

    /// Reconcile all open state and produce the output string.
    ///
    /// Nothing here can fail: unterminated regions flush as literal text,
    /// open headings/emphasis/lists are force-closed.
    pub(crate) fn finish(mut self) -> String {
        if let Mode::Transclusion { content_start } | Mode::Variable { content_start } =
            self.state.mode
        {
            let marker_len = self.state.mode.marker_len();
            let raw = self.cursor.slice_from(content_start - marker_len);
            debug!(len = raw.len(), "unterminated template region flushed as text");
            self.state.mode = Mode::Normal;
            self.writer.write_escaped(raw);
        }
        if let Some(heading) = self.state.heading.take() {
            self.writer.heading_end(heading.level);
        }
        self.close_emphasis();
        self.close_list();
        if self.wrap_paragraph {
            self.writer.paragraph_end();
        }
        if self.wrap_container {
            self.writer.container_end();
        }
        self.writer.into_string()
    }

    /// Character dispatch in [`Mode::Normal`].
    fn dispatch(&mut self, b: u8) {
        match b {
            b'\n' => self.handle_newline(),
            b'=' => self.handle_heading_marker(),
            b'\'' => self.handle_apostrophes(),
            b'*' => self.handle_list_marker(ListKind::Unordered),
            b'#' => self.handle_list_marker(ListKind::Ordered),
            b'{' => self.handle_open_brace(),
            b' ' | b'\t' => self.handle_whitespace(b),
            _ => self.emit_literal(b),
        }
    }

    /// Emit a plain text byte (escaped) and mark visible content.
    pub(crate) fn emit_literal(&mut self, b: u8) {
        self.state.mark_visible();
        self.writer.write_escaped_byte(b);
        self.cursor.bump();
        self.state.at_line_start = false;
    }

    fn handle_whitespace(&mut self, b: u8) {
        // Dropped between a heading/list-item open and its first visible
        // character.
        if !self.state.suppress_whitespace() {
            self.writer.write_escaped_byte(b);
        }
        self.cursor.bump();
        self.state.at_line_start = false;
    }

    fn handle_newline(&mut self) {
        // A heading never spans a newline.
        if let Some(heading) = self.state.heading.take() {
            self.writer.heading_end(heading.level);
        }
        let next = self.cursor.peek_ahead(1);
        if let Some(run) = self.state.list {
            if next == Some(run.kind.marker()) {
                // List continues on the next line.
                self.cursor.bump();
                self.state.at_line_start = true;
                return;
            }
            self.close_list();
            // The newline that terminated the list carries no output.
            self.cursor.bump();
            self.state.at_line_start = true;
            return;
        }
        if next == Some(b'\n') && self.wrap_paragraph {
            self.writer.paragraph_end();
            self.writer.newline();
            self.writer.paragraph_start();
            self.cursor.advance(2);
            self.state.at_line_start = true;
            return;
        }
        // Soft break.
        self.writer.newline();
        self.cursor.bump();
        self.state.at_line_start = true;
    }

    fn handle_open_brace(&mut self) {
        if self.cursor.peek_ahead(1) == Some(b'{') {
            if self.cursor.peek_ahead(2) == Some(b'{') {
                self.state.mode = Mode::Variable {
                    content_start: self.cursor.offset() + 3,
                };
                self.cursor.advance(3);
            } else {
                self.state.mode = Mode::Transclusion {
                    content_start: self.cursor.offset() + 2,
                };
                self.cursor.advance(2);
            }
            self.state.at_line_start = false;
        } else {
            self.emit_literal(b'{');
        }
    }

    /// Advance inside a suppressed `{{ }}` / `{{{ }}}` region.
    ///
    /// Returns the parsed reference when a transclusion region closes.
    fn advance_region(&mut self, content_start: usize, transclusion: bool) -> Option<TemplateRef> {
        let Some(distance) = self.cursor.find(b'}') else {
            // Region still open at end of input; finish() flushes it.
            let offset = self.cursor.offset();
            let remaining = self.cursor.slice_from(offset).len();
            self.cursor.advance(remaining);
            return None;
        };
        self.cursor.advance(distance);
        let needed = self.state.mode.marker_len();
        let run = self.cursor.run_len(b'}');
        if run < needed {
            // A shorter brace run is part of the suppressed content.
            self.cursor.advance(run);
            return None;
        }
        let content_end = self.cursor.offset();
        self.cursor.advance(needed);
        self.state.mode = Mode::Normal;
        let raw = self.cursor.slice(content_start, content_end);
        let raw = String::from_utf8_lossy(raw);
        if transclusion {
            let reference = TemplateRef::parse(&raw);
            debug!(name = %reference.name, args = reference.args.len(), "transclusion region closed");
            Some(reference)
        } else {
            debug!(name = raw.trim(), "variable reference skipped, no substitution");
            None
        }
    }
}
