//! Block state: headings and list nesting.
//!
//! Both fire only off marker runs; lists additionally require the marker
//! to be the first character of its logical line. Tag balance across list
//! dedents is kept by the pending-close counter on [`ListRun`]; see the
//! force-close arithmetic in [`Session::close_list`].

use crate::limits;
use crate::scanner::Session;
use crate::state::{Heading, ListKind, ListRun, ParserState};

impl Session<'_> {
    /// An `=` run: closes an open heading (at the *closing* run's length),
    /// opens one at line start, or is literal text elsewhere.
    pub(crate) fn handle_heading_marker(&mut self) {
        let run = self.cursor.run_len(b'=');
        if self.state.heading.take().is_some() {
            // Mismatched open/close lengths are accepted at face value:
            // each side uses its own run count.
            self.writer.heading_end(ParserState::heading_level(run));
        } else if self.state.at_line_start {
            let level = ParserState::heading_level(run);
            self.writer.heading_start(level);
            self.state.heading = Some(Heading {
                level,
                seen_text: false,
            });
        } else {
            self.state.mark_visible();
            for _ in 0..run {
                self.writer.write_escaped_byte(b'=');
            }
        }
        self.cursor.advance(run);
        self.state.at_line_start = false;
    }

    /// A `*`/`#` run at line start adjusts the active list; anywhere else
    /// the marker is literal text.
    pub(crate) fn handle_list_marker(&mut self, kind: ListKind) {
        if !self.state.at_line_start {
            self.emit_literal(kind.marker());
            return;
        }
        let consumed = self.cursor.run_len(kind.marker());
        let run_len = consumed.min(limits::MAX_LIST_DEPTH);
        let tag = kind.tag();

        match self.state.list {
            None => {
                // Brand-new list: one group and one item, whatever the
                // run length says the depth is.
                self.writer.list_start(tag);
                self.writer.item_start();
                self.state.list = Some(ListRun {
                    kind,
                    depth: run_len,
                    pending_close: 0,
                    seen_text: false,
                });
            }
            Some(mut run) => {
                // The newline handler closes a run before a line of the
                // other kind can reach this point.
                debug_assert_eq!(run.kind, kind);
                if run_len > run.depth {
                    // Nesting increase: open without closing the current
                    // item.
                    for _ in run.depth..run_len {
                        self.writer.list_start(tag);
                        self.writer.item_start();
                    }
                } else if run_len < run.depth {
                    // Dedent: close the inner levels, open a sibling at
                    // the new depth, and owe one </li> for the final
                    // force-close.
                    for _ in run_len..run.depth {
                        self.writer.item_end();
                        self.writer.list_end(tag);
                    }
                    self.writer.item_start();
                    run.pending_close += 1;
                } else {
                    // Sibling item at the same depth.
                    self.writer.item_end();
                    self.writer.item_start();
                }
                run.depth = run_len;
                run.seen_text = false;
                self.state.list = Some(run);
            }
        }
        self.cursor.advance(consumed);
        self.state.at_line_start = false;
    }

    /// Force-close the active list run, balancing every tag opened since
    /// it began: `(depth - 1)` inner `</li></ul|ol>` pairs, the owed
    /// pending `</li>` tags, then the outermost `</li></ul|ol>`.
    pub(crate) fn close_list(&mut self) {
        if let Some(run) = self.state.list.take() {
            let tag = run.kind.tag();
            for _ in 1..run.depth {
                self.writer.item_end();
                self.writer.list_end(tag);
            }
            for _ in 0..run.pending_close {
                self.writer.item_end();
            }
            self.writer.item_end();
            self.writer.list_end(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::{ScanOutcome, Session};

    fn scan_all(input: &str) -> String {
        let mut session = Session::document(input, false);
        loop {
            match session.scan() {
                ScanOutcome::Finished => break,
                ScanOutcome::Transclude(_) => session.splice(""),
            }
        }
        session.finish()
    }

    #[test]
    fn heading_opens_and_closes_on_same_line() {
        assert_eq!(scan_all("= Heading =\n"), "<p><h1>Heading </h1>\n</p>");
    }

    #[test]
    fn mid_line_equals_is_literal() {
        assert_eq!(scan_all("a = b"), "<p>a = b</p>");
    }

    #[test]
    fn flat_list() {
        assert_eq!(scan_all("* a\n* b\n"), "<p><ul><li>a</li><li>b</li></ul></p>");
    }

    #[test]
    fn nested_then_dedent() {
        assert_eq!(
            scan_all("* a\n** b\n* c\n"),
            "<p><ul><li>a<ul><li>b</li></ul><li>c</li></li></ul></p>"
        );
    }

    #[test]
    fn ordered_list_uses_ol() {
        assert_eq!(scan_all("# one\n# two\n"), "<p><ol><li>one</li><li>two</li></ol></p>");
    }

    #[test]
    fn marker_mid_line_is_literal() {
        assert_eq!(scan_all("2 * 3 # 4"), "<p>2 * 3 # 4</p>");
    }

    #[test]
    fn list_closes_at_end_of_input_without_newline() {
        assert_eq!(scan_all("* a"), "<p><ul><li>a</li></ul></p>");
    }
}
