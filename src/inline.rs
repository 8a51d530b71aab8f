//! Inline formatting: apostrophe-run emphasis.
//!
//! Wikitext emphasis is toggle-based: a run of apostrophes flips the
//! matching state on or off, with no opener/closer pairing. Run lengths
//! the source language left undefined (4, and anything past 5) emit their
//! leftover apostrophes as literals before the nearest recognized toggle.

use crate::scanner::Session;

impl Session<'_> {
    /// Resolve one apostrophe run.
    ///
    /// - 1: literal apostrophe
    /// - 2: italic toggle
    /// - 3: bold toggle
    /// - 4: one literal apostrophe, then a bold toggle
    /// - 5: bold-italic toggle (independent of the other two)
    /// - n>5: `n - 5` literal apostrophes, then a bold-italic toggle
    pub(crate) fn handle_apostrophes(&mut self) {
        let run = self.cursor.run_len(b'\'');
        match run {
            1 => self.writer.write_escaped_byte(b'\''),
            2 => self.toggle_italic(),
            3 => self.toggle_bold(),
            4 => {
                self.writer.write_escaped_byte(b'\'');
                self.toggle_bold();
            }
            5 => self.toggle_bold_italic(),
            n => {
                for _ in 0..n - 5 {
                    self.writer.write_escaped_byte(b'\'');
                }
                self.toggle_bold_italic();
            }
        }
        self.state.mark_visible();
        self.cursor.advance(run);
        self.state.at_line_start = false;
    }

    fn toggle_italic(&mut self) {
        if self.state.emphasis.italic {
            self.writer.write_str("</i>");
        } else {
            self.writer.write_str("<i>");
        }
        self.state.emphasis.italic = !self.state.emphasis.italic;
    }

    fn toggle_bold(&mut self) {
        if self.state.emphasis.bold {
            self.writer.write_str("</strong>");
        } else {
            self.writer.write_str("<strong>");
        }
        self.state.emphasis.bold = !self.state.emphasis.bold;
    }

    fn toggle_bold_italic(&mut self) {
        if self.state.emphasis.bold_italic {
            self.writer.write_str("</i></strong>");
        } else {
            self.writer.write_str("<strong><i>");
        }
        self.state.emphasis.bold_italic = !self.state.emphasis.bold_italic;
    }

    /// Force-close anything still toggled on at end of input.
    pub(crate) fn close_emphasis(&mut self) {
        if self.state.emphasis.italic {
            self.toggle_italic();
        }
        if self.state.emphasis.bold {
            self.toggle_bold();
        }
        if self.state.emphasis.bold_italic {
            self.toggle_bold_italic();
        }
    }
}
