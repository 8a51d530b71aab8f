//! HTML output writer.
//!
//! A thin append-only buffer with helpers for the tags this engine emits.
//! Output is never rewritten once appended; every handler works strictly
//! by appending at the current end of the buffer.

use crate::escape;
use crate::title::PageTitle;

/// Append-only HTML output buffer.
///
/// # Example
/// ```
/// use wikiforge::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph_start();
/// writer.write_escaped(b"a < b");
/// writer.paragraph_end();
/// assert_eq!(writer.into_string(), "<p>a &lt; b</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create with capacity sized for an input of `input_len` bytes.
    ///
    /// Rendered wikitext usually grows a little past its source.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4 + 64),
        }
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write an already-rendered HTML fragment (transclusion splice).
    #[inline]
    pub fn write_html(&mut self, html: &str) {
        self.out.extend_from_slice(html.as_bytes());
    }

    /// Write text content with HTML escaping.
    #[inline]
    pub fn write_escaped(&mut self, text: &[u8]) {
        escape::escape_into(&mut self.out, text);
    }

    /// Write a single text byte with HTML escaping.
    #[inline]
    pub fn write_escaped_byte(&mut self, b: u8) {
        escape::escape_byte_into(&mut self.out, b);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Take ownership of the output as a `String`.
    ///
    /// Only UTF-8 is ever written: ASCII tags, escaped text, and input
    /// bytes copied verbatim from a `&str`.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: see above; all writes preserve UTF-8.
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    // --- Block elements ---

    #[inline]
    pub fn container_start(&mut self) {
        self.write_str("<div class=\"wiki-content\">");
    }

    #[inline]
    pub fn container_end(&mut self) {
        self.write_str("</div>");
    }

    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write `<hN>`.
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.out.push(b'0' + level);
        self.out.push(b'>');
    }

    /// Write `</hN>`.
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.out.push(b'0' + level);
        self.out.push(b'>');
    }

    /// Write `<ul>` or `<ol>`.
    #[inline]
    pub fn list_start(&mut self, tag: &'static str) {
        self.out.push(b'<');
        self.write_str(tag);
        self.out.push(b'>');
    }

    /// Write `</ul>` or `</ol>`.
    #[inline]
    pub fn list_end(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.out.push(b'>');
    }

    #[inline]
    pub fn item_start(&mut self) {
        self.write_str("<li>");
    }

    #[inline]
    pub fn item_end(&mut self) {
        self.write_str("</li>");
    }

    // --- Transclusion placeholder ---

    /// Inline marker for a template that could not be transcluded:
    /// a styled span linking to the missing title.
    pub fn missing_template(&mut self, title: &PageTitle) {
        let full = title.to_string();
        self.write_str("<span class=\"template-not-found\"><a href=\"/wiki/");
        self.write_escaped(full.replace(' ', "_").as_bytes());
        self.write_str("\">");
        self.write_escaped(full.as_bytes());
        self.write_str("</a></span>");
    }
}
