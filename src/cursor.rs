//! Byte cursor for single-pass scanning.
//!
//! The scanner walks the input strictly left to right; the cursor supports
//! the two lookahead shapes it needs: fixed-offset peeks (brace matching)
//! and run-length counting (marker runs).

/// A forward-only cursor over the input bytes.
///
/// # Example
/// ```
/// use wikiforge::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"'''bold");
/// assert_eq!(cursor.run_len(b'\''), 3);
/// cursor.advance(3);
/// assert_eq!(cursor.peek(), Some(b'b'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the input.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Check if the cursor has consumed the whole input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek the byte `n` positions ahead of the current one.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// Advance by `n` bytes (clamped to the end of input).
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by one byte.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Count the run of consecutive `b` bytes starting at the cursor.
    #[inline]
    pub fn run_len(&self, b: u8) -> usize {
        let rest = &self.input[self.pos..];
        rest.iter().take_while(|&&x| x == b).count()
    }

    /// Find the next occurrence of `needle` at or after the cursor,
    /// returning its distance from the current position.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, &self.input[self.pos..])
    }

    /// Slice of the input between two absolute offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Everything from an absolute offset to the end of input.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.input[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_eof() {
        let cursor = Cursor::new(b"");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.run_len(b'*'), 0);
    }

    #[test]
    fn peek_and_advance() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek_ahead(2), Some(b'c'));
        assert_eq!(cursor.peek_ahead(3), None);
        cursor.bump();
        assert_eq!(cursor.offset(), 1);
        cursor.advance(5);
        assert!(cursor.is_eof());
    }

    #[test]
    fn run_len_counts_marker_runs() {
        let cursor = Cursor::new(b"***#");
        assert_eq!(cursor.run_len(b'*'), 3);
        assert_eq!(cursor.run_len(b'#'), 0);

        let mut cursor = Cursor::new(b"''''' x");
        assert_eq!(cursor.run_len(b'\''), 5);
        cursor.advance(5);
        assert_eq!(cursor.run_len(b'\''), 0);
    }

    #[test]
    fn find_is_relative_to_cursor() {
        let mut cursor = Cursor::new(b"ab}cd}");
        assert_eq!(cursor.find(b'}'), Some(2));
        cursor.advance(3);
        assert_eq!(cursor.find(b'}'), Some(2));
        assert_eq!(cursor.find(b'x'), None);
    }

    #[test]
    fn slices_use_absolute_offsets() {
        let mut cursor = Cursor::new(b"{{Name}}");
        cursor.advance(2);
        let start = cursor.offset();
        cursor.advance(4);
        assert_eq!(cursor.slice(start, cursor.offset()), b"Name");
        assert_eq!(cursor.slice_from(start), b"Name}}");
    }
}
