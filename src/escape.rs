//! HTML escaping.
//!
//! Lookup-table driven: scan for the next escapable byte, bulk-copy the
//! clean segment before it, emit the entity, repeat.

/// Escapable bytes in text content and attribute values.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape `<`, `>`, `&` and `"` into the output buffer.
///
/// # Example
/// ```
/// use wikiforge::escape::escape_into;
///
/// let mut out = Vec::new();
/// escape_into(&mut out, b"a < b");
/// assert_eq!(out, b"a &lt; b");
/// ```
pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    let mut pos = 0;
    while pos < input.len() {
        let start = pos;
        while pos < input.len() && !ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }
        if pos > start {
            out.extend_from_slice(&input[start..pos]);
        }
        if pos < input.len() {
            let entity: &[u8] = match input[pos] {
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                b'"' => b"&quot;",
                other => {
                    // Not in the table; copy through.
                    out.push(other);
                    pos += 1;
                    continue;
                }
            };
            out.extend_from_slice(entity);
            pos += 1;
        }
    }
}

/// Escape a single byte into the output buffer.
#[inline]
pub fn escape_byte_into(out: &mut Vec<u8>, b: u8) {
    escape_into(out, &[b]);
}
