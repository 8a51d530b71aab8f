//! Depth and size caps.
//!
//! These limits keep pathological inputs (and self-transcluding pages)
//! from recursing or nesting without bound.

/// Maximum template inclusion depth before the placeholder path is taken.
pub const MAX_INCLUDE_DEPTH: usize = 16;

/// Maximum heading level; longer `=` runs clamp to this.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Maximum list nesting depth; longer marker runs clamp to this.
pub const MAX_LIST_DEPTH: usize = 32;
