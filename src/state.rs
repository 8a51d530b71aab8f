//! Parser state for one rendering session.
//!
//! Every piece of lexical state the scan tracks lives here as a typed
//! field, so invalid combinations (a heading and a variable region open at
//! once reusing the same flag, say) cannot be represented.

use crate::limits;

/// What the scanner is currently consuming.
///
/// While inside a template region no output is produced; the region's
/// content is recovered as a slice once the closing braces are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal character dispatch.
    Normal,
    /// Inside `{{ ... }}`; `content_start` is the offset just past `{{`.
    Transclusion { content_start: usize },
    /// Inside `{{{ ... }}}`; `content_start` is the offset just past `{{{`.
    Variable { content_start: usize },
}

impl Mode {
    /// Byte length of the opening marker, if a region is open.
    pub fn marker_len(self) -> usize {
        match self {
            Mode::Normal => 0,
            Mode::Transclusion { .. } => 2,
            Mode::Variable { .. } => 3,
        }
    }
}

/// An open heading: the level written by `<hN>`, and whether the first
/// visible character after the opening run has been emitted (whitespace is
/// suppressed until then).
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub level: u8,
    pub seen_text: bool,
}

/// Independent emphasis toggles.
///
/// Bold-italic (`'''''`) is its own toggle and does not interact with the
/// plain italic/bold ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emphasis {
    pub italic: bool,
    pub bold: bool,
    pub bold_italic: bool,
}

/// Which list-group tag an active list emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The marker character that drives this kind.
    pub fn marker(self) -> u8 {
        match self {
            ListKind::Unordered => b'*',
            ListKind::Ordered => b'#',
        }
    }

    /// The list-group tag name.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    /// Classify a marker byte.
    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(ListKind::Unordered),
            b'#' => Some(ListKind::Ordered),
            _ => None,
        }
    }
}

/// An active run of list lines of a single kind.
///
/// `pending_close` counts dedent events; those `</li>` tags are owed when
/// the whole run force-closes, keeping open/close counts balanced.
#[derive(Debug, Clone, Copy)]
pub struct ListRun {
    pub kind: ListKind,
    pub depth: usize,
    pub pending_close: usize,
    pub seen_text: bool,
}

/// All mutable lexical state of one scan.
#[derive(Debug)]
pub struct ParserState {
    pub mode: Mode,
    pub heading: Option<Heading>,
    pub emphasis: Emphasis,
    pub list: Option<ListRun>,
    /// True when no character of the current logical line has been
    /// consumed yet; list markers and heading opens only fire here.
    pub at_line_start: bool,
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            heading: None,
            emphasis: Emphasis::default(),
            list: None,
            at_line_start: true,
        }
    }

    /// Record that a visible character was emitted, ending whitespace
    /// suppression for an open heading or list item.
    pub fn mark_visible(&mut self) {
        if let Some(heading) = &mut self.heading {
            heading.seen_text = true;
        }
        if let Some(run) = &mut self.list {
            run.seen_text = true;
        }
    }

    /// Whether whitespace should currently be suppressed: just after a
    /// heading open or list item open, before any visible character.
    pub fn suppress_whitespace(&self) -> bool {
        if let Some(heading) = &self.heading {
            if !heading.seen_text {
                return true;
            }
        }
        if let Some(run) = &self.list {
            if !run.seen_text {
                return true;
            }
        }
        false
    }

    /// Clamp a heading run length to a valid level.
    pub fn heading_level(run: usize) -> u8 {
        run.min(limits::MAX_HEADING_LEVEL as usize) as u8
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}
