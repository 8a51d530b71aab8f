//! Template references and the inclusion guard.

use smallvec::SmallVec;
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::title::PageTitle;

/// A parsed `{{name|arg|..}}` reference.
///
/// Arguments are positional and carried verbatim; nothing validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    pub args: SmallVec<[String; 4]>,
}

impl TemplateRef {
    /// Split raw region content on `|` into name and positional arguments.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('|');
        let name = parts.next().unwrap_or_default().trim().to_owned();
        let args = parts.map(str::to_owned).collect();
        Self { name, args }
    }

    /// The namespaced page this reference resolves to.
    pub fn title(&self) -> PageTitle {
        PageTitle::parse(&self.name)
    }
}

/// Recursion guard threaded through every recursive render call.
///
/// Tracks the inclusion depth and the set of titles currently on the
/// include stack; a page that transitively transcludes itself is cut off
/// and takes the not-found placeholder path.
#[derive(Debug)]
pub struct IncludeGuard {
    max_depth: usize,
    depth: usize,
    active: FxHashSet<String>,
}

impl IncludeGuard {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
            active: FxHashSet::default(),
        }
    }

    /// Try to enter an inclusion of `title`. Returns `false` when the
    /// depth limit is hit or the title is already being included.
    pub fn enter(&mut self, title: &PageTitle) -> bool {
        if self.depth >= self.max_depth {
            warn!(%title, depth = self.depth, "template inclusion depth limit hit");
            return false;
        }
        let key = title.to_string();
        if !self.active.insert(key) {
            warn!(%title, "template inclusion cycle cut off");
            return false;
        }
        self.depth += 1;
        true
    }

    /// Leave an inclusion previously entered with [`IncludeGuard::enter`].
    pub fn leave(&mut self, title: &PageTitle) {
        self.depth -= 1;
        self.active.remove(&title.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_only() {
        let reference = TemplateRef::parse("Infobox");
        assert_eq!(reference.name, "Infobox");
        assert!(reference.args.is_empty());
    }

    #[test]
    fn parse_positional_args() {
        let reference = TemplateRef::parse("Box|first|second| third ");
        assert_eq!(reference.name, "Box");
        assert_eq!(reference.args.as_slice(), ["first", "second", " third "]);
    }

    #[test]
    fn name_is_trimmed_args_are_verbatim() {
        let reference = TemplateRef::parse(" Box \n|a");
        assert_eq!(reference.name, "Box");
        assert_eq!(reference.args.as_slice(), ["a"]);
    }

    #[test]
    fn title_uses_template_namespace() {
        let reference = TemplateRef::parse("Greeting|x");
        assert_eq!(reference.title().to_string(), "Template:Greeting");
    }

    #[test]
    fn guard_limits_depth() {
        let mut guard = IncludeGuard::new(2);
        let a = PageTitle::parse("A");
        let b = PageTitle::parse("B");
        let c = PageTitle::parse("C");
        assert!(guard.enter(&a));
        assert!(guard.enter(&b));
        assert!(!guard.enter(&c));
        guard.leave(&b);
        assert!(guard.enter(&c));
    }

    #[test]
    fn guard_rejects_active_title() {
        let mut guard = IncludeGuard::new(8);
        let a = PageTitle::parse("A");
        assert!(guard.enter(&a));
        assert!(!guard.enter(&a));
        guard.leave(&a);
        assert!(guard.enter(&a));
    }
}
