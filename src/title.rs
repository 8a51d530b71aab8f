//! Page title parsing.
//!
//! The transclusion resolver addresses pages as `Namespace:Name`. A bare
//! template reference lands in the `Template` namespace; a leading `:`
//! selects the main (unprefixed) namespace.

use std::fmt;

/// Default namespace for bare template references.
pub const TEMPLATE_NAMESPACE: &str = "Template";

/// A namespaced page address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageTitle {
    pub namespace: Option<String>,
    pub name: String,
}

impl PageTitle {
    /// Parse a raw template reference into a namespaced title.
    ///
    /// - `Foo` → `Template:Foo`
    /// - `Help:Foo` → `Help:Foo`
    /// - `:Foo` → `Foo` (main namespace)
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix(':') {
            return Self {
                namespace: None,
                name: rest.trim().to_owned(),
            };
        }
        match raw.split_once(':') {
            Some((ns, name)) if !ns.is_empty() => Self {
                namespace: Some(ns.trim().to_owned()),
                name: name.trim().to_owned(),
            },
            _ => Self {
                namespace: Some(TEMPLATE_NAMESPACE.to_owned()),
                name: raw.to_owned(),
            },
        }
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}:{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
