//! Page resolution: the engine's single external collaborator.
//!
//! The resolver hands back the wikitext *source* of a page; the engine
//! renders it recursively, which is what lets the inclusion guard see
//! every hop of a transclusion chain.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::title::PageTitle;

/// Failure inside a resolver implementation.
///
/// The engine never propagates this out of `render`; any error collapses
/// into the same inline placeholder as a missing page.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("page storage unavailable: {0}")]
    Unavailable(String),
    #[error("page resolution failed: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Asynchronous lookup of page source by title.
///
/// Must be safe for concurrent use; one resolver typically serves many
/// simultaneous render calls. Called recursively for nested transclusions.
#[async_trait]
pub trait PageResolver: Send + Sync {
    /// Fetch the wikitext source of `title`, or `None` if the page does
    /// not exist.
    async fn resolve(&self, title: &PageTitle) -> Result<Option<String>, ResolveError>;
}

/// Resolver that knows no pages. Every transclusion renders as the
/// not-found placeholder.
#[derive(Debug, Default)]
pub struct NullResolver;

#[async_trait]
impl PageResolver for NullResolver {
    async fn resolve(&self, _title: &PageTitle) -> Result<Option<String>, ResolveError> {
        Ok(None)
    }
}

/// In-memory resolver keyed by full title (`Namespace:Name`).
///
/// Intended for tests and embedders that preload page sources.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    pages: FxHashMap<String, String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page under its full title, e.g. `"Template:Infobox"`.
    pub fn insert(&mut self, title: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.pages.insert(title.into(), source.into());
        self
    }
}

#[async_trait]
impl PageResolver for MemoryResolver {
    async fn resolve(&self, title: &PageTitle) -> Result<Option<String>, ResolveError> {
        Ok(self.pages.get(&title.to_string()).cloned())
    }
}
