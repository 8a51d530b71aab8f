//! wikiforge: streaming wikitext to HTML rendering engine
//!
//! A single-pass, character-driven compiler for lightweight wiki markup:
//! headings (`= ... =`), apostrophe-run emphasis (`''`/`'''`/`'''''`),
//! nested ordered/unordered lists (`#`/`*`), and recursive asynchronous
//! template transclusion (`{{Name|args}}`).
//!
//! # Design principles
//! - No AST: one cursor, strictly left to right, no backtracking
//! - Append-only output: emitted HTML is never rewritten
//! - Always terminates with output: malformed markup force-closes at end
//!   of input instead of erroring
//! - One suspension point: the scan pauses only to await page resolution,
//!   then resumes at the same cursor position
//!
//! # Example
//! ```
//! # async fn demo() {
//! use wikiforge::{render, NullResolver};
//!
//! let html = render("= Title =\n'''bold''' text", &NullResolver).await;
//! assert!(html.contains("<h1>Title </h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! # }
//! ```
//!
//! Transclusion pulls page *source* through a [`PageResolver`] and renders
//! it recursively, guarded by a depth limit and a visited-title set; a
//! missing page, a resolver error, or a guard hit all render the same
//! inline placeholder and never fail the surrounding document.

pub mod cursor;
pub mod escape;
pub mod limits;
pub mod render;
pub mod resolver;
pub mod state;
pub mod template;
pub mod title;

mod block;
mod inline;
mod scanner;

pub use resolver::{MemoryResolver, NullResolver, PageResolver, ResolveError};
pub use template::TemplateRef;
pub use title::PageTitle;

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::render::HtmlWriter;
use crate::scanner::{ScanOutcome, Session};
use crate::template::IncludeGuard;

/// Rendering options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Wrap the output in `<div class="wiki-content">...</div>`.
    pub wrap_in_container: bool,
    /// Maximum template inclusion depth before the placeholder path.
    pub max_include_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap_in_container: true,
            max_include_depth: limits::MAX_INCLUDE_DEPTH,
        }
    }
}

/// Render wikitext to HTML with default options.
///
/// Never fails: any input produces an HTML string.
pub async fn render(input: &str, resolver: &dyn PageResolver) -> String {
    render_with_options(input, resolver, &Options::default()).await
}

/// Render wikitext to HTML.
pub async fn render_with_options(
    input: &str,
    resolver: &dyn PageResolver,
    options: &Options,
) -> String {
    let mut guard = IncludeGuard::new(options.max_include_depth);
    let mut session = Session::document(input, options.wrap_in_container);
    drive(&mut session, resolver, &mut guard).await;
    session.finish()
}

/// Pump one session to completion, resolving each transclusion it
/// suspends on.
async fn drive(session: &mut Session<'_>, resolver: &dyn PageResolver, guard: &mut IncludeGuard) {
    loop {
        match session.scan() {
            ScanOutcome::Finished => break,
            ScanOutcome::Transclude(reference) => {
                let html = expand(&reference, resolver, guard).await;
                session.splice(&html);
            }
        }
    }
}

/// Resolve one template reference into the HTML to splice.
///
/// Every failure branch (guard hit, missing page, resolver error) emits
/// the same inline placeholder; nothing propagates out.
async fn expand(
    reference: &TemplateRef,
    resolver: &dyn PageResolver,
    guard: &mut IncludeGuard,
) -> String {
    let title = reference.title();
    if !guard.enter(&title) {
        return missing(&title);
    }
    let html = match resolver.resolve(&title).await {
        Ok(Some(source)) => {
            debug!(%title, "transcluding page");
            render_fragment(&source, resolver, guard).await
        }
        Ok(None) => {
            debug!(%title, "transcluded page not found");
            missing(&title)
        }
        Err(error) => {
            debug!(%title, %error, "page resolution failed");
            missing(&title)
        }
    };
    guard.leave(&title);
    html
}

/// Recursively render a transcluded page as a bare fragment.
///
/// Boxed to break the `expand` → `render_fragment` → `expand` cycle; the
/// scanner loop itself stays synchronous.
fn render_fragment<'a>(
    input: &'a str,
    resolver: &'a dyn PageResolver,
    guard: &'a mut IncludeGuard,
) -> Pin<Box<dyn Future<Output = String> + Send + 'a>> {
    Box::pin(async move {
        let mut session = Session::fragment(input);
        drive(&mut session, resolver, guard).await;
        session.finish()
    })
}

/// The inline marker spliced for an unresolvable template.
fn missing(title: &PageTitle) -> String {
    let mut writer = HtmlWriter::with_capacity_for(64);
    writer.missing_template(title);
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plain_text_is_wrapped() {
        let html = render("Hello, world!", &NullResolver).await;
        assert_eq!(
            html,
            "<div class=\"wiki-content\"><p>Hello, world!</p></div>"
        );
    }

    #[test]
    fn default_options_wrap_and_limit() {
        let options = Options::default();
        assert!(options.wrap_in_container);
        assert_eq!(options.max_include_depth, limits::MAX_INCLUDE_DEPTH);
    }

    #[tokio::test]
    async fn container_can_be_disabled() {
        let options = Options {
            wrap_in_container: false,
            ..Options::default()
        };
        let html = render_with_options("hi", &NullResolver, &options).await;
        assert_eq!(html, "<p>hi</p>");
    }

    #[tokio::test]
    async fn markup_in_text_is_escaped() {
        let html = render("<script>alert('x')</script>", &NullResolver).await;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn same_input_same_output() {
        let mut resolver = MemoryResolver::new();
        resolver.insert("Template:T", "''x''");
        let first = render("a {{T}} b", &resolver).await;
        let second = render("a {{T}} b", &resolver).await;
        assert_eq!(first, second);
    }
}
