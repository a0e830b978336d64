//! Route table renderer.

use crate::error::RenderError;
use crate::renderer::{RenderContext, ViewRenderer};
use crate::store::RequestStore;

/// Renders a page body from request state.
pub type View = fn(&RequestStore) -> String;

/// Wraps a rendered page in the surrounding layout.
pub type Layout = fn(&LayoutProps<'_>) -> String;

/// Everything a layout receives.
#[derive(Debug)]
pub struct LayoutProps<'a> {
    pub store: &'a RequestStore,
    /// Resolved pathname of the page.
    pub pathname: &'a str,
    /// Page title, if the route names one.
    pub title: Option<&'a str>,
    /// Rendered page body.
    pub content: &'a str,
}

/// Maximum redirects followed in one render.
pub const MAX_REDIRECTS: usize = 8;

/// A single entry in the route table.
#[derive(Debug, Clone)]
pub enum RouteEntry {
    /// Render `view`, recording `chunk` if set.
    Page {
        path: String,
        chunk: Option<String>,
        title: Option<String>,
        view: View,
    },
    /// Move the routing snapshot to `to` and render that route instead.
    Redirect { from: String, to: String },
}

impl RouteEntry {
    fn path(&self) -> &str {
        match self {
            Self::Page { path, .. } => path,
            Self::Redirect { from, .. } => from,
        }
    }
}

/// Table of page and redirect routes.
///
/// # Example
///
/// ```
/// use dashkit_render::RouteTable;
///
/// let routes = RouteTable::new()
///     .redirect("/", "/home")
///     .page("/home", Some("Pages/Home"), |_| "<h1>Home</h1>".to_string());
/// assert_eq!(routes.entries().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    layout: Option<Layout>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page.
    pub fn page(mut self, path: impl Into<String>, chunk: Option<&str>, view: View) -> Self {
        self.entries.push(RouteEntry::Page {
            path: path.into(),
            chunk: chunk.map(String::from),
            title: None,
            view,
        });
        self
    }

    /// Register a page with a title passed to the layout.
    pub fn titled_page(
        mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        chunk: Option<&str>,
        view: View,
    ) -> Self {
        self.entries.push(RouteEntry::Page {
            path: path.into(),
            chunk: chunk.map(String::from),
            title: Some(title.into()),
            view,
        });
        self
    }

    /// Register a redirect.
    pub fn redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push(RouteEntry::Redirect {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Wrap every page in a layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Find the entry for a pathname.
    pub fn find(&self, pathname: &str) -> Option<&RouteEntry> {
        let pathname = normalize_path(pathname);
        self.entries
            .iter()
            .find(|entry| normalize_path(entry.path()) == pathname)
    }
}

/// Trim a single trailing slash, keeping `/` itself.
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

impl ViewRenderer for RouteTable {
    fn render(&self, ctx: &mut RenderContext) -> Result<String, RenderError> {
        for _ in 0..=MAX_REDIRECTS {
            let pathname = ctx.history.location().pathname.clone();

            match self.find(&pathname) {
                None => return Err(RenderError::NoRoute(pathname)),
                Some(RouteEntry::Redirect { to, .. }) => {
                    tracing::debug!(from = %pathname, to = %to, "route redirect");
                    ctx.history.replace(to);
                }
                Some(RouteEntry::Page {
                    chunk, title, view, ..
                }) => {
                    if let Some(chunk) = chunk {
                        ctx.chunks.record(chunk.as_str());
                    }
                    let content = view(&ctx.store);
                    let html = match self.layout {
                        Some(layout) => layout(&LayoutProps {
                            store: &ctx.store,
                            pathname: &pathname,
                            title: title.as_deref(),
                            content: &content,
                        }),
                        None => content,
                    };
                    return Ok(html);
                }
            }
        }

        Err(RenderError::RedirectLoop(
            ctx.store.initial_location.pathname.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(_: &RequestStore) -> String {
        "<h1>Home</h1>".to_string()
    }

    fn echo_title(store: &RequestStore) -> String {
        format!("<h1>{}</h1>", store.site_title)
    }

    fn boxed(props: &LayoutProps<'_>) -> String {
        format!(
            "<main data-path=\"{}\" data-title=\"{}\">{}</main>",
            props.pathname,
            props.title.unwrap_or(""),
            props.content
        )
    }

    #[test]
    fn test_render_page_records_chunk() {
        let routes = RouteTable::new().page("/home", Some("Pages/Home"), home);
        let mut ctx = RenderContext::new("/home", "Dashkit");

        let html = routes.render(&mut ctx).unwrap();

        assert_eq!(html, "<h1>Home</h1>");
        assert_eq!(ctx.chunks.names(), ["Pages/Home"]);
        assert!(ctx.redirected_to().is_none());
    }

    #[test]
    fn test_page_without_chunk() {
        let routes = RouteTable::new().page("/home", None, echo_title);
        let mut ctx = RenderContext::new("/home", "Admin");

        assert_eq!(routes.render(&mut ctx).unwrap(), "<h1>Admin</h1>");
        assert!(ctx.chunks.is_empty());
    }

    #[test]
    fn test_trailing_slash_matches() {
        let routes = RouteTable::new().page("/home", None, home);
        let mut ctx = RenderContext::new("/home/", "Dashkit");
        assert!(routes.render(&mut ctx).is_ok());
    }

    #[test]
    fn test_redirect_moves_history() {
        let routes = RouteTable::new()
            .redirect("/old", "/new")
            .page("/new", Some("Pages/New"), home);
        let mut ctx = RenderContext::new("/old", "Dashkit");

        routes.render(&mut ctx).unwrap();

        assert_eq!(ctx.redirected_to(), Some("/new"));
        assert_eq!(ctx.chunks.names(), ["Pages/New"]);
    }

    #[test]
    fn test_unknown_route() {
        let routes = RouteTable::new().page("/home", None, home);
        let mut ctx = RenderContext::new("/nope", "Dashkit");

        let err = routes.render(&mut ctx).unwrap_err();
        assert_eq!(err, RenderError::NoRoute("/nope".to_string()));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_redirect_loop() {
        let routes = RouteTable::new().redirect("/a", "/b").redirect("/b", "/a");
        let mut ctx = RenderContext::new("/a", "Dashkit");

        let err = routes.render(&mut ctx).unwrap_err();
        assert_eq!(err, RenderError::RedirectLoop("/a".to_string()));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_layout_wraps_page() {
        let routes = RouteTable::new()
            .titled_page("/home", "Home", None, home)
            .with_layout(boxed);
        let mut ctx = RenderContext::new("/home", "Dashkit");

        assert_eq!(
            routes.render(&mut ctx).unwrap(),
            "<main data-path=\"/home\" data-title=\"Home\"><h1>Home</h1></main>"
        );
    }
}
