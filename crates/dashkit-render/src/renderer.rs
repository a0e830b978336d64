//! View tree renderer interface.

use crate::chunks::ChunkCollector;
use crate::error::RenderError;
use crate::history::MemoryHistory;
use crate::store::RequestStore;

/// Everything a render pass may read or advance, all owned by one request.
#[derive(Debug)]
pub struct RenderContext {
    /// Routing snapshot. Redirecting routes move it.
    pub history: MemoryHistory,
    /// Chunks touched by the render.
    pub chunks: ChunkCollector,
    /// Request-scoped application state.
    pub store: RequestStore,
}

impl RenderContext {
    /// Seed a fresh context from the request URL.
    pub fn new(url: &str, site_title: impl Into<String>) -> Self {
        let history = MemoryHistory::new(url);
        let store = RequestStore::new(&history, site_title);
        Self {
            history,
            chunks: ChunkCollector::new(),
            store,
        }
    }

    /// Whether the render moved the routing snapshot to another pathname.
    pub fn redirected_to(&self) -> Option<&str> {
        let resolved = &self.history.location().pathname;
        (resolved != &self.store.initial_location.pathname).then_some(resolved.as_str())
    }
}

/// Turns a render context into body markup.
///
/// Rendering is synchronous. Implementations record the chunks they
/// render into `ctx.chunks` and may redirect through `ctx.history`.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, ctx: &mut RenderContext) -> Result<String, RenderError>;
}

impl<F> ViewRenderer for F
where
    F: Fn(&mut RenderContext) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, ctx: &mut RenderContext) -> Result<String, RenderError> {
        self(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_not_redirected() {
        let ctx = RenderContext::new("/dashboards/projects?tab=1", "Dashkit");
        assert!(ctx.redirected_to().is_none());
        assert!(ctx.chunks.is_empty());
        assert_eq!(ctx.store.site_title, "Dashkit");
    }

    #[test]
    fn test_closure_renderer() {
        let renderer = |ctx: &mut RenderContext| {
            ctx.chunks.record("Pages/Closure");
            ctx.history.replace("/moved");
            Ok::<_, RenderError>("<p>hi</p>".to_string())
        };

        let mut ctx = RenderContext::new("/", "Dashkit");
        let html = renderer.render(&mut ctx).unwrap();

        assert_eq!(html, "<p>hi</p>");
        assert_eq!(ctx.chunks.names(), ["Pages/Closure"]);
        assert_eq!(ctx.redirected_to(), Some("/moved"));
    }

    #[test]
    fn test_query_change_is_not_redirect() {
        let mut ctx = RenderContext::new("/a?x=1", "Dashkit");
        ctx.history.replace("/a?x=2");
        assert!(ctx.redirected_to().is_none());
    }
}
