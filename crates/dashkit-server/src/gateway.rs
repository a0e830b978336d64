//! Render gateway: server-side rendering of page requests.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use dashkit_core::{LifecyclePhase, RequestContext};
use dashkit_manifest::{flush_chunks, normalize_chunk_name, FlushedChunks};
use dashkit_observability::RenderMetrics;
use dashkit_render::{DocumentParts, RenderContext};

use crate::error::GatewayError;
use crate::fallback;
use crate::state::GatewayState;

/// Request ID response header.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Result of rendering one page request.
#[derive(Debug)]
pub enum PageOutcome {
    /// The render settled on the requested path.
    Page {
        document: String,
        chunks: FlushedChunks,
    },
    /// Route logic moved to another path during render.
    Redirect {
        location: String,
        chunks: FlushedChunks,
    },
    /// No route matches; the request falls through to the 404 handler.
    NotFound,
}

impl PageOutcome {
    fn chunk_count(&self) -> usize {
        match self {
            Self::Page { chunks, .. } | Self::Redirect { chunks, .. } => {
                chunks.scripts.len() + chunks.stylesheets.len()
            }
            Self::NotFound => 0,
        }
    }
}

/// Axum handler for every request the static file server did not answer.
pub async fn render_page(State(state): State<Arc<GatewayState>>, request: Request) -> Response {
    let mut ctx = RequestContext::new(request.method().clone(), request.uri(), request.headers());

    let outcome = if ctx.wants_page() {
        render(&state, &mut ctx).await
    } else {
        Ok(PageOutcome::NotFound)
    };
    let chunk_count = outcome.as_ref().map(PageOutcome::chunk_count).unwrap_or(0);

    let mut response = match outcome {
        Ok(PageOutcome::Page { document, .. }) => Html(document).into_response(),
        Ok(PageOutcome::Redirect { location, .. }) => redirect(&location)
            .unwrap_or_else(|err| err.into_response_for(&ctx.accept, &ctx.url)),
        Ok(PageOutcome::NotFound) => fallback::not_found(&ctx.accept, &ctx.url),
        Err(err) => err.into_response_for(&ctx.accept, &ctx.url),
    };

    if let Ok(value) = HeaderValue::from_str(ctx.request_id.as_str()) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), value);
    }

    let mut metrics = RenderMetrics::from_timing(
        &ctx.request_id,
        ctx.pathname(),
        &ctx.timing,
        chunk_count,
        response.status().as_u16(),
    );
    if let Some(location) = response.headers().get(header::LOCATION) {
        metrics = metrics.with_redirect(location.to_str().unwrap_or_default());
    }
    metrics.emit();

    response
}

/// Render the page for `ctx`.
///
/// The render context is created here and dropped on return, so chunk
/// names and routing state never outlive the request.
pub async fn render(
    state: &GatewayState,
    ctx: &mut RequestContext,
) -> Result<PageOutcome, GatewayError> {
    let mut render = RenderContext::new(&ctx.url, state.site_title.as_str());

    let rendered = panic::catch_unwind(AssertUnwindSafe(|| state.renderer.render(&mut render)))
        .map_err(|payload| GatewayError::Panicked(panic_message(payload.as_ref())))?;

    let content = match rendered {
        Ok(content) => content,
        Err(err) if err.is_not_found() => {
            tracing::debug!(url = %ctx.url, "no route matched");
            return Ok(PageOutcome::NotFound);
        }
        Err(err) => return Err(GatewayError::Render(err)),
    };
    ctx.timing.mark(LifecyclePhase::Rendered);

    let manifest = state.manifest.load().await?;
    ctx.timing.mark(LifecyclePhase::ManifestLoaded);

    let entry_files = manifest.entrypoint_files(state.entry.as_deref());
    let chunk_names: Vec<String> = render
        .chunks
        .flush()
        .iter()
        .map(|name| normalize_chunk_name(name))
        .collect();
    let chunks = flush_chunks(&manifest, &chunk_names, &state.flush_options);

    let document = state.layout.compose(&DocumentParts {
        title: &state.site_title,
        content: &content,
        public_path: &chunks.public_path,
        chunk_scripts: &chunks.scripts,
        chunk_stylesheets: &chunks.stylesheets,
        entry_files: &entry_files,
    });
    ctx.timing.mark(LifecyclePhase::Composed);

    if let Some(location) = render.redirected_to() {
        return Ok(PageOutcome::Redirect {
            location: location.to_string(),
            chunks,
        });
    }

    Ok(PageOutcome::Page { document, chunks })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn redirect(location: &str) -> Result<Response, GatewayError> {
    let value = HeaderValue::from_str(location)
        .map_err(|_| GatewayError::InvalidRedirect(location.to_string()))?;

    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::FOUND;
    response.headers_mut().insert(header::LOCATION, value);
    Ok(response)
}
