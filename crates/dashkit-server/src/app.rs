//! HTTP router and listener.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, services::ServeDir,
    trace::TraceLayer,
};

use crate::gateway;
use crate::state::GatewayState;

/// Build the router: static files first, then the render gateway, which
/// answers 404 for anything it does not render.
pub fn build_router(state: Arc<GatewayState>, static_root: impl AsRef<Path>) -> Router {
    let pages = Router::new()
        .fallback(gateway::render_page)
        .with_state(state);

    let static_files = ServeDir::new(static_root.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .fallback(pages);

    Router::new()
        .fallback_service(static_files)
        .layer(CatchPanicLayer::new())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
pub async fn serve(router: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "SSR application started!");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("SSR application shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
