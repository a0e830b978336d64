//! Per-request render metrics.

use dashkit_core::{LifecyclePhase, RequestId, TimingContext};
use serde::Serialize;

/// Timing and outcome of one server-rendered request.
#[derive(Debug, Clone, Serialize)]
pub struct RenderMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Requested path.
    pub path: String,
    /// Time spent rendering the view tree (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_us: Option<u64>,
    /// Time spent loading the manifest (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_us: Option<u64>,
    /// Total request duration (microseconds).
    pub total_us: u64,
    /// Number of chunks the render touched.
    pub chunk_count: usize,
    /// HTTP status code sent.
    pub status_code: u16,
    /// Redirect target, if the render redirected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RenderMetrics {
    /// Build metrics from a request's timing marks.
    pub fn from_timing(
        request_id: &RequestId,
        path: &str,
        timing: &TimingContext,
        chunk_count: usize,
        status_code: u16,
    ) -> Self {
        let micros = |d: std::time::Duration| d.as_micros() as u64;

        Self {
            request_id: request_id.to_string(),
            path: path.to_string(),
            render_us: timing
                .between(LifecyclePhase::Start, LifecyclePhase::Rendered)
                .map(micros),
            manifest_us: timing
                .between(LifecyclePhase::Rendered, LifecyclePhase::ManifestLoaded)
                .map(micros),
            total_us: micros(timing.elapsed()),
            chunk_count,
            status_code,
            redirect: None,
        }
    }

    /// Record the redirect target.
    pub fn with_redirect(mut self, location: impl Into<String>) -> Self {
        self.redirect = Some(location.into());
        self
    }

    /// Emit as a single structured event.
    pub fn emit(&self) {
        tracing::info!(
            request_id = %self.request_id,
            path = %self.path,
            status = self.status_code,
            render_us = self.render_us,
            manifest_us = self.manifest_us,
            total_us = self.total_us,
            chunks = self.chunk_count,
            redirect = self.redirect.as_deref(),
            "render complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timing() {
        let mut timing = TimingContext::new();
        timing.mark(LifecyclePhase::Rendered);
        timing.mark(LifecyclePhase::ManifestLoaded);

        let metrics = RenderMetrics::from_timing(
            &RequestId::from_string("req-1"),
            "/dashboards/projects",
            &timing,
            2,
            200,
        );

        assert_eq!(metrics.request_id, "req-1");
        assert!(metrics.render_us.is_some());
        assert!(metrics.manifest_us.is_some());
        assert!(metrics.total_us >= metrics.render_us.unwrap());
        assert_eq!(metrics.chunk_count, 2);
    }

    #[test]
    fn test_json_omits_unreached_phases() {
        let metrics = RenderMetrics::from_timing(
            &RequestId::from_string("req-2"),
            "/",
            &TimingContext::new(),
            0,
            302,
        )
        .with_redirect("/dashboards/projects");

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["status_code"], 302);
        assert_eq!(json["redirect"], "/dashboards/projects");
        assert!(json.get("render_us").is_none());
        assert!(json.get("manifest_us").is_none());
    }
}
