//! Request context and URL helpers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use http::{header, HeaderMap, Method, Uri};

use crate::accept::{media, AcceptHeader};
use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    ///
    /// Unique within the process: a start timestamp plus a monotonic counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request context, created when a request arrives and dropped with it.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request target as received (path plus query).
    pub url: String,
    /// Parsed Accept header.
    pub accept: AcceptHeader,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from the request line and headers.
    pub fn new(method: Method, uri: &Uri, headers: &HeaderMap) -> Self {
        let url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());
        let accept = AcceptHeader::parse(
            headers
                .get(header::ACCEPT)
                .and_then(|value| value.to_str().ok()),
        );

        Self {
            request_id: RequestId::generate(),
            method,
            url,
            accept,
            timing: TimingContext::new(),
        }
    }

    /// The path component of the URL.
    pub fn pathname(&self) -> &str {
        pathname(&self.url)
    }

    /// Whether the client accepts an HTML response.
    pub fn accepts_html(&self) -> bool {
        self.accept.accepts(media::HTML)
    }

    /// Whether the request should be server-rendered: it accepts HTML and
    /// does not name a file.
    pub fn wants_page(&self) -> bool {
        self.accepts_html() && file_extension(&self.url).is_none()
    }
}

/// Strip the query string and fragment from a URL.
pub fn pathname(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Extension of the last path segment, without the dot.
///
/// The query string is ignored, and dotfiles such as `/.well-known` have
/// no extension.
pub fn file_extension(url: &str) -> Option<&str> {
    let path = pathname(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let dot = segment.rfind('.')?;
    if dot == 0 {
        return None;
    }
    let ext = &segment[dot + 1..];
    (!ext.is_empty()).then_some(ext)
}
