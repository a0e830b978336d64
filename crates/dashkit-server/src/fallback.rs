//! Content-negotiated error responses.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use dashkit_core::{media, AcceptHeader};
use dashkit_render::{html_escape, DocumentParts, LayoutTemplate};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// 404 response for a request nothing else handled.
pub fn not_found(accept: &AcceptHeader, url: &str) -> Response {
    negotiated(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE, accept, url)
}

/// Error response whose body format follows the Accept header: an HTML page,
/// a JSON object with an `error` field, or plain text, in that preference.
pub fn negotiated(status: StatusCode, message: &str, accept: &AcceptHeader, url: &str) -> Response {
    match accept.first_accepted(&[media::HTML, media::JSON]) {
        Some(media::HTML) => (status, Html(error_page(status, message, url))).into_response(),
        Some(_) => (status, Json(ErrorBody { error: message })).into_response(),
        None => (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message.to_string(),
        )
            .into_response(),
    }
}

fn error_page(status: StatusCode, message: &str, url: &str) -> String {
    let content = format!(
        r#"<div class="error-page">
    <h1 class="display-1">{code}</h1>
    <p class="lead">{message}</p>
    <p><code>{url}</code></p>
    <a href="/">Back to Home</a>
</div>"#,
        code = status.as_u16(),
        message = html_escape(message),
        url = html_escape(url),
    );
    let title = format!("{} {}", status.as_u16(), message);

    LayoutTemplate::default().compose(&DocumentParts {
        title: &title,
        content: &content,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_not_found_json() {
        let accept = AcceptHeader::parse(Some("application/json"));
        let response = not_found(&accept, "/missing");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&response), "application/json");
        assert_eq!(body_string(response).await, r#"{"error":"Not found"}"#);
    }

    #[tokio::test]
    async fn test_not_found_text() {
        let accept = AcceptHeader::parse(Some("text/plain"));
        let response = not_found(&accept, "/missing");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(content_type(&response).starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Not found");
    }

    #[tokio::test]
    async fn test_not_found_html_escapes_url() {
        let accept = AcceptHeader::parse(Some("text/html"));
        let response = not_found(&accept, "/<script>");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(content_type(&response).starts_with("text/html"));
        let body = body_string(response).await;
        assert!(body.contains("<title>404 Not found</title>"));
        assert!(body.contains("/&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_html_preferred_over_json_when_both_accepted() {
        let accept = AcceptHeader::parse(Some("application/json, text/html;q=0.5"));
        let response = not_found(&accept, "/x");
        assert!(content_type(&response).starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_internal_error_json() {
        let accept = AcceptHeader::parse(Some("application/json"));
        let response = negotiated(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE,
            &accept,
            "/",
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Internal server error"}"#
        );
    }
}
