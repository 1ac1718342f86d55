//! Response builders for the non-JSON surface
//!
//! Plain-text status responses, the OPTIONS preflight answer, and the
//! cached file responses used by the static and gallery routes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Plain-text response with a status line body, e.g. `404 Not Found`
fn plain_status(status: StatusCode, allow: Option<&str>) -> Response<Full<Bytes>> {
    let text = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    );

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/plain");
    if let Some(methods) = allow {
        builder = builder.header("Allow", methods);
    }

    builder
        .body(Full::new(Bytes::from(text)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 304 Not Modified, echoing the tag the client revalidated with
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

pub fn build_404_response() -> Response<Full<Bytes>> {
    plain_status(StatusCode::NOT_FOUND, None)
}

/// 405 for static routes; the JSON API has its own 405 shape
pub fn build_405_response() -> Response<Full<Bytes>> {
    plain_status(StatusCode::METHOD_NOT_ALLOWED, Some("GET, HEAD, OPTIONS"))
}

pub fn build_413_response() -> Response<Full<Bytes>> {
    plain_status(StatusCode::PAYLOAD_TOO_LARGE, None)
}

/// Preflight answer: 200 with an empty body.
///
/// The allow-origin header itself is stamped uniformly by the router;
/// only the method/header grants live here.
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Allow", "GET, POST, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Inline HTML page (the placeholder homepage)
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// File response with revalidation headers. HEAD keeps the metadata
/// headers but drops the body.
pub fn build_cached_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=3600")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_status_bodies() {
        assert_eq!(build_404_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(build_413_response().status(), StatusCode::PAYLOAD_TOO_LARGE);

        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            resp.headers().get("Allow").and_then(|v| v.to_str().ok()),
            Some("GET, HEAD, OPTIONS")
        );
    }

    #[test]
    fn test_options_response_is_empty_200() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Access-Control-Allow-Methods")
                .and_then(|v| v.to_str().ok()),
            Some("GET, POST, OPTIONS")
        );
    }

    #[test]
    fn test_options_response_without_cors() {
        let resp = build_options_response(false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("Access-Control-Allow-Methods").is_none());
        assert!(resp.headers().get("Allow").is_some());
    }

    #[test]
    fn test_cached_response_headers() {
        let resp = build_cached_response(Bytes::from("img"), "image/png", "\"3-e1\"", false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("image/png")
        );
        assert_eq!(
            resp.headers().get("ETag").and_then(|v| v.to_str().ok()),
            Some("\"3-e1\"")
        );
    }

    #[test]
    fn test_head_omits_body_but_keeps_length() {
        let resp = build_cached_response(Bytes::from("12345"), "text/plain", "\"5-e2\"", true);
        assert_eq!(
            resp.headers()
                .get("Content-Length")
                .and_then(|v| v.to_str().ok()),
            Some("5")
        );
    }

    #[test]
    fn test_304_echoes_etag() {
        let resp = build_304_response("\"5-e2\"");
        assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(
            resp.headers().get("ETag").and_then(|v| v.to_str().ok()),
            Some("\"5-e2\"")
        );
    }
}
