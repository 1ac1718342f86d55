// API response utility functions module

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return fallback_error();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            fallback_error()
        })
}

/// Last-resort 500 when even response construction fails
fn fallback_error() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from(
        r#"{"success":false,"error":"Internal server error"}"#,
    )));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}

/// 400 Bad Request response
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::BAD_REQUEST,
        &serde_json::json!({ "success": false, "error": message }),
    )
}

/// 405 Method Not Allowed response
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &serde_json::json!({ "error": "Method not allowed" }),
    )
}

/// 404 Not Found response
pub fn not_found() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &serde_json::json!({
            "error": "Not Found",
            "availableEndpoints": ["/api", "/api/health", "/api/gallery", "/api/contact"],
        }),
    )
}

/// 500 with a generic message; `debug` is only attached when the
/// development-mode flag opted in
pub fn server_error(message: &str, debug: Option<serde_json::Value>) -> Response<Full<Bytes>> {
    let mut body = serde_json::json!({ "success": false, "error": message });
    if let Some(context) = debug {
        body["debug"] = context;
    }
    json_response(StatusCode::INTERNAL_SERVER_ERROR, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp
            .into_body()
            .collect()
            .await
            .expect("collecting a Full body cannot fail")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("responses are utf-8")
    }

    #[tokio::test]
    async fn test_method_not_allowed_shape() {
        let resp = method_not_allowed();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_string(resp).await;
        assert_eq!(body, r#"{"error":"Method not allowed"}"#);
    }

    #[tokio::test]
    async fn test_bad_request_names_fields() {
        let resp = bad_request("email is required");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_string(resp).await;
        assert!(body.contains(r#""success":false"#));
        assert!(body.contains("email is required"));
    }

    #[tokio::test]
    async fn test_server_error_hides_debug_by_default() {
        let resp = server_error("Failed to load gallery images", None);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(resp).await;
        assert!(!body.contains("debug"));
    }

    #[tokio::test]
    async fn test_server_error_attaches_debug_context() {
        let resp = server_error(
            "Failed to load gallery images",
            Some(serde_json::json!({ "galleryDir": "public/gallery" })),
        );
        let body = body_string(resp).await;
        assert!(body.contains(r#""galleryDir":"public/gallery""#));
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints() {
        let body = body_string(not_found()).await;
        assert!(body.contains("/api/gallery"));
        assert!(body.contains("/api/contact"));
    }
}
