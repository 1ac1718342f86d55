//! Request routing
//!
//! Per-request entry point: method policy, route dispatch, the uniform
//! allow-origin header, and the access log line.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// What the file-serving paths need to know about the request
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Serve one request end to end
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    // Captured up front; the contact handler consumes the request body
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_str(req.version());
    let referer = header_string(&req, "referer");
    let user_agent = header_string(&req, "user-agent");

    let mut response = dispatch(req, &method, &path, &state).await;

    // Every response carries the configured allow-origin policy
    if let Some(origin) = state.config.http.cors_origin() {
        if let Ok(value) = hyper::header::HeaderValue::from_str(origin) {
            response
                .headers_mut()
                .insert("Access-Control-Allow-Origin", value);
        }
    }
    if let Ok(value) = hyper::header::HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert("Server", value);
    }

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: chrono::Local::now(),
            method: method.to_string(),
            path,
            query,
            http_version: http_version.to_string(),
            status: response.status().as_u16(),
            body_bytes: body_len(&response),
            referer,
            user_agent,
            request_time_us: elapsed_us(started),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    method: &Method,
    path: &str,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    // CORS preflight short-circuits everything
    if *method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    // Gallery bytes are checked first so the public base path may live
    // under /api (one deployment convention) without being shadowed
    let gallery = &state.config.gallery;
    if is_gallery_path(path, &gallery.public_base) {
        if *method != Method::GET && *method != Method::HEAD {
            logger::log_warning(&format!("Method not allowed: {method}"));
            return http::build_405_response();
        }
        let ctx = RequestContext {
            path,
            is_head: *method == Method::HEAD,
            if_none_match: header_string(&req, "if-none-match"),
        };
        return static_files::serve_gallery_image(&ctx, &gallery.dir, &gallery.public_base).await;
    }

    // JSON API routes enforce their own per-route method rules
    if path == "/api" || path.starts_with("/api/") {
        if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
            return resp;
        }
        return api::handle_api(req, state).await;
    }

    // Everything else is the static site: GET/HEAD only
    if *method != Method::GET && *method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::build_405_response();
    }

    let ctx = RequestContext {
        path,
        is_head: *method == Method::HEAD,
        if_none_match: header_string(&req, "if-none-match"),
    };

    static_files::serve_site(&ctx, state).await
}

/// Reject requests whose declared Content-Length exceeds the configured
/// cap. An absent or malformed header skips the check; the body is tiny
/// contact JSON either way.
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let declared: u64 = req
        .headers()
        .get("content-length")?
        .to_str()
        .ok()?
        .parse()
        .ok()?;
    if declared > max_body_size {
        logger::log_warning(&format!(
            "Rejecting request body of {declared} bytes (limit {max_body_size})"
        ));
        return Some(http::build_413_response());
    }
    None
}

/// Whether `path` addresses the gallery image byte route
fn is_gallery_path(path: &str, public_base: &str) -> bool {
    let base = public_base.trim_end_matches('/');
    path == base
        || path
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_str(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_3 {
        "3"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else {
        "1.1"
    }
}

/// Body size of an outgoing response, for access logging
fn body_len(response: &Response<Full<Bytes>>) -> usize {
    use hyper::body::Body;
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gallery_path() {
        assert!(is_gallery_path("/gallery/a.png", "/gallery"));
        assert!(is_gallery_path("/gallery", "/gallery"));
        assert!(is_gallery_path("/gallery/", "/gallery/"));
        assert!(!is_gallery_path("/galleryx/a.png", "/gallery"));
        assert!(!is_gallery_path("/about", "/gallery"));
    }

    #[test]
    fn test_version_str() {
        assert_eq!(version_str(Version::HTTP_11), "1.1");
        assert_eq!(version_str(Version::HTTP_10), "1.0");
        assert_eq!(version_str(Version::HTTP_2), "2");
    }
}
