// API module entry
// Gallery listing, contact intake, health, and service metadata

pub mod contact;
pub mod gallery;
mod info;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::sync::Arc;

use crate::config::AppState;

// Re-export public types
pub use contact::{ContactSink, LogSink};
pub use types::{ContactForm, GalleryImage};

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
/// Anything under `/api` lands here; per-route method rules produce 405
/// and unknown paths 404.
pub async fn handle_api(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let path = req.uri().path().to_owned();
    let method = req.method().clone();

    match (method, path.as_str()) {
        (Method::GET, "/api/gallery") => gallery::handle_list(state).await,
        (Method::POST, "/api/contact") => contact::handle_submit(req, state).await,
        (Method::GET, "/api/health") => info::handle_health(state),
        (Method::GET, "/api" | "/api/") => info::handle_index(state),
        // Known route, wrong method
        (_, "/api/gallery" | "/api/contact" | "/api/health" | "/api" | "/api/") => {
            response::method_not_allowed()
        }
        // Unknown route
        _ => response::not_found(),
    }
}
