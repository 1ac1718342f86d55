//! Health and service metadata endpoints

use chrono::Utc;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{EndpointMap, HealthResponse, ServiceInfo};
use crate::config::AppState;

/// `GET /api/health`
pub fn handle_health(state: &AppState) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "OK",
            timestamp: Utc::now(),
            uptime: state.uptime_secs(),
        },
    )
}

/// `GET /api`: service metadata plus the endpoint map for discovery
pub fn handle_index(state: &AppState) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &ServiceInfo {
            message: format!("{} API is running!", state.config.server.site_name),
            status: "OK",
            timestamp: Utc::now(),
            endpoints: EndpointMap {
                health: "/api/health",
                gallery: "/api/gallery",
                contact: "/api/contact (POST)",
            },
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}
