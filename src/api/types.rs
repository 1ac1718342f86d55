// API data types
// Request and response payloads for the JSON endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One gallery entry, computed per request from file metadata.
///
/// `title` and `url` are derived from `filename` alone (plus the
/// configured base path), so the listing and the byte route always agree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub filename: String,
    pub url: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub title: String,
}

/// Successful gallery listing envelope
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub success: bool,
    pub images: Vec<GalleryImage>,
    pub count: usize,
}

/// Contact form payload.
///
/// Fields default to empty strings so an omitted field is reported by
/// name by validation instead of failing deserialization wholesale.
/// `captcha` is the client-side arithmetic answer passed through as
/// data; it is never re-derived or verified here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub inquiry_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub captcha: Option<String>,
}

/// Success acknowledgement for contact submissions
#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

/// `GET /api/health` body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
}

/// `GET /api` body
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub endpoints: EndpointMap,
    pub version: &'static str,
}

/// The routes a client can discover from the service metadata endpoint
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub health: &'static str,
    pub gallery: &'static str,
    pub contact: &'static str,
}
