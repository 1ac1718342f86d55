//! Gallery listing
//!
//! A directory-to-JSON mapping: enumerate the configured gallery
//! directory, keep image files, attach metadata, sort newest first.
//! The pure listing lives in [`list_gallery`]; the HTTP adapter is a
//! thin wrapper around it.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use tokio::fs;

use super::response::{json_response, server_error};
use super::types::{GalleryImage, GalleryResponse};
use crate::config::AppState;
use crate::logger;

/// Extensions recognized as gallery images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Display title for a gallery file: extension stripped, `-`/`_` as spaces
pub fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    stem.replace(['-', '_'], " ")
}

/// Whether a filename carries one of the allowed image extensions
fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Public URL for one gallery file
fn image_url(public_base: &str, filename: &str) -> String {
    format!("{}/{}", public_base.trim_end_matches('/'), filename)
}

/// Enumerate `dir` and return its image files, newest first.
///
/// A missing directory is an empty gallery, not an error, and the
/// listing never creates directories. A file whose metadata cannot be
/// read is skipped so one bad entry cannot take down the whole listing.
pub async fn list_gallery(dir: &Path, public_base: &str) -> io::Result<Vec<GalleryImage>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut images = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let Ok(filename) = entry.file_name().into_string() else {
            continue;
        };
        if !is_image(&filename) {
            continue;
        }

        let metadata = match entry.metadata().await {
            Ok(m) => m,
            Err(e) => {
                logger::log_warning(&format!("Skipping gallery file '{filename}': {e}"));
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = match metadata.modified() {
            Ok(t) => t,
            Err(e) => {
                logger::log_warning(&format!(
                    "Skipping gallery file '{filename}': no modification time: {e}"
                ));
                continue;
            }
        };

        images.push(GalleryImage {
            url: image_url(public_base, &filename),
            title: title_from_filename(&filename),
            size: metadata.len(),
            last_modified: DateTime::<Utc>::from(modified),
            filename,
        });
    }

    sort_newest_first(&mut images);
    Ok(images)
}

/// Stable descending sort by modification time
pub fn sort_newest_first(images: &mut [GalleryImage]) {
    images.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
}

/// `GET /api/gallery` adapter
pub async fn handle_list(state: &AppState) -> Response<Full<Bytes>> {
    let dir = Path::new(&state.config.gallery.dir);
    match list_gallery(dir, &state.config.gallery.public_base).await {
        Ok(images) => {
            let count = images.len();
            json_response(
                StatusCode::OK,
                &GalleryResponse {
                    success: true,
                    images,
                    count,
                },
            )
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read gallery directory '{}': {e}",
                dir.display()
            ));
            server_error("Failed to load gallery images", debug_context(state, &e))
        }
    }
}

/// Debug payload for 500 bodies, gated behind the development-mode flag
fn debug_context(state: &AppState, err: &io::Error) -> Option<serde_json::Value> {
    state.config.http.debug_errors.then(|| {
        serde_json::json!({
            "galleryDir": state.config.gallery.dir,
            "cause": err.to_string(),
        })
    })
}
