//! Static file serving module
//!
//! Serves the built frontend from the configured static directory and
//! raw gallery image bytes from the gallery directory.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve one gallery image by filename.
///
/// Only direct children of the gallery directory are reachable; nested
/// or traversal-shaped paths 404.
pub async fn serve_gallery_image(
    ctx: &RequestContext<'_>,
    gallery_dir: &str,
    public_base: &str,
) -> Response<Full<Bytes>> {
    let Some(filename) = gallery_filename(ctx.path, public_base) else {
        return http::build_404_response();
    };

    match load_single_file(&Path::new(gallery_dir).join(filename)).await {
        Some((content, content_type)) => build_file_response(&content, content_type, ctx),
        None => http::build_404_response(),
    }
}

/// Extract a bare filename from a gallery URL path
fn gallery_filename<'a>(path: &'a str, public_base: &str) -> Option<&'a str> {
    let base = public_base.trim_end_matches('/');
    let rest = path.strip_prefix(base)?.strip_prefix('/')?;
    if rest.is_empty() || rest == "." || rest == ".." || rest.contains('/') || rest.contains('\\') {
        return None;
    }
    Some(rest)
}

/// Serve a path from the static frontend directory
pub async fn serve_site(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;
    match load_from_directory(&routes.static_dir, ctx.path, &routes.index_files).await {
        Some((content, content_type)) => build_file_response(&content, content_type, ctx),
        None if ctx.path == "/" => {
            // No built frontend yet; answer with the placeholder page
            let html = default_homepage(&state.config.server.site_name);
            http::response::build_html_response(html, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve a URL path to a file inside the static directory.
///
/// Directory requests resolve through the configured index files. The
/// canonicalized result must stay under the static root; anything that
/// escapes it is treated as absent. A missing static root is routine
/// before the frontend is built and resolves to nothing.
fn resolve_static_path(
    static_dir: &str,
    url_path: &str,
    index_files: &[String],
) -> Option<std::path::PathBuf> {
    let relative = url_path.trim_start_matches('/').replace("..", "");
    let mut candidate = Path::new(static_dir).join(&relative);

    if candidate.is_dir() || relative.is_empty() || relative.ends_with('/') {
        if let Some(index) = index_files
            .iter()
            .map(|name| candidate.join(name))
            .find(|p| p.is_file())
        {
            candidate = index;
        }
    }
    if candidate.is_dir() {
        return None;
    }

    // Plain 404s are common and not worth a log line; an escape from
    // the root is
    let root = Path::new(static_dir).canonicalize().ok()?;
    let resolved = candidate.canonicalize().ok()?;
    if resolved.starts_with(&root) {
        Some(resolved)
    } else {
        logger::log_warning(&format!("Blocked path escape: {url_path}"));
        None
    }
}

/// Load a static file, resolving index files for directory paths
pub async fn load_from_directory(
    static_dir: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let file_path = resolve_static_path(static_dir, path, index_files)?;
    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            Some((content, content_type))
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", file_path.display()));
            None
        }
    }
}

/// Load one file directly, without index resolution
pub async fn load_single_file(file_path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let content = fs::read(file_path).await.ok()?;
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build static file response with `ETag` revalidation
fn build_file_response(
    data: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    // Check if client has cached version
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::response::build_cached_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        ctx.is_head,
    )
}

/// Placeholder homepage shown until the built frontend is deployed
pub fn default_homepage(site_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{site_name}</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: linear-gradient(135deg, #1e3a5f 0%, #2e6da4 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
        }}
        .container {{
            text-align: center;
            padding: 40px;
            background: rgba(255, 255, 255, 0.1);
            border-radius: 20px;
            max-width: 600px;
        }}
        h1 {{
            font-size: 2.5em;
            margin-bottom: 20px;
        }}
        p {{
            font-size: 1.1em;
            margin: 15px 0;
            opacity: 0.9;
        }}
        a {{
            color: #8fd3ff;
            text-decoration: none;
            font-weight: 600;
        }}
        a:hover {{
            text-decoration: underline;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{site_name}</h1>
        <p>The site frontend has not been deployed yet.</p>
        <p>API status: <a href="/api/health">/api/health</a> &middot; Gallery: <a href="/api/gallery">/api/gallery</a></p>
    </div>
</body>
</html>"#
    )
}
