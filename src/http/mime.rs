//! Content-Type lookup by file extension

/// Map a file extension to its Content-Type.
///
/// Extensions are expected lowercase (filesystem convention here);
/// anything unrecognized is served as `application/octet-stream`.
///
/// # Examples
/// ```
/// use powerwash_site::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("webp")), "image/webp");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Gallery image formats
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",

        // Frontend assets
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Misc
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_image_types() {
        assert_eq!(get_content_type(Some("jpg")), "image/jpeg");
        assert_eq!(get_content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("gif")), "image/gif");
        assert_eq!(get_content_type(Some("webp")), "image/webp");
        assert_eq!(get_content_type(Some("bmp")), "image/bmp");
    }

    #[test]
    fn test_frontend_asset_types() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(get_content_type(Some("exe")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }
}
