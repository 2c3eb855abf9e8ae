//! Image path helpers for profile pictures.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

/// Shown when a user or employee has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Resolve a stored image path against the API base URL.
///
/// Absolute `http(s)` URLs pass through; missing paths map to the placeholder.
pub fn image_url(base_url: &str, path: Option<&str>) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_owned();
    };
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Authenticated image endpoint for a stored path, keyed by its file name.
pub fn authenticated_image_path(stored: &str) -> Option<String> {
    let file_name = stored.rsplit(['/', '\\']).next()?.trim();
    if file_name.is_empty() {
        return None;
    }
    Some(format!("/images/{file_name}"))
}

/// Best-effort MIME type from a file extension, for blob URLs.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
