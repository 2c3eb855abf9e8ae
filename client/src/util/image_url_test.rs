use super::*;

#[test]
fn missing_path_uses_placeholder() {
    assert_eq!(image_url("http://api", None), PLACEHOLDER_IMAGE);
    assert_eq!(image_url("http://api", Some("  ")), PLACEHOLDER_IMAGE);
}

#[test]
fn absolute_urls_pass_through() {
    assert_eq!(image_url("http://api", Some("https://cdn.io/a.png")), "https://cdn.io/a.png");
}

#[test]
fn relative_paths_join_without_double_slash() {
    assert_eq!(image_url("http://api/", Some("/uploads/a.png")), "http://api/uploads/a.png");
    assert_eq!(image_url("http://api", Some("uploads/a.png")), "http://api/uploads/a.png");
}

#[test]
fn authenticated_path_uses_file_name_only() {
    assert_eq!(authenticated_image_path("uploads/2025/a.png").as_deref(), Some("/images/a.png"));
    assert_eq!(authenticated_image_path(r"C:\files\b.jpg").as_deref(), Some("/images/b.jpg"));
    assert_eq!(authenticated_image_path("dir/"), None);
}

#[test]
fn content_type_by_extension() {
    assert_eq!(content_type_for("A.PNG"), "image/png");
    assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
    assert_eq!(content_type_for("noext"), "application/octet-stream");
}
