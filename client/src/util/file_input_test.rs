use super::*;

#[test]
fn reported_content_type_is_kept() {
    let upload = upload_from_parts("a.bin".to_owned(), "image/png".to_owned(), vec![1]);
    assert_eq!(upload.content_type, "image/png");
}

#[test]
fn missing_content_type_is_inferred() {
    let upload = upload_from_parts("photo.JPG".to_owned(), String::new(), vec![]);
    assert_eq!(upload.content_type, "image/jpeg");
    assert_eq!(upload.file_name, "photo.JPG");
}
