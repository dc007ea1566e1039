use std::io::Write;
use sweetstand::catalog::{self, CatalogError};
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write catalog");
    file
}

const VALID: &str = r#"[
  {
    "id": "waffle",
    "name": "Waffle with Berries",
    "category": "Waffle",
    "price": 6.5,
    "image": {
      "thumbnail": "t.jpg",
      "mobile": "m.jpg",
      "tablet": "ta.jpg",
      "desktop": "d.jpg"
    }
  }
]"#;

#[test]
fn embedded_default_catalog_loads() {
    let entries = catalog::load_default().expect("embedded catalog");
    assert_eq!(entries.len(), 9);
    assert!(entries.iter().any(|e| e.id == "waffle-berries"));
}

#[test]
fn valid_file_loads() {
    let file = write_catalog(VALID);
    let entries = catalog::load_from(file.path()).expect("valid catalog");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Waffle with Berries");
    assert_eq!(entries[0].image.thumbnail, "t.jpg");
}

#[test]
fn missing_file_is_a_read_error() {
    let err = catalog::load_from(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::ReadError { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_catalog("not json at all");
    let err = catalog::load_from(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError { .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let duplicated = format!(
        "[{row},{row}]",
        row = VALID.trim_start_matches('[').trim_end_matches(']')
    );
    let file = write_catalog(&duplicated);
    let err = catalog::load_from(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::ValidationError { .. }));
}

#[test]
fn negative_price_is_rejected() {
    let file = write_catalog(&VALID.replace("6.5", "-6.5"));
    let err = catalog::load_from(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::ValidationError { .. }));
}

#[test]
fn empty_id_is_rejected() {
    let file = write_catalog(&VALID.replace("\"id\": \"waffle\"", "\"id\": \"\""));
    let err = catalog::load_from(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::ValidationError { .. }));
}
