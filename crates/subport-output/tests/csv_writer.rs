//! Tests for import file generation.

use std::fs;

use subport_model::NormalizedRecord;
use subport_output::{OutputError, write_normalized_csv, write_normalized_to};
use tempfile::TempDir;

fn record(email: &str, first: &str, last: &str, tags: &str) -> NormalizedRecord {
    NormalizedRecord {
        email: email.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        tags: tags.to_string(),
    }
}

fn sample() -> Vec<NormalizedRecord> {
    vec![
        record(
            "john.doe@example.com",
            "John",
            "Doe",
            "Newsletter Subscribers, VIP Customers",
        ),
        record("jose@example.co", "José", "García", ""),
        record("o.brien@example.ie", "Seán", "O'Brien", "Webinar"),
        record("sam@example.com", "", "", ""),
    ]
}

#[test]
fn import_file_snapshot() {
    let mut buffer = Vec::new();
    let rows = write_normalized_to(&mut buffer, &sample()).expect("write csv");
    assert_eq!(rows, 4);
    let text = String::from_utf8(buffer).expect("utf8");
    insta::assert_snapshot!(text, @r#"
    Email,First Name,Last Name,Tags
    john.doe@example.com,John,Doe,"Newsletter Subscribers, VIP Customers"
    jose@example.co,José,García,
    o.brien@example.ie,Seán,O'Brien,Webinar
    sam@example.com,,,
    "#);
}

#[test]
fn written_file_reads_back() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("members_convertkit_ready.csv");
    let rows = write_normalized_csv(&path, &sample()).expect("write csv");
    assert_eq!(rows, 4);

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Email", "First Name", "Last Name", "Tags"]
    );
    let first = reader
        .records()
        .next()
        .expect("first row")
        .expect("valid row");
    assert_eq!(&first[3], "Newsletter Subscribers, VIP Customers");
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents that are longer than the new file\n".repeat(20))
        .expect("seed file");
    write_normalized_csv(&path, &[]).expect("write csv");
    assert_eq!(
        fs::read_to_string(&path).expect("read back"),
        "Email,First Name,Last Name,Tags\n"
    );
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("no-such-dir").join("out.csv");
    let err = write_normalized_csv(&path, &sample()).expect_err("missing directory");
    assert!(matches!(err, OutputError::MissingDirectory { .. }));
    assert!(!path.exists());
}
