//! End-to-end runs over export files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use subport_cli::commands::run;
use subport_ingest::IngestError;
use subport_model::ConversionOptions;
use tempfile::TempDir;

const SAMPLE_EXPORT: &str = "\
Email Address,First Name,Last Name,TAGS,MEMBER_RATING
john.doe@example.com,John,Doe,\"\"\"Newsletter Subscribers\"\"; \"\"VIP Customers\"\"\",2
jane.smith@example.com,Jane,Smith,Newsletter Subscribers,3
jose@example.co,José,García,VIP Customers|Early Adopters,4
invalid.email.com,Bad,Row,Newsletter Subscribers,1
amelie@example.fr,Amélie,Poulain,,2
li.wei@example.cn,Wei,Li,\",,;|\",5
o.brien@example.ie,Seán,O'Brien,'Event Attendees',3
m.muller@example.de,Jürgen,Müller,\"“Newsletter Subscribers”, “Webinar”\",2
priya@example.in,Priya,,Webinar; Webinar,1
sam@example.com,,,,1
";

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("open output");
    let headers = reader
        .headers()
        .expect("headers")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|record| record.expect("record").iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn sample_export_is_converted_next_to_input() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(&dir, "subscribers.csv", SAMPLE_EXPORT);

    let result = run(&input, &ConversionOptions::default()).expect("run");
    let conversion = result.conversion.expect("conversion summary");
    assert_eq!(
        conversion.output_path,
        dir.path().join("subscribers_convertkit_ready.csv")
    );
    assert_eq!(conversion.email_column, "Email Address");
    assert_eq!(conversion.stats.total_rows, 10);
    assert_eq!(conversion.stats.processed, 9);
    assert_eq!(conversion.stats.invalid_emails, 1);
    assert_eq!(result.analysis.invalid_emails, 1);

    let (headers, rows) = read_rows(&conversion.output_path);
    assert_eq!(headers, vec!["Email", "First Name", "Last Name", "Tags"]);
    assert_eq!(rows.len(), 9);
    assert_eq!(
        rows[0],
        vec![
            "john.doe@example.com",
            "John",
            "Doe",
            "Newsletter Subscribers, VIP Customers"
        ]
    );
    assert_eq!(rows[2][1], "José");
    assert_eq!(rows[6][3], "Newsletter Subscribers, Webinar");
    assert!(rows.iter().all(|row| row[0] != "invalid.email.com"));
}

#[test]
fn explicit_output_path_is_used() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(&dir, "subscribers.csv", SAMPLE_EXPORT);
    let output = dir.path().join("cleaned.csv");

    let options = ConversionOptions::new().with_output_path(Some(output.clone()));
    let result = run(&input, &options).expect("run");
    assert_eq!(
        result.conversion.map(|summary| summary.output_path),
        Some(output.clone())
    );
    assert!(output.exists());
    assert!(!dir.path().join("subscribers_convertkit_ready.csv").exists());
}

#[test]
fn analyze_only_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(&dir, "subscribers.csv", SAMPLE_EXPORT);

    let options = ConversionOptions::new().with_analyze_only(true);
    let result = run(&input, &options).expect("run");
    assert!(result.conversion.is_none());
    assert_eq!(result.analysis.total_rows, 10);
    assert_eq!(result.analysis.tag_count("Newsletter Subscribers"), Some(4));
    assert!(!dir.path().join("subscribers_convertkit_ready.csv").exists());
}

#[test]
fn keep_duplicates_forwards_repeated_addresses() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(
        &dir,
        "dupes.csv",
        "Email Address,First Name\nA@x.com,First\na@x.com,Second\n",
    );

    let removed = run(&input, &ConversionOptions::default()).expect("run");
    let removed = removed.conversion.expect("conversion summary");
    assert_eq!(removed.stats.processed, 1);
    assert_eq!(removed.stats.duplicates, 1);

    let options = ConversionOptions::new().with_keep_duplicates(true);
    let kept = run(&input, &options).expect("run");
    let kept = kept.conversion.expect("conversion summary");
    assert_eq!(kept.stats.processed, 2);
    let (_, rows) = read_rows(&kept.output_path);
    assert_eq!(rows[1][1], "Second");
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("nope.csv");

    let error = run(&input, &ConversionOptions::default()).expect_err("missing input");
    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::NotFound { .. })
    ));
    assert!(!dir.path().join("nope_convertkit_ready.csv").exists());
}

#[test]
fn missing_output_directory_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(&dir, "subscribers.csv", SAMPLE_EXPORT);
    let output = dir.path().join("missing").join("out.csv");

    let options = ConversionOptions::new().with_output_path(Some(output.clone()));
    let error = run(&input, &options).expect_err("missing directory");
    assert!(format!("{error:#}").contains("out.csv"));
    assert!(!output.exists());
}

#[test]
fn row_of_empty_cells_counts_as_missing_email() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(
        &dir,
        "gaps.csv",
        "Email Address,First Name,TAGS\n,,\na@x.com,A,VIP\n",
    );

    let result = run(&input, &ConversionOptions::default()).expect("run");
    assert_eq!(result.analysis.total_rows, 2);
    assert_eq!(result.analysis.invalid_emails, 1);
    assert_eq!(result.analysis.missing_emails, 1);

    let conversion = result.conversion.expect("conversion summary");
    assert_eq!(conversion.stats.total_rows, 2);
    assert_eq!(conversion.stats.skipped, 1);
    assert_eq!(conversion.stats.invalid_emails, 1);
    assert_eq!(conversion.stats.processed, 1);
    assert!(conversion.stats.is_balanced());
}

#[test]
fn no_valid_rows_still_writes_header() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(
        &dir,
        "broken.csv",
        "Email Address,First Name\nnot-an-email,A\n,B\n",
    );

    let result = run(&input, &ConversionOptions::default()).expect("run");
    let conversion = result.conversion.expect("conversion summary");
    assert!(conversion.stats.is_empty_result());
    assert_eq!(conversion.stats.invalid_emails, 2);
    let written = fs::read_to_string(&conversion.output_path).expect("read output");
    assert_eq!(written, "Email,First Name,Last Name,Tags\n");
}
