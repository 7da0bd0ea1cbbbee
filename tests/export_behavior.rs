//! Behavior-driven tests for the CSV exporter.
//!
//! These cover the fixed 12-column contract, the header-only empty export,
//! and the never-overwrite property of stamped file names.

use aodata_core::{CsvExporter, ItemId, PriceEntry, PriceRecord, Quality, COLUMNS};
use tempfile::TempDir;

fn item(raw: &str) -> ItemId {
    ItemId::parse(raw).expect("valid item id")
}

fn quality(value: u8) -> Quality {
    Quality::new(value).expect("valid quality")
}

fn quoted_record() -> PriceRecord {
    PriceRecord::quoted(
        item("T4_MAIN_CURSEDSTAFF"),
        "Thetford",
        quality(0),
        "2025-01-01 10",
        PriceEntry {
            sell_price_min: Some(100),
            sell_price_min_date: Some(String::from("2025-01-01")),
            sell_price_max: Some(200),
            sell_price_max_date: Some(String::from("2025-01-01")),
            buy_price_min: Some(50),
            buy_price_min_date: Some(String::from("2025-01-01")),
            buy_price_max: Some(90),
            buy_price_max_date: Some(String::from("2025-01-01")),
        },
    )
}

fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("readable CSV");
    let headers = reader
        .headers()
        .expect("header row")
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("data row")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect();
    (headers, rows)
}

#[test]
fn exported_file_has_fixed_column_order() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());

    let path = exporter
        .export(&[quoted_record()], "cursed_staff")
        .expect("export succeeds");

    let (headers, rows) = read_rows(&path);
    assert_eq!(headers, COLUMNS.to_vec());
    assert_eq!(rows.len(), 1);
}

#[test]
fn quoted_record_values_land_in_their_columns() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());

    let path = exporter
        .export(&[quoted_record()], "cursed_staff")
        .expect("export succeeds");

    let (_, rows) = read_rows(&path);
    let row = &rows[0];
    assert_eq!(row[0], "T4_MAIN_CURSEDSTAFF");
    assert_eq!(row[1], "Thetford");
    assert_eq!(row[2], "0");
    assert_eq!(row[3], "100");
    assert_eq!(row[4], "2025-01-01");
    assert_eq!(row[5], "200");
    assert_eq!(row[7], "50");
    assert_eq!(row[9], "90");
    assert_eq!(row[11], "2025-01-01 10");
}

#[test]
fn empty_batch_still_writes_header_only_file() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());

    let path = exporter.export(&[], "cursed_staff").expect("export succeeds");

    assert!(path.exists());
    let (headers, rows) = read_rows(&path);
    assert_eq!(headers, COLUMNS.to_vec());
    assert!(rows.is_empty());
}

#[test]
fn distinct_stamps_produce_distinct_files() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());
    let records = vec![quoted_record()];

    let first = exporter
        .export_stamped(&records, "cursed_staff", "2025-01-01_00-00-00")
        .expect("first export");
    let second = exporter
        .export_stamped(&records, "cursed_staff", "2025-01-01_00-00-01")
        .expect("second export");

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());

    // The earlier file is untouched by the later export.
    let (_, rows) = read_rows(&first);
    assert_eq!(rows.len(), 1);
}

#[test]
fn filename_embeds_subject_and_stamp() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());

    let path = exporter
        .export_stamped(&[], "cursed_staff", "2025-01-01_00-00-00")
        .expect("export succeeds");

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("cursed_staff_2025-01-01_00-00-00.csv")
    );
}

#[test]
fn output_directory_is_created_on_demand() {
    let dir = TempDir::new().expect("temp dir");
    let nested = dir.path().join("nested").join("out");
    let exporter = CsvExporter::new(&nested);

    let path = exporter.export(&[], "cursed_staff").expect("export succeeds");

    assert!(nested.is_dir());
    assert!(path.starts_with(&nested));
}

#[test]
fn sentinel_record_renders_error_text_and_empty_cells() {
    let dir = TempDir::new().expect("temp dir");
    let exporter = CsvExporter::new(dir.path());
    let record = PriceRecord::failed(
        item("T4_MAIN_CURSEDSTAFF"),
        "Thetford",
        quality(0),
        "2025-01-01 10",
        "connection refused",
    );

    let path = exporter
        .export(&[record], "cursed_staff")
        .expect("export succeeds");

    let (_, rows) = read_rows(&path);
    let row = &rows[0];
    assert_eq!(row[3], "Error: connection refused");
    for index in [4, 5, 6, 7, 8, 9, 10] {
        assert_eq!(row[index], "", "column {index} should be empty");
    }
}
