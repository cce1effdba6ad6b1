use heatsort::error::HeatsortError;
use heatsort::heatmap::loader::{
    default_output_path, load_heatmap, parse_heatmap, save_heatmap, write_heatmap,
};
use heatsort::heatmap::Row;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn parse(text: &str) -> Result<heatsort::heatmap::Heatmap, HeatsortError> {
    parse_heatmap(Cursor::new(text.as_bytes()))
}

fn expect_parse_error(text: &str, expected_line: u64) -> String {
    match parse(text) {
        Err(HeatsortError::Parse { line, message }) => {
            assert_eq!(line, expected_line, "wrong line for: {}", message);
            message
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

// --- PARSING ---

#[test]
fn test_parses_valid_heatmap() {
    let hm = parse("gene, s1, s2, s3\nalpha, 1, 2.5, -3\nbeta, 0, 0, 1e2\n").unwrap();

    assert_eq!(hm.corner, "gene");
    assert_eq!(hm.labels, vec!["s1", "s2", "s3"]);
    assert_eq!(hm.row_count(), 2);
    assert_eq!(hm.column_count(), 3);
    assert_eq!(hm.rows[0], Row::new("alpha", vec![1.0, 2.5, -3.0]));
    assert_eq!(hm.rows[1].values(), &[0.0, 0.0, 100.0]);
}

#[test]
fn test_tolerates_missing_or_extra_whitespace() {
    let hm = parse("x,a,b\nr1,1,2\n  r2 ,   3,4   \n").unwrap();
    assert_eq!(hm.rows[1].name(), "r2");
    assert_eq!(hm.rows[1].values(), &[3.0, 4.0]);
}

#[test]
fn test_header_only_has_no_rows() {
    let hm = parse("corner, a, b\n").unwrap();
    assert_eq!(hm.row_count(), 0);
    assert_eq!(hm.column_count(), 2);
}

#[test]
fn test_rejects_field_count_mismatch() {
    let msg = expect_parse_error("h, a, b\nr1, 1, 2\nr2, 1\n", 3);
    assert!(msg.contains("Expected 3 fields but found 2"), "{}", msg);

    expect_parse_error("h, a\nr1, 1, 2\n", 2);
}

#[test]
fn test_rejects_non_numeric_value() {
    let msg = expect_parse_error("h, a, b\nr1, 1, two\n", 2);
    assert!(msg.contains("r1"));
    assert!(msg.contains("'two'"));
}

#[test]
fn test_rejects_non_finite_values() {
    expect_parse_error("h, a\nr1, NaN\n", 2);
    expect_parse_error("h, a\nr1, 1\nr2, inf\n", 3);
}

#[test]
fn test_rejects_empty_input() {
    expect_parse_error("", 1);
}

#[test]
fn test_rejects_header_without_labels() {
    expect_parse_error("lonely\n", 1);
}

// --- WRITING ---

#[test]
fn test_write_uses_comma_space() {
    let hm = parse("c,a,b\nr1,1.5,2\nr2,-0.25,3\n").unwrap();
    let (header, rows) = hm.into_permutation();
    let rows = rows.reversed();

    let mut buf = Vec::new();
    write_heatmap(&mut buf, &header, rows.iter()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "c, a, b\nr2, -0.25, 3\nr1, 1.5, 2\n");
}

#[test]
fn test_written_file_parses_back() {
    let original = parse("name, x, y\nr1, 0.1, 1e-7\nr2, 123456.789, -4\nr3, 0, 0\n").unwrap();
    let (header, rows) = original.clone().into_permutation();
    let rows = rows.shifted(&[0, 2]).unwrap();

    let out = NamedTempFile::new().unwrap();
    save_heatmap(out.path(), &header, rows.iter()).unwrap();
    let reloaded = load_heatmap(out.path()).unwrap();

    assert_eq!(reloaded.labels, original.labels);
    let names: Vec<&str> = reloaded.rows.iter().map(Row::name).collect();
    assert_eq!(names, vec!["r3", "r2", "r1"]);
    assert_eq!(reloaded.rows[2], original.rows[0]);
    assert_eq!(reloaded.rows[1], original.rows[1]);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "sample, a, b").unwrap();
    writeln!(file, "one, 1, 2").unwrap();
    writeln!(file, "two, 3, 4").unwrap();

    let hm = load_heatmap(file.path()).unwrap();
    assert_eq!(hm.row_count(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_heatmap("/definitely/not/here.csv");
    assert!(matches!(result, Err(HeatsortError::Io(_))));
}

#[test]
fn test_default_output_path_appends_suffix() {
    assert_eq!(
        default_output_path("data/map.csv"),
        Path::new("data/map.csv.better")
    );
    assert_eq!(default_output_path("plain"), Path::new("plain.better"));
}
