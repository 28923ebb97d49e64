//! CSV export of the rendered history table.
//!
//! The export consumes the table's rendered rows rather than the underlying
//! readings, so the file always matches what is on screen: unit suffixes are
//! stripped back off the numeric columns and placeholders become empty
//! fields.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;

use crate::ui::table::COLUMNS;

/// Units stripped from exported numeric cells.
const UNIT_SUFFIXES: [&str; 2] = ["°C", "NTU"];

/// File name for an export on the given date.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("hydra-readings-{}.csv", date.format("%Y-%m-%d"))
}

/// Build the CSV document from rendered table rows.
///
/// Every field is double-quoted with embedded quotes doubled; rows are
/// joined with plain newlines.
pub fn build_csv(rows: &[[String; 5]]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(COLUMNS.map(String::from)));

    for row in rows {
        let exported = [
            row[0].clone(),
            export_field(&row[1]),
            export_field(&row[2]),
            export_field(&row[3]),
            export_field(&row[4]),
        ];
        lines.push(csv_line(exported));
    }

    lines.join("\n")
}

/// Write the current rows to `hydra-readings-<date>.csv` in `dir`.
pub fn write_csv(rows: &[[String; 5]], dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(csv_filename(date));
    fs::write(&path, build_csv(rows))?;
    Ok(path)
}

fn csv_line(fields: [String; 5]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Map a rendered cell to its exported form: placeholders become empty,
/// unit suffixes are stripped.
fn export_field(cell: &str) -> String {
    if cell == "--" {
        return String::new();
    }
    let mut value = cell.to_string();
    for unit in UNIT_SUFFIXES {
        value = value.replace(unit, "");
    }
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Minimal CSV line parser for round-trip checks.
    fn parse_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    fn sample_rows() -> Vec<[String; 5]> {
        vec![
            [
                "12:01".into(),
                "7.23".into(),
                "21.6°C".into(),
                "3.4 NTU".into(),
                "82.13".into(),
            ],
            [
                "12:00".into(),
                "--".into(),
                "--".into(),
                "0.0 NTU".into(),
                "--".into(),
            ],
        ]
    }

    #[test]
    fn test_header_line() {
        let csv = build_csv(&[]);
        assert_eq!(
            csv,
            r#""Timestamp","pH","Temperature (°C)","Turbidity (NTU)","WQI""#
        );
    }

    #[test]
    fn test_round_trip_strips_units_and_placeholders() {
        let csv = build_csv(&sample_rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);

        let row1 = parse_line(lines[1]);
        assert_eq!(row1, vec!["12:01", "7.23", "21.6", "3.4", "82.13"]);

        let row2 = parse_line(lines[2]);
        assert_eq!(row2, vec!["12:00", "", "", "0.0", ""]);
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        let rows = vec![[
            "reading \"a\"".to_string(),
            "--".into(),
            "--".into(),
            "--".into(),
            "--".into(),
        ]];
        let csv = build_csv(&rows);
        assert!(csv.contains(r#""reading ""a""""#));

        let parsed = parse_line(csv.lines().nth(1).unwrap());
        assert_eq!(parsed[0], "reading \"a\"");
    }

    #[test]
    fn test_write_csv_filename_embeds_date() {
        let dir = tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let path = write_csv(&sample_rows(), dir.path(), date).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "hydra-readings-2026-08-06.csv"
        );

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\"Timestamp\""));
    }
}
