use std::fs::{ self, File };
use std::io::{ self, BufWriter, Write };
use std::path::{ Path, PathBuf };

use chrono::{ DateTime, Utc };
use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::models::table::TestCaseRow;
use crate::models::test_case::TestCase;

const UNORDERED_SEPARATOR: &str = " | ";

/// Flatten test cases for display or CSV export.
///
/// Label lists are joined with `" | "`, step and result lists become numbered lines.
/// Anything missing projects to an empty string.
pub fn project_to_table(testcases: &[Value]) -> Vec<TestCaseRow> {
    testcases
        .iter()
        .map(|value| {
            let tc = TestCase::from_value(value);
            TestCaseRow {
                id: tc.id,
                title: tc.title,
                preconditions: tc.preconditions.join(UNORDERED_SEPARATOR),
                steps: numbered(&tc.steps),
                expected_results: numbered(&tc.expected_results),
                priority: tc.priority,
                test_type: tc.test_type,
                acceptance_criteria: tc.acceptance_criteria.join(UNORDERED_SEPARATOR),
                notes: tc.notes,
            }
        })
        .collect()
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write test cases as pretty-printed UTF-8 JSON
pub fn write_json(testcases: &[Value], path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    testcases.serialize(&mut serializer)?;
    writer.flush()?;
    info!("Wrote {} test case(s) to {}", testcases.len(), path.display());
    Ok(())
}

/// Write flat rows as CSV with a header row
pub fn write_delimited(table: &[TestCaseRow], path: &Path) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);
    if table.is_empty() {
        writer.write_record(TestCaseRow::HEADERS)?;
    }
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {} row(s) to {}", table.len(), path.display());
    Ok(())
}

/// `<dir>/testcases_<YYYYMMDDTHHMMSSZ>.<ext>`
pub fn timestamped_path(dir: &Path, extension: &str, now: DateTime<Utc>) -> PathBuf {
    dir.join(format!("testcases_{}.{}", now.format("%Y%m%dT%H%M%SZ"), extension))
}

/// `<dir>/raw_<YYYYMMDDTHHMMSSZ>.txt`, used to keep unparsed output around
pub fn raw_output_path(dir: &Path, now: DateTime<Utc>) -> PathBuf {
    dir.join(format!("raw_{}.txt", now.format("%Y%m%dT%H%M%SZ")))
}

pub fn ensure_export_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
