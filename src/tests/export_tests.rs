#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{ json, Value };
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    use crate::implementations::response_extractor::extract;
    use crate::implementations::export::{
        ensure_export_dir,
        project_to_table,
        raw_output_path,
        timestamped_path,
        write_delimited,
        write_json,
    };
    use crate::models::table::TestCaseRow;
    use crate::models::test_case::TestCase;

    fn login_case() -> Value {
        json!({
            "id": "TC-001",
            "title": "Login with valid credentials",
            "preconditions": ["User must be registered", "Account is active"],
            "steps": ["Go to login page", "Enter valid email", "Click Login"],
            "expected_results": ["Login page loads", "Email entered", "Dashboard shown"],
            "priority": "High",
            "type": "Functional",
            "acceptance_criteria": ["User can log in successfully", "Dashboard is displayed"],
            "notes": "Happy path"
        })
    }

    #[test]
    fn test_project_full_record() {
        let rows = project_to_table(&[login_case()]);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, "TC-001");
        assert_eq!(row.preconditions, "User must be registered | Account is active");
        assert_eq!(row.steps, "1. Go to login page\n2. Enter valid email\n3. Click Login");
        assert_eq!(row.expected_results, "1. Login page loads\n2. Email entered\n3. Dashboard shown");
        assert_eq!(row.priority, "High");
        assert_eq!(row.test_type, "Functional");
        assert_eq!(row.acceptance_criteria, "User can log in successfully | Dashboard is displayed");
        assert_eq!(row.notes, "Happy path");
    }

    #[test]
    fn test_project_missing_notes_is_empty() {
        let mut case = login_case();
        case.as_object_mut().unwrap().remove("notes");
        let rows = project_to_table(&[case]);
        assert_eq!(rows[0].notes, "");
        assert_eq!(rows[0].id, "TC-001");
    }

    #[test]
    fn test_project_degrades_on_odd_shapes() {
        let rows = project_to_table(
            &[
                json!({}),
                json!("not an object"),
                json!({"id": 7, "steps": "Do it", "preconditions": null, "notes": null}),
            ]
        );
        assert_eq!(rows[0], TestCaseRow::default());
        assert_eq!(rows[1], TestCaseRow::default());
        assert_eq!(rows[2].id, "7");
        assert_eq!(rows[2].steps, "1. Do it");
        assert_eq!(rows[2].preconditions, "");
        assert_eq!(rows[2].notes, "");
    }

    #[test]
    fn test_test_case_from_value_and_levels() {
        let tc = TestCase::from_value(&login_case());
        assert_eq!(tc.steps.len(), 3);
        assert_eq!(tc.priority_level(), crate::models::common::Priority::High);
        assert_eq!(tc.kind(), crate::models::common::TestType::Functional);

        let odd = TestCase::from_value(&json!({"priority": "urgent", "type": "smoke"}));
        assert_eq!(odd.priority_level(), crate::models::common::Priority::Custom("urgent".to_string()));
        assert_eq!(odd.kind(), crate::models::common::TestType::Smoke);
    }

    #[test]
    fn test_write_json_is_pretty_and_keeps_unicode_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.json");
        let cases = vec![json!({"title": "Connexion réussie ✓", "id": "TC-001", "extra": [1]})];

        write_json(&cases, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Connexion réussie ✓"));
        assert!(written.starts_with("[\n  {\n    \"title\""));
        assert!(written.find("\"title\"").unwrap() < written.find("\"id\"").unwrap());
        let reread: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reread, Value::Array(cases));
    }

    #[test]
    fn test_write_delimited_has_header_and_quoted_multiline_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.csv");
        let rows = project_to_table(&[login_case()]);

        write_delimited(&rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, TestCaseRow::HEADERS);
        let reread: Vec<TestCaseRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reread, rows);
    }

    #[test]
    fn test_write_delimited_empty_table_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_delimited(&[], &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), TestCaseRow::HEADERS.join(","));
    }

    #[test]
    fn test_write_fails_with_io_error_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("cases.json");
        let err = write_json(&[json!({})], &path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

        let err = write_delimited(&[], &dir.path().join("missing").join("cases.csv")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_timestamped_paths() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let dir = Path::new("exports");
        assert_eq!(timestamped_path(dir, "json", now), dir.join("testcases_20240309T070501Z.json"));
        assert_eq!(timestamped_path(dir, "csv", now), dir.join("testcases_20240309T070501Z.csv"));
        assert_eq!(raw_output_path(dir, now), dir.join("raw_20240309T070501Z.txt"));
    }

    #[test]
    fn test_ensure_export_dir_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_export_dir(&nested).unwrap();
        ensure_export_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_large_integers_survive_extract_and_export_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.json");
        let raw = "Cases:\n[{\"id\": 123456789012345678901234567890, \"weight\": 0.10000000000000000001}]";

        let cases = extract(raw).into_result().unwrap();
        write_json(&cases, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"id\": 123456789012345678901234567890,\n    \"weight\": 0.10000000000000000001\n  }\n]"
        );
        assert_eq!(project_to_table(&cases)[0].id, "123456789012345678901234567890");
    }
}
