use anyhow::{ anyhow, Result };
use serde_json::Value;
use std::fs;
use std::path::Path;

use casegen::implementations::export::{
    ensure_export_dir,
    project_to_table,
    raw_output_path,
    timestamped_path,
    write_delimited,
    write_json,
};
use casegen::{ extract, CaseGenError, Generation };

use crate::cli::ui;

pub mod export;
pub mod generate;
pub mod refine;
pub mod show;

const EMPTY_ARRAY_REASON: &str = "The model returned an empty test case array.";

/// Read a JSON file (or saved raw model output) and recover its test case array
pub fn load_cases(path: &Path) -> Result<Vec<Value>> {
    let contents = fs
        ::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let cases = extract(&contents).into_result()?;
    Ok(cases)
}

/// Show a generation outcome and persist it
///
/// Parsed cases are rendered and exported. Unparsed output, or an empty array, is
/// printed and saved next to the exports so it can be fixed by hand.
pub fn report_generation(generation: &Generation, output_dir: &Path, csv: bool) -> Result<()> {
    let now = chrono::Utc::now();
    ensure_export_dir(output_dir)?;

    match generation.extraction.test_cases() {
        Some(cases) if !cases.is_empty() => {
            ui::print_success(&format!("Parsed {} test case(s).", cases.len()));

            ui::print_header("Generated Test Cases");
            ui::print_test_case_table(&project_to_table(cases));

            let json_path = timestamped_path(output_dir, "json", now);
            write_json(cases, &json_path)?;
            ui::print_success(&format!("Saved JSON to {}", json_path.display()));

            if csv {
                let csv_path = timestamped_path(output_dir, "csv", now);
                write_delimited(&project_to_table(cases), &csv_path)?;
                ui::print_success(&format!("Saved CSV to {}", csv_path.display()));
            }

            ui::print_info(
                &format!("Edit {} and run `casegen refine --input {}` to iterate.", json_path.display(), json_path.display())
            );
            Ok(())
        }
        _ => {
            ui::print_warning("Couldn't parse model output as JSON array. Showing raw output for manual copy/edit.");
            match generation.extraction.failure() {
                Some(failure) => ui::print_result("Reason", &failure.to_string()),
                None => ui::print_result("Reason", EMPTY_ARRAY_REASON),
            }
            ui::print_raw_output("Raw model output", &generation.raw);

            let raw_path = raw_output_path(output_dir, now);
            fs::write(&raw_path, &generation.raw)?;
            ui::print_info(
                &format!("Raw output saved to {}. Fix it and run `casegen export --input {}`.", raw_path.display(), raw_path.display())
            );
            Err(
                CaseGenError::ExtractionError {
                    reason: format!("No test cases could be extracted from the {} response", generation.model),
                    candidate: None,
                }.into()
            )
        }
    }
}
