use anyhow::{ anyhow, Result };
use log::info;
use std::path::{ Path, PathBuf };

use casegen::implementations::export::{ ensure_export_dir, timestamped_path };
use casegen::{ project_to_table, write_delimited, write_json };

use crate::cli::commands::load_cases;
use crate::cli::ui;
use crate::cli::ExportFormat;

/// Export command
pub fn execute(input: &Path, format: ExportFormat, output: Option<&Path>, export_dir: &Path) -> Result<()> {
    ui::print_header("Exporting Test Cases");

    let cases = load_cases(input)?;
    if cases.is_empty() {
        return Err(anyhow!("No testcases to export."));
    }
    info!("Loaded {} test case(s) from {}", cases.len(), input.display());

    let extension = match format {
        ExportFormat::Json => "json",
        ExportFormat::Csv => "csv",
    };

    let path: PathBuf = match output {
        Some(path) => {
            if path.exists() && !ui::confirm_action(&format!("{} exists. Overwrite?", path.display()))? {
                ui::print_info("Export cancelled.");
                return Ok(());
            }
            path.to_path_buf()
        }
        None => {
            ensure_export_dir(export_dir)?;
            timestamped_path(export_dir, extension, chrono::Utc::now())
        }
    };

    match format {
        ExportFormat::Json => write_json(&cases, &path)?,
        ExportFormat::Csv => write_delimited(&project_to_table(&cases), &path)?,
    }

    ui::print_success(&format!("Saved {} to {}", extension.to_uppercase(), path.display()));
    Ok(())
}
