use anyhow::Result;
use std::path::Path;

use casegen::project_to_table;

use crate::cli::commands::load_cases;
use crate::cli::ui;

/// Render a test case file without writing anything
pub fn execute(input: &Path) -> Result<()> {
    let cases = load_cases(input)?;
    ui::print_header(&format!("{} test case(s) in {}", cases.len(), input.display()));
    ui::print_test_case_table(&project_to_table(&cases));
    Ok(())
}
