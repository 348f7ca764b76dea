use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use casegen::{ GenerationOptions, TestCaseGenerator, TextGenerator };

use crate::cli::commands::report_generation;
use crate::cli::ui;

/// Refinement command
pub async fn execute<G: TextGenerator>(
    generator: &TestCaseGenerator<G>,
    input: &Path,
    options: &GenerationOptions,
    output_dir: &Path,
    csv: bool
) -> Result<()> {
    ui::print_header("Refining Test Cases");

    let edited_json = fs
        ::read_to_string(input)
        .map_err(|e| anyhow!("Failed to read {}: {}", input.display(), e))?;

    let model = generator.config().model(options.model.as_deref());
    let spinner = ui::spinner_with_message(
        &format!("Asking {} to expand/modify the test cases...", model)
    );
    let result = generator.refine(&edited_json, options).await;
    spinner.finish_and_clear();

    let generation = result?;
    report_generation(&generation, output_dir, csv)
}
