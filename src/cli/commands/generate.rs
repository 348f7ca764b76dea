use anyhow::{ anyhow, Result };
use std::fs;
use std::path::Path;

use casegen::{ merge_requirement, GenerationOptions, TestCaseGenerator, TextGenerator };

use crate::cli::commands::report_generation;
use crate::cli::ui;

/// Test case generation command
pub async fn execute<G: TextGenerator>(
    generator: &TestCaseGenerator<G>,
    requirement: Option<&str>,
    file: Option<&Path>,
    options: &GenerationOptions,
    output_dir: &Path,
    csv: bool
) -> Result<()> {
    ui::print_header("Generating Test Cases");

    let file_contents = match file {
        Some(path) => {
            ui::print_info(&format!("Loading requirement from {}", path.display()));
            let contents = fs
                ::read_to_string(path)
                .map_err(|_| anyhow!("Couldn't read {} as text.", path.display()))?;
            Some(contents)
        }
        None => None,
    };

    let typed = match (requirement, &file_contents) {
        (Some(text), _) => text.to_string(),
        (None, Some(_)) => String::new(),
        (None, None) => ui::get_requirement()?,
    };
    let requirement = merge_requirement(&typed, file_contents.as_deref());

    let model = generator.config().model(options.model.as_deref());
    let spinner = ui::spinner_with_message(&format!("Generating test cases with {}...", model));
    let result = generator.generate(&requirement, options).await;
    spinner.finish_and_clear();

    let generation = result?;
    report_generation(&generation, output_dir, csv)
}
