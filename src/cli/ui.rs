use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Editor, Input };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::{ wrap, Options };

use casegen::models::common::Priority;
use casegen::models::table::TestCaseRow;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    if width == 0 { 80 } else { width }
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

fn colored_priority(priority: &str) -> ColoredString {
    match Priority::parse(priority) {
        Priority::High => priority.red().bold(),
        Priority::Medium => priority.yellow(),
        Priority::Low => priority.green(),
        Priority::Custom(_) => priority.normal(),
    }
}

fn print_field(label: &str, value: &str, width: usize) {
    if value.is_empty() {
        return;
    }
    println!("  {}", label.bold());
    let options = Options::new(width.saturating_sub(6)).initial_indent("    ").subsequent_indent("    ");
    for line in value.lines() {
        for wrapped_line in wrap(line, &options) {
            println!("{}", wrapped_line);
        }
    }
}

/// Render flattened test cases one block per case
pub fn print_test_case_table(rows: &[TestCaseRow]) {
    let width = term_width();
    let rule = "─".repeat(width.min(100));

    for row in rows {
        println!("{}", rule.dimmed());
        println!("{}  {}", row.id.cyan().bold(), row.title.bold());
        println!(
            "  {} {}   {} {}",
            "Priority:".dimmed(),
            colored_priority(&row.priority),
            "Type:".dimmed(),
            row.test_type
        );
        print_field("Preconditions", &row.preconditions, width);
        print_field("Steps", &row.steps, width);
        print_field("Expected results", &row.expected_results, width);
        print_field("Acceptance criteria", &row.acceptance_criteria, width);
        print_field("Notes", &row.notes, width);
    }
    if !rows.is_empty() {
        println!("{}", rule.dimmed());
    }
}

/// Show unparsed model output so it can be copied and fixed by hand
pub fn print_raw_output(title: &str, raw: &str) {
    print_header(title);
    println!("{}", raw);
    println!();
}

/// Ask for a requirement when none was given on the command line
pub fn get_requirement() -> std::io::Result<String> {
    let use_editor = Confirm::with_theme(&get_theme())
        .with_prompt("Open an editor to write the requirement?")
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    if use_editor {
        let text = Editor::new()
            .edit("As a user, I want to ...")
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        return Ok(text.unwrap_or_default());
    }

    Input::with_theme(&get_theme())
        .with_prompt("Requirement / user story")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
