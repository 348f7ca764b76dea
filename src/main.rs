use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{ debug, info, warn };

use casegen::{
    CaseGenError,
    ErrorSeverity,
    GenerationOptions,
    GeneratorConfig,
    OllamaGenerator,
    RecoverableError,
    TestCaseGenerator,
};

mod cli;
use cli::{ CaseGenCli, Commands };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = CaseGenCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<CaseGenError>() {
            Some(err) => {
                if err.severity() == ErrorSeverity::Warning {
                    cli::ui::print_warning(&err.to_string());
                } else {
                    cli::ui::print_error(&err.to_string());
                }
                if let Some(hint) = err.recovery_strategy() {
                    cli::ui::print_info(&hint);
                }
            }
            None => cli::ui::print_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: CaseGenCli) -> Result<()> {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let config = load_config(cli.config.as_deref())?;
    let export_dir = PathBuf::from(config.export_dir());

    match cli.command {
        Commands::Generate { requirement, file, model, instructions, output_dir, csv } => {
            let generator = build_generator(config)?;
            let options = GenerationOptions {
                model,
                additional_instructions: instructions.unwrap_or_default(),
            };
            cli::commands::generate::execute(
                &generator,
                requirement.as_deref(),
                file.as_deref(),
                &options,
                output_dir.as_deref().unwrap_or(export_dir.as_path()),
                csv
            ).await?;
        }

        Commands::Refine { input, model, output_dir, csv } => {
            let generator = build_generator(config)?;
            let options = GenerationOptions { model, ..Default::default() };
            cli::commands::refine::execute(
                &generator,
                &input,
                &options,
                output_dir.as_deref().unwrap_or(export_dir.as_path()),
                csv
            ).await?;
        }

        Commands::Export { input, format, output } => {
            cli::commands::export::execute(&input, format, output.as_deref(), &export_dir)?;
        }

        Commands::Show { input } => {
            cli::commands::show::execute(&input)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GeneratorConfig::from_file(path).map_err(CaseGenError::from)?
        }
        None => GeneratorConfig::default(),
    };
    Ok(config.with_env_overrides().map_err(CaseGenError::from)?)
}

fn build_generator(config: GeneratorConfig) -> Result<TestCaseGenerator<OllamaGenerator>> {
    let backend = OllamaGenerator::new(&config)?;
    info!("Ollama endpoint: {}", backend.endpoint());
    if !backend.endpoint().starts_with("http") {
        warn!("Endpoint {} does not look like an HTTP URL", backend.endpoint());
    }
    Ok(TestCaseGenerator::new(config, backend))
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
