use log::{ info, warn };

use crate::config::GenerationOptions;
use crate::errors::{ CaseGenError, CaseGenResult };
use crate::implementations::config::GeneratorConfig;
use crate::implementations::prompts;
use crate::implementations::response_extractor::extract;
use crate::models::extraction::ExtractionResult;
use crate::traits::text_generator::TextGenerator;

const EMPTY_REQUIREMENT: &str = "Please provide a requirement or upload a text file.";

/// One model round-trip: the raw text and what could be recovered from it
///
/// The raw text is kept even on success so callers can always show it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub model: String,
    pub raw: String,
    pub extraction: ExtractionResult,
}

/// Turns requirements into test cases by prompting a text-generation backend
///
/// # Usage Example
/// ```rust,no_run
/// use casegen::{ GenerationOptions, GeneratorConfig, OllamaGenerator, TestCaseGenerator };
///
/// async fn generate_example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = GeneratorConfig::default();
///     let backend = OllamaGenerator::new(&config)?;
///     let generator = TestCaseGenerator::new(config, backend);
///
///     let generation = generator
///         .generate("As a user, I want to reset my password", &GenerationOptions::default())
///         .await?;
///
///     match generation.extraction.test_cases() {
///         Some(cases) => println!("Parsed {} test case(s).", cases.len()),
///         None => println!("Raw output:\n{}", generation.raw),
///     }
///     Ok(())
/// }
/// ```
pub struct TestCaseGenerator<G: TextGenerator> {
    config: GeneratorConfig,
    backend: G,
}

impl<G: TextGenerator> TestCaseGenerator<G> {
    pub fn new(config: GeneratorConfig, backend: G) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn backend(&self) -> &G {
        &self.backend
    }

    /// Generate test cases for a requirement or user story
    pub async fn generate(
        &self,
        requirement: &str,
        options: &GenerationOptions
    ) -> CaseGenResult<Generation> {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            return Err(CaseGenError::InvalidInput(EMPTY_REQUIREMENT.to_string()));
        }

        let prompt = prompts::build_generation_prompt(
            &self.config,
            requirement,
            options.additional_instructions.trim()
        )?;
        self.run(&prompt, options).await
    }

    /// Send user-edited JSON back to the model for correction and expansion
    pub async fn refine(
        &self,
        edited_json: &str,
        options: &GenerationOptions
    ) -> CaseGenResult<Generation> {
        if edited_json.trim().is_empty() {
            return Err(CaseGenError::InvalidInput("Nothing to refine: the edited JSON is empty.".to_string()));
        }

        let prompt = prompts::build_refinement_prompt(&self.config, edited_json)?;
        self.run(&prompt, options).await
    }

    async fn run(&self, prompt: &str, options: &GenerationOptions) -> CaseGenResult<Generation> {
        let model = self.config.model(options.model.as_deref());
        info!("Calling model {}", model);

        let raw = self.backend.generate(prompt, &model).await?;
        let extraction = extract(&raw);

        match &extraction {
            ExtractionResult::Success(cases) => info!("Parsed {} test case(s)", cases.len()),
            ExtractionResult::Failure(failure) => warn!("Could not extract test cases: {}", failure.reason),
        }

        Ok(Generation { model, raw, extraction })
    }
}

/// Combine typed requirement text with the contents of an uploaded file
pub fn merge_requirement(text: &str, file_contents: Option<&str>) -> String {
    match file_contents {
        Some(file) if !text.trim().is_empty() => format!("{}\n\n{}", text, file),
        Some(file) => file.to_string(),
        None => text.to_string(),
    }
}
