pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::GenerationOptions;
pub use errors::{ CaseGenError, CaseGenResult, ErrorSeverity, RecoverableError };
pub use implementations::config::{ ConfigError, GeneratorConfig };
pub use implementations::export::{ project_to_table, write_delimited, write_json };
pub use implementations::ollama_client::OllamaGenerator;
pub use implementations::response_extractor::extract;
pub use implementations::test_case_generator::{ merge_requirement, Generation, TestCaseGenerator };
pub use models::{
    common::{ Priority, TestType },
    extraction::{ ExtractionFailure, ExtractionResult },
    table::TestCaseRow,
    test_case::TestCase,
};
pub use traits::TextGenerator;
