pub mod config;
pub mod export;
pub mod ollama_client;
pub mod prompts;
pub mod response_extractor;
pub mod test_case_generator;
