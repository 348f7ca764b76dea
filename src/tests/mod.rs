mod export_tests;
mod ollama_client_tests;
