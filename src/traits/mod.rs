pub mod text_generator;

// Re-export traits
pub use text_generator::TextGenerator;
