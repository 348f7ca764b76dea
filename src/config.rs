/// Per-request options for generation and refinement
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Model override; the configured default is used when `None`
    pub model: Option<String>,
    /// Free-text instructions appended to the generation prompt
    pub additional_instructions: String,
}

impl GenerationOptions {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = instructions.into();
        self
    }
}
