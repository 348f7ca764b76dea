use std::fmt;

/// Test case priority as requested from the model
///
/// Model output is not constrained, so anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    Custom(String),
}

/// Test case category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestType {
    Functional,
    Integration,
    Regression,
    Smoke,
    Custom(String),
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Custom(value.to_string()),
        }
    }
}

impl TestType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "functional" => TestType::Functional,
            "integration" => TestType::Integration,
            "regression" => TestType::Regression,
            "smoke" => TestType::Smoke,
            _ => TestType::Custom(value.to_string()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
            Priority::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestType::Functional => write!(f, "Functional"),
            TestType::Integration => write!(f, "Integration"),
            TestType::Regression => write!(f, "Regression"),
            TestType::Smoke => write!(f, "Smoke"),
            TestType::Custom(s) => write!(f, "{}", s),
        }
    }
}
