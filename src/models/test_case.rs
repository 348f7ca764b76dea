use serde::{ Deserialize, Serialize };
use serde_json::Value;

use crate::models::common::{ Priority, TestType };

/// One generated test scenario
///
/// Every field defaults so partial model output still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub preconditions: Vec<String>,
    pub steps: Vec<String>,
    pub expected_results: Vec<String>,
    pub priority: String,
    #[serde(rename = "type")]
    pub test_type: String,
    pub acceptance_criteria: Vec<String>,
    pub notes: String,
}

impl TestCase {
    /// Read a test case out of a loosely-typed value.
    ///
    /// Missing keys and wrongly-typed values fall back to defaults instead of failing.
    pub fn from_value(value: &Value) -> Self {
        TestCase {
            id: text_field(value, "id"),
            title: text_field(value, "title"),
            preconditions: list_field(value, "preconditions"),
            steps: list_field(value, "steps"),
            expected_results: list_field(value, "expected_results"),
            priority: text_field(value, "priority"),
            test_type: text_field(value, "type"),
            acceptance_criteria: list_field(value, "acceptance_criteria"),
            notes: text_field(value, "notes"),
        }
    }

    pub fn priority_level(&self) -> Priority {
        Priority::parse(&self.priority)
    }

    pub fn kind(&self) -> TestType {
        TestType::parse(&self.test_type)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn text_field(value: &Value, key: &str) -> String {
    value.get(key).map(scalar_text).unwrap_or_default()
}

pub(crate) fn list_field(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) =>
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(scalar_text)
                .collect(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(other) => vec![scalar_text(other)],
    }
}
