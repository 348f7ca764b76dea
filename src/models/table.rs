use serde::{ Deserialize, Serialize };

/// Flat, display-ready projection of a test case
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRow {
    pub id: String,
    pub title: String,
    pub preconditions: String,
    pub steps: String,
    pub expected_results: String,
    pub priority: String,
    #[serde(rename = "type")]
    pub test_type: String,
    pub acceptance_criteria: String,
    pub notes: String,
}

impl TestCaseRow {
    pub const HEADERS: [&'static str; 9] = [
        "id",
        "title",
        "preconditions",
        "steps",
        "expected_results",
        "priority",
        "type",
        "acceptance_criteria",
        "notes",
    ];
}
