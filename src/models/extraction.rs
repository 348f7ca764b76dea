use std::fmt;

use serde_json::Value;

use crate::errors::{ CaseGenError, CaseGenResult };

pub const NO_ARRAY_REASON: &str = "No JSON array could be extracted from model output.";

/// Why a model response could not be turned into a test case array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub reason: String,
    /// The bracket span that failed to parse, kept for display
    pub candidate: Option<String>,
}

/// Outcome of recovering a JSON array from raw model output
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success(Vec<Value>),
    Failure(ExtractionFailure),
}

impl ExtractionFailure {
    pub fn no_array() -> Self {
        ExtractionFailure {
            reason: NO_ARRAY_REASON.to_string(),
            candidate: None,
        }
    }

    pub fn parse_error(message: String, candidate: &str) -> Self {
        ExtractionFailure {
            reason: message,
            candidate: Some(candidate.to_string()),
        }
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.candidate {
            Some(candidate) =>
                write!(f, "Failed to parse JSON candidate: {}\nCandidate:\n{}", self.reason, candidate),
            None => write!(f, "{}", self.reason),
        }
    }
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    pub fn test_cases(&self) -> Option<&[Value]> {
        match self {
            ExtractionResult::Success(cases) => Some(cases),
            ExtractionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ExtractionFailure> {
        match self {
            ExtractionResult::Success(_) => None,
            ExtractionResult::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> CaseGenResult<Vec<Value>> {
        match self {
            ExtractionResult::Success(cases) => Ok(cases),
            ExtractionResult::Failure(failure) => {
                let reason = failure.to_string();
                Err(CaseGenError::ExtractionError { reason, candidate: failure.candidate })
            }
        }
    }
}
