use log::{ debug, warn };
use serde_json::Value;

use crate::models::extraction::{ ExtractionFailure, ExtractionResult };

/// Recover a JSON array of test cases from raw model output.
///
/// The whole trimmed text is tried first. If that is not an array, the span from the
/// first `[` to the last `]` is parsed instead. Prose containing stray brackets around
/// the array defeats this; broken JSON is reported, never repaired.
///
/// Numbers are kept exactly as written. Nesting deeper than serde_json's recursion
/// limit of 128 levels is reported as a parse failure even when the JSON is valid.
pub fn extract(raw_text: &str) -> ExtractionResult {
    let text = raw_text.trim();

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => {
            debug!("Model output parsed directly as an array of {} item(s)", items.len());
            return ExtractionResult::Success(items);
        }
        Ok(_) => debug!("Model output is JSON but not an array, searching for brackets"),
        Err(e) => debug!("Direct parse failed ({}), searching for brackets", e),
    }

    let (start, end) = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if end > start => (start, end),
        _ => {
            warn!("No bracketed span found in model output");
            return ExtractionResult::Failure(ExtractionFailure::no_array());
        }
    };

    // Both delimiters are ASCII, so the byte range is on char boundaries.
    let candidate = &text[start..=end];
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => {
            debug!("Recovered an array of {} item(s) from bytes {}..={}", items.len(), start, end);
            ExtractionResult::Success(items)
        }
        Ok(_) => ExtractionResult::Failure(ExtractionFailure::no_array()),
        Err(e) => {
            warn!("Candidate span failed to parse: {}", e);
            ExtractionResult::Failure(ExtractionFailure::parse_error(e.to_string(), candidate))
        }
    }
}
