pub mod common;
pub mod extraction;
pub mod table;
pub mod test_case;

// Re-export common model types
pub use common::{Priority, TestType};
pub use extraction::{ExtractionFailure, ExtractionResult};
pub use table::TestCaseRow;
pub use test_case::TestCase;
