//!
//! Serializing the report to JSON.
//!

use crate::report::Report;

///
/// JSON serialization of the report model.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<Report> for Json {
    fn from(report: Report) -> Self {
        let content = serde_json::to_string_pretty(&report).expect("Always valid");
        Self { content }
    }
}
