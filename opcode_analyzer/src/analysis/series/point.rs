//!
//! A time series point.
//!

use serde::Serialize;

///
/// A time series point.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// The height closing the interval.
    pub height: u64,
    /// The metric value.
    pub value: f64,
    /// The number of invocations inside the interval.
    pub count: i64,
    /// Whether the counters went backwards inside the interval.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub restart: bool,
}
