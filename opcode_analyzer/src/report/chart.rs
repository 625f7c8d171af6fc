//!
//! A chart of one opcode group.
//!

use serde::Serialize;

use crate::analysis::series::Series;
use crate::metric::Metric;
use crate::opcode::Opcode;

///
/// A chart of one opcode group.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// The chart title.
    pub title: String,
    /// The worksheet name.
    pub sheet: String,
    /// The charted metric.
    pub metric: Metric,
    /// The metric unit.
    pub unit: &'static str,
    /// The upper bound the values are clamped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap: Option<f64>,
    /// The height the series start at.
    pub from_height: u64,
    /// The charted series. Empty series are left out.
    pub series: Vec<Series>,
    /// The moving average of a single-opcode chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<Vec<(u64, f64)>>,
    /// The per-interval invocation counts of a single-opcode chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<(u64, i64)>>,
    /// The members left out because their cost is not static, or their counters overflow.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<Opcode>,
}
