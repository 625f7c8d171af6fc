//!
//! Information associated with the report.
//!

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::fee_schedule::fork::Fork;

///
/// A fork activation inside the charted range, drawn as an annotation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForkMark {
    /// The activation height.
    pub height: u64,
    /// The fork.
    pub fork: Fork,
}

///
/// Information associated with the report.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    /// The generation time.
    pub generated: DateTime<Utc>,
    /// The number of checkpoints loaded.
    pub checkpoints: usize,
    /// The lowest checkpoint height.
    pub first_height: Option<u64>,
    /// The highest checkpoint height.
    pub last_height: Option<u64>,
    /// The minimum activity threshold of the time series.
    pub threshold: i64,
    /// The height the time series start at.
    pub from_height: u64,
    /// The fork activations inside the loaded range.
    pub forks: Vec<ForkMark>,
}
