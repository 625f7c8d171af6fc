//!
//! A cumulative per-opcode counter.
//!

use serde::Deserialize;

///
/// A cumulative per-opcode counter.
///
/// Both values are non-decreasing within a single continuous run of the
/// metered node, and reset to near zero when the node restarts.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Counter {
    /// The number of invocations.
    #[serde(rename = "Num", alias = "Count", alias = "invocationCount")]
    pub count: u64,
    /// The cumulative execution time, in nanoseconds.
    #[serde(
        rename = "Time",
        alias = "ExecTime",
        alias = "cumulativeExecTimeNanoseconds"
    )]
    pub time_ns: u64,
}

impl Counter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(count: u64, time_ns: u64) -> Self {
        Self { count, time_ns }
    }
}
