//!
//! The window ranking configuration.
//!

use crate::metric::Metric;

///
/// The window ranking configuration.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The window start. Defaults to the first checkpoint.
    pub start: Option<u64>,
    /// The window end. Defaults to the last checkpoint.
    pub end: Option<u64>,
    /// The metric the opcodes are ranked by.
    pub metric: Metric,
    /// The number of entries kept. All entries are kept if unset.
    pub top: Option<usize>,
}

impl Config {
    /// The default number of entries kept.
    pub const DEFAULT_TOP: usize = 20;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            metric: Metric::TimePerGas,
            top: Some(Self::DEFAULT_TOP),
        }
    }
}
