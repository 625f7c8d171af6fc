//!
//! The time series configuration.
//!

///
/// The time series configuration.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// An interval is charted only if its invocation count is strictly above the threshold.
    pub threshold: i64,
    /// Checkpoints below this height are ignored.
    pub from_height: u64,
    /// The upper bound the values are clamped to.
    pub cap: Option<f64>,
}

impl Config {
    /// The default minimum activity threshold.
    pub const DEFAULT_THRESHOLD: i64 = 500;

    ///
    /// Returns a copy with the cap replaced.
    ///
    pub fn with_cap(mut self, cap: Option<f64>) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            from_height: 0,
            cap: None,
        }
    }
}
