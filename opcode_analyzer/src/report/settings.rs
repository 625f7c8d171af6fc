//!
//! The report settings.
//!

use crate::analysis::ranking::config::Config as RankingConfig;
use crate::analysis::series::config::Config as SeriesConfig;
use crate::analysis::series::Series;
use crate::report::plot::Plot;

///
/// The report settings.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The charts, in worksheet order.
    pub plots: Vec<Plot>,
    /// The time series settings. The cap is taken from each plot.
    pub series: SeriesConfig,
    /// The window ranking settings. No ranking is built if unset.
    pub ranking: Option<RankingConfig>,
    /// The moving average period of single-opcode charts.
    pub moving_average_period: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plots: Plot::defaults(),
            series: SeriesConfig::default(),
            ranking: Some(RankingConfig::default()),
            moving_average_period: Series::DEFAULT_MOVING_AVERAGE_PERIOD,
        }
    }
}
