//!
//! The per-opcode time series.
//!

pub mod config;
pub mod point;


use serde::Serialize;

use crate::dataset::Dataset;
use crate::fee_schedule::FeeSchedule;
use crate::metric::error::Error as MetricError;
use crate::metric::Metric;
use crate::opcode::Opcode;

use self::config::Config;
use self::point::Point;

///
/// The per-opcode time series.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// The opcode.
    pub opcode: Opcode,
    /// The opcode label.
    pub name: String,
    /// The charted metric.
    pub metric: Metric,
    /// The points in ascending height order.
    pub points: Vec<Point>,
}

impl Series {
    /// The default moving average period.
    pub const DEFAULT_MOVING_AVERAGE_PERIOD: usize = 16;

    ///
    /// Walks the consecutive checkpoint pairs in ascending order and evaluates
    /// `metric` on each interval active enough to pass the threshold.
    ///
    /// The first checkpoint at or above `config.from_height` only opens the walk.
    ///
    pub fn build(
        dataset: &Dataset,
        schedule: &FeeSchedule,
        opcode: Opcode,
        metric: Metric,
        config: &Config,
    ) -> Result<Self, MetricError> {
        let mut points = Vec::with_capacity(dataset.len());
        for (earlier, later) in dataset.intervals(config.from_height) {
            let delta = dataset.delta(Some(earlier), later, opcode)?;
            if delta.count <= config.threshold {
                continue;
            }

            let mut value = metric.evaluate(&delta, schedule)?;
            if let Some(cap) = config.cap {
                value = value.min(cap);
            }
            points.push(Point {
                height: later,
                value,
                count: delta.count,
                restart: delta.is_restart(),
            });
        }

        Ok(Self {
            opcode,
            name: opcode.to_string(),
            metric,
            points,
        })
    }

    ///
    /// Whether any value reaches `threshold`.
    ///
    pub fn any_at_least(&self, threshold: f64) -> bool {
        self.points.iter().any(|point| point.value >= threshold)
    }

    ///
    /// The trailing simple moving average over at most `period` previous values.
    ///
    pub fn moving_average(&self, period: usize) -> Vec<(u64, f64)> {
        let period = period.max(1);
        (0..self.points.len())
            .map(|index| {
                let window = &self.points[(index + 1).saturating_sub(period)..=index];
                let sum: f64 = window.iter().map(|point| point.value).sum();
                (self.points[index].height, sum / window.len() as f64)
            })
            .collect()
    }

    ///
    /// The per-interval invocation counts.
    ///
    pub fn counts(&self) -> Vec<(u64, i64)> {
        self.points
            .iter()
            .map(|point| (point.height, point.count))
            .collect()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
