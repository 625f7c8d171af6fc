//!
//! The derived per-interval metrics.
//!

pub mod error;


use serde::Serialize;

use crate::dataset::delta::Delta;
use crate::dataset::Dataset;
use crate::fee_schedule::FeeSchedule;
use crate::opcode::Opcode;

use self::error::Error;

/// Nanoseconds in a millisecond.
pub const NANOSECONDS_PER_MILLISECOND: f64 = 1_000_000.0;

/// Nanoseconds in a second.
pub const NANOSECONDS_PER_SECOND: f64 = 1_000_000_000.0;

///
/// The quantity derived from a delta.
///
/// Time is measured in nanoseconds and gas in whole units throughout, so the
/// values are comparable across opcodes and intervals without extra scaling.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// The number of invocations.
    Count,
    /// The execution time, in milliseconds.
    Time,
    /// The gas consumed at the static cost.
    TotalGas,
    /// The execution time per gas unit, in nanoseconds, which equals milliseconds per megagas.
    #[default]
    TimePerGas,
    /// The gas units executed per second.
    GasPerSecond,
}

impl Metric {
    ///
    /// Whether the metric depends on the opcode cost.
    ///
    pub fn requires_cost(&self) -> bool {
        matches!(self, Self::TotalGas | Self::TimePerGas | Self::GasPerSecond)
    }

    ///
    /// The unit label.
    ///
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Count => "invocations",
            Self::Time => "ms",
            Self::TotalGas => "gas",
            Self::TimePerGas => "ms/Mgas",
            Self::GasPerSecond => "gas/s",
        }
    }

    ///
    /// Evaluates the metric on `delta`, with the cost in effect at the delta height.
    ///
    /// # Errors
    ///
    /// `NotStaticizable` if the metric needs a cost and the opcode has none at that height.
    ///
    pub fn evaluate(&self, delta: &Delta, schedule: &FeeSchedule) -> Result<f64, Error> {
        let gas = if self.requires_cost() {
            schedule
                .cost(delta.opcode, delta.height)
                .gas()
                .ok_or(Error::NotStaticizable {
                    opcode: delta.opcode,
                    height: delta.height,
                })?
        } else {
            0
        };

        Ok(match self {
            Self::Count => delta.count as f64,
            Self::Time => delta.time_ns as f64 / NANOSECONDS_PER_MILLISECOND,
            Self::TotalGas => total_gas(delta, gas) as f64,
            Self::TimePerGas => time_per_gas(delta, gas),
            Self::GasPerSecond => gas_per_second(delta, gas),
        })
    }

    ///
    /// Computes the delta of `opcode` between two checkpoints and evaluates the metric on it.
    ///
    pub fn between(
        &self,
        dataset: &Dataset,
        schedule: &FeeSchedule,
        earlier: Option<u64>,
        later: u64,
        opcode: Opcode,
    ) -> Result<f64, Error> {
        let delta = dataset.delta(earlier, later, opcode)?;
        self.evaluate(&delta, schedule)
    }
}

impl std::str::FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "time" => Ok(Self::Time),
            "total-gas" => Ok(Self::TotalGas),
            "time-per-gas" => Ok(Self::TimePerGas),
            "gas-per-second" => Ok(Self::GasPerSecond),
            string => anyhow::bail!(
                "Unknown metric `{string}`. Supported metrics: {}",
                [
                    Self::Count,
                    Self::Time,
                    Self::TotalGas,
                    Self::TimePerGas,
                    Self::GasPerSecond,
                ]
                .into_iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Time => write!(f, "time"),
            Self::TotalGas => write!(f, "total-gas"),
            Self::TimePerGas => write!(f, "time-per-gas"),
            Self::GasPerSecond => write!(f, "gas-per-second"),
        }
    }
}

///
/// The gas consumed by the interval's invocations at the static cost `gas`.
///
pub fn total_gas(delta: &Delta, gas: u64) -> i128 {
    i128::from(delta.count) * i128::from(gas)
}

///
/// The execution time per gas unit, in nanoseconds.
///
/// Exactly `0` if the interval consumed no gas. This is a degenerate value and
/// does not mean the opcode is fast.
///
/// # Example
///
/// ```rust
/// use opcode_analyzer::Delta;
/// use opcode_analyzer::Opcode;
///
/// let delta = Delta {
///     height: 7_280_000,
///     opcode: Opcode::SLOAD,
///     count: 1_000,
///     time_ns: 400_000,
/// };
/// assert_eq!(opcode_analyzer::metric::time_per_gas(&delta, 200), 2.0);
/// assert_eq!(opcode_analyzer::metric::time_per_gas(&delta, 0), 0.0);
/// ```
///
pub fn time_per_gas(delta: &Delta, gas: u64) -> f64 {
    let total_gas = total_gas(delta, gas);
    if total_gas == 0 {
        return 0.0;
    }
    delta.time_ns as f64 / total_gas as f64
}

///
/// The gas units executed per second.
///
/// Exactly `0` if no time elapsed in the interval.
///
pub fn gas_per_second(delta: &Delta, gas: u64) -> f64 {
    if delta.time_ns == 0 {
        return 0.0;
    }
    total_gas(delta, gas) as f64 * NANOSECONDS_PER_SECOND / delta.time_ns as f64
}
