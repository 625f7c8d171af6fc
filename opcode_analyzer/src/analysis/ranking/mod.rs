//!
//! The windowed per-opcode ranking.
//!

pub mod config;
pub mod entry;

#[cfg(test)]
mod tests;

use colored::Colorize;
use serde::Serialize;

use crate::dataset::error::Error as DatasetError;
use crate::dataset::Dataset;
use crate::fee_schedule::FeeSchedule;
use crate::metric::error::Error as MetricError;
use crate::metric::Metric;
use crate::opcode::Opcode;

use self::config::Config;
use self::entry::Entry;
use self::entry::Exclusion;

///
/// The windowed per-opcode ranking.
///
/// One delta per opcode is taken across the whole window, evaluated with the
/// configured metric, and sorted by value descending. Ties are ordered by
/// ascending opcode identifier.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// The window start height.
    pub start: u64,
    /// The window end height.
    pub end: u64,
    /// The metric the opcodes are ranked by.
    pub metric: Metric,
    /// The ranked entries, truncated to the configured size.
    pub entries: Vec<Entry>,
    /// The opcodes left out, with the reason.
    pub excluded: Vec<(Opcode, Exclusion)>,
}

impl Ranking {
    ///
    /// Ranks all opcodes over the configured window.
    ///
    /// Opcodes executed less than once per block in the window are excluded,
    /// as are opcodes whose counters restarted, and, for gas-based metrics,
    /// opcodes without a static cost.
    ///
    pub fn build(
        dataset: &Dataset,
        schedule: &FeeSchedule,
        config: &Config,
    ) -> Result<Self, DatasetError> {
        let start = config
            .start
            .or_else(|| dataset.first_height())
            .ok_or(DatasetError::Empty)?;
        let end = config
            .end
            .or_else(|| dataset.last_height())
            .ok_or(DatasetError::Empty)?;
        let blocks = i64::try_from(end.saturating_sub(start)).unwrap_or(i64::MAX);

        let mut entries = Vec::new();
        let mut excluded = Vec::new();
        for opcode in Opcode::all() {
            let delta = match dataset.delta(Some(start), end, opcode) {
                Ok(delta) => delta,
                Err(DatasetError::Overflow { .. }) => {
                    excluded.push((opcode, Exclusion::Overflow));
                    continue;
                }
                Err(error) => return Err(error),
            };
            if delta.is_restart() {
                excluded.push((opcode, Exclusion::Restart));
                continue;
            }
            if delta.count < blocks {
                excluded.push((opcode, Exclusion::Infrequent));
                continue;
            }
            let value = match config.metric.evaluate(&delta, schedule) {
                Ok(value) => value,
                Err(MetricError::NotStaticizable { .. }) => {
                    excluded.push((opcode, Exclusion::NotStaticizable));
                    continue;
                }
                Err(MetricError::Dataset(error)) => return Err(error),
            };
            entries.push(Entry {
                opcode,
                name: opcode.to_string(),
                value,
                count: delta.count,
            });
        }

        entries.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.opcode.cmp(&b.opcode))
        });
        if let Some(top) = config.top {
            entries.truncate(top);
        }

        Ok(Self {
            start,
            end,
            metric: config.metric,
            entries,
            excluded,
        })
    }

    ///
    /// The `(label, value)` pairs in ranking order.
    ///
    pub fn labels(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value))
            .collect()
    }

    ///
    /// Prints the ranking table.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let title = format!("{} ({})", self.metric, self.metric.unit());
        let window = format!("{}..{}", self.start, self.end);
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            title.bright_white(),
            "═".repeat(43_usize.saturating_sub(title.len() + window.len())),
            window.bright_white()
        )?;

        let mean = if self.entries.is_empty() {
            0.0
        } else {
            self.entries.iter().map(|entry| entry.value).sum::<f64>() / self.entries.len() as f64
        };
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                w,
                "║ {:>3} {:16} {} {:>13} ║",
                index + 1,
                entry.name.bright_white(),
                Self::format_value(entry.value, mean),
                entry.count,
            )?;
        }
        writeln!(w, "╚{}╝", "═".repeat(53))?;

        Ok(())
    }

    ///
    /// Formats and colorizes a value against the ranking mean.
    ///
    fn format_value(value: f64, mean: f64) -> colored::ColoredString {
        let formatted = format!("{value:>16.3}");
        if value > mean {
            formatted.bright_red()
        } else {
            formatted.green()
        }
    }
}
