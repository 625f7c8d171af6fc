//!
//! The derived report handed to the output formats.
//!

pub mod chart;
pub mod metadata;
pub mod plot;
pub mod settings;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::analysis::ranking::Ranking;
use crate::analysis::series::config::Config as SeriesConfig;
use crate::analysis::series::Series;
use crate::dataset::error::Error as DatasetError;
use crate::dataset::Dataset;
use crate::fee_schedule::FeeSchedule;
use crate::metric::error::Error as MetricError;

use self::chart::Chart;
use self::metadata::ForkMark;
use self::metadata::Metadata;
use self::plot::Plot;
use self::settings::Settings;

///
/// The derived report handed to the output formats.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Information associated with the report.
    pub metadata: Metadata,
    /// One chart per plot.
    pub charts: Vec<Chart>,
    /// The window ranking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Ranking>,
    /// The reason the window ranking could not be built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_error: Option<DatasetError>,
}

impl Report {
    ///
    /// Builds the charts and the ranking from a loaded dataset.
    ///
    /// The ranking is only built if the dataset holds at least two checkpoints.
    /// A ranking window that cannot be resolved does not affect the charts and
    /// is reported in `ranking_error`.
    ///
    pub fn build(
        dataset: &Dataset,
        schedule: &FeeSchedule,
        settings: &Settings,
    ) -> Result<Self, MetricError> {
        let charts = settings
            .plots
            .iter()
            .map(|plot| Self::chart(dataset, schedule, plot, settings))
            .collect::<Result<Vec<Chart>, MetricError>>()?;

        let (ranking, ranking_error) = match settings.ranking {
            Some(ref config) if dataset.len() >= 2 => {
                match Ranking::build(dataset, schedule, config) {
                    Ok(ranking) => (Some(ranking), None),
                    Err(error) => (None, Some(error)),
                }
            }
            _ => (None, None),
        };

        let forks = match (dataset.first_height(), dataset.last_height()) {
            (Some(first), Some(last)) => schedule
                .activations()
                .iter()
                .filter(|activation| activation.height > first && activation.height <= last)
                .map(|activation| ForkMark {
                    height: activation.height,
                    fork: activation.fork,
                })
                .collect(),
            _ => vec![],
        };

        Ok(Self {
            metadata: Metadata {
                generated: chrono::Utc::now(),
                checkpoints: dataset.len(),
                first_height: dataset.first_height(),
                last_height: dataset.last_height(),
                threshold: settings.series.threshold,
                from_height: settings.series.from_height,
                forks,
            },
            charts,
            ranking,
            ranking_error,
        })
    }

    ///
    /// Builds the chart of one plot.
    ///
    /// For gas-based metrics, members without a static cost at any checkpoint
    /// are listed as skipped, whether or not they were active.
    ///
    fn chart(
        dataset: &Dataset,
        schedule: &FeeSchedule,
        plot: &Plot,
        settings: &Settings,
    ) -> Result<Chart, MetricError> {
        let group = plot.group;
        let metric = group.metric();
        let config = SeriesConfig {
            cap: plot.cap,
            from_height: settings.series.from_height.max(plot.from_height),
            ..settings.series
        };

        let mut series = Vec::new();
        let mut skipped = Vec::new();
        for opcode in group.members() {
            if metric.requires_cost()
                && dataset
                    .heights()
                    .any(|height| !schedule.cost(opcode, height).is_static())
            {
                skipped.push(opcode);
                continue;
            }
            let opcode_series = match Series::build(dataset, schedule, opcode, metric, &config) {
                Ok(opcode_series) => opcode_series,
                Err(MetricError::NotStaticizable { opcode, .. })
                | Err(MetricError::Dataset(DatasetError::Overflow { opcode, .. })) => {
                    skipped.push(opcode);
                    continue;
                }
                Err(error) => return Err(error),
            };
            if opcode_series.is_empty() {
                continue;
            }
            if let Some(peak) = plot.peak_filter {
                if !opcode_series.any_at_least(peak) {
                    continue;
                }
            }
            series.push(opcode_series);
        }

        let (moving_average, counts) = match series.as_slice() {
            [single] if group.has_count_series() => (
                Some(single.moving_average(settings.moving_average_period)),
                Some(single.counts()),
            ),
            _ => (None, None),
        };

        Ok(Chart {
            title: plot.title.clone(),
            sheet: plot.sheet.clone(),
            metric,
            unit: metric.unit(),
            cap: config.cap,
            from_height: config.from_height,
            series,
            moving_average,
            counts,
            skipped,
        })
    }
}
