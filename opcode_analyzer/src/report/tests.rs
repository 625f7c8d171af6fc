//!
//! The report assembly tests.
//!

use super::plot::Plot;
use super::settings::Settings;
use super::Report;
use crate::analysis::ranking::config::Config as RankingConfig;
use crate::analysis::series::config::Config as SeriesConfig;
use crate::dataset::error::Error as DatasetError;
use crate::dataset::Dataset;
use crate::fee_schedule::fork::Fork;
use crate::fee_schedule::FeeSchedule;
use crate::metric::Metric;
use crate::opcode::group::Group;
use crate::opcode::Opcode;
use crate::snapshot::counter::Counter;
use crate::snapshot::Snapshot;

fn dataset() -> Dataset {
    [
        (2_400_000, 0),
        (2_463_000, 1),
        (2_500_000, 2),
        (2_600_000, 3),
    ]
    .into_iter()
    .map(|(height, step)| {
        Snapshot::empty(height)
            .with_counter(Opcode::SLOAD, Counter::new(step * 1_000, step * 200_000))
            .with_counter(Opcode::MLOAD, Counter::new(step * 1_000, step * 10_000))
            .with_counter(Opcode::POP, Counter::new(step * 100, step * 200))
    })
    .collect()
}

#[test]
fn ok_default_plots() {
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &Settings::default()).expect("Always valid");
    assert_eq!(report.charts.len(), Plot::defaults().len());
    assert_eq!(report.metadata.checkpoints, 4);
    assert_eq!(report.metadata.first_height, Some(2_400_000));
    assert_eq!(report.metadata.last_height, Some(2_600_000));
    assert_eq!(report.metadata.forks.len(), 1);
    assert_eq!(report.metadata.forks[0].fork, Fork::TangerineWhistle);
}

#[test]
fn ok_single_opcode_chart() {
    let settings = Settings {
        plots: vec![Plot::from(Group::Single(Opcode::SLOAD))],
        moving_average_period: 2,
        ..Settings::default()
    };
    let report = Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    let chart = &report.charts[0];
    assert_eq!(chart.sheet, "SLOAD");
    assert_eq!(chart.metric, Metric::TimePerGas);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(
        chart.series[0]
            .points
            .iter()
            .map(|point| (point.height, point.value))
            .collect::<Vec<(u64, f64)>>(),
        vec![(2_463_000, 1.0), (2_500_000, 1.0), (2_600_000, 1.0)]
    );
    assert_eq!(
        chart.counts,
        Some(vec![(2_463_000, 1_000), (2_500_000, 1_000), (2_600_000, 1_000)])
    );
    assert!(chart.moving_average.is_some());
}

#[test]
fn ok_dynamic_members_skipped() {
    let settings = Settings {
        plots: vec![Plot::from(Group::StoragePart1)],
        ..Settings::default()
    };
    let report = Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    let chart = &report.charts[0];
    assert_eq!(chart.skipped, vec![Opcode::MLOAD]);
    assert_eq!(
        chart
            .series
            .iter()
            .map(|series| series.opcode)
            .collect::<Vec<Opcode>>(),
        vec![Opcode::SLOAD]
    );
    assert_eq!(chart.counts, None);
}

#[test]
fn ok_peak_filter() {
    let settings = Settings {
        plots: vec![Plot::from(Group::All)],
        ..Settings::default()
    };
    let report = Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert!(report.charts[0].series.is_empty());
}

#[test]
fn ok_ranking() {
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &Settings::default()).expect("Always valid");
    let ranking = report.ranking.expect("Always valid");
    assert_eq!(ranking.start, 2_400_000);
    assert_eq!(ranking.end, 2_600_000);
}

#[test]
fn ok_no_ranking_for_single_checkpoint() {
    let dataset: Dataset = [Snapshot::empty(100)].into_iter().collect();
    let report =
        Report::build(&dataset, &FeeSchedule::mainnet(), &Settings::default()).expect("Always valid");
    assert!(report.ranking.is_none());
    assert!(report.metadata.forks.is_empty());
}

#[test]
fn ok_default_plot_sheet_names() {
    let plots = Plot::defaults();
    for plot in plots.iter() {
        assert!(!plot.sheet.is_empty());
        assert!(plot.sheet.len() <= 31, "{}", plot.sheet);
        assert_ne!(plot.sheet, "Metadata");
        assert_ne!(plot.sheet, "Ranking");
    }
    let mut sheets: Vec<&str> = plots.iter().map(|plot| plot.sheet.as_str()).collect();
    sheets.sort_unstable();
    sheets.dedup();
    assert_eq!(sheets.len(), plots.len());
}

#[test]
fn ok_default_plot_variants() {
    let plots = Plot::defaults();
    let plot = |sheet: &str| {
        plots
            .iter()
            .find(|plot| plot.sheet == sheet)
            .expect("Always valid")
    };

    assert_eq!(plot("All").cap, None);
    assert_eq!(plot("All").peak_filter, None);
    assert_eq!(plot("All").from_height, 0);
    assert_eq!(plot("AllCapped").cap, Some(100_000.0));
    assert_eq!(plot("AllCapped").peak_filter, Some(45_000.0));
    assert_eq!(plot("AllCapped").from_height, Plot::ALL_CAPPED_FROM_HEIGHT);

    assert_eq!(plot("Arithmetic").cap, None);
    assert_eq!(plot("ArithmeticCapped").cap, Some(250.0));
    assert_eq!(
        plot("ArithmeticCapped").title,
        "Time per gas (0x00 opcodes - Arithmetic) - capped"
    );

    assert_eq!(plot("Stack").cap, Some(600.0));
    assert_eq!(plot("StackCapped").cap, Some(100.0));
    assert_eq!(plot("StackCapped").group, Group::StackOperations);
}

#[test]
fn ok_plot_cap_and_start() {
    let settings = Settings {
        plots: vec![
            Plot::from(Group::Single(Opcode::SLOAD)),
            Plot::from(Group::Single(Opcode::SLOAD))
                .with_cap(0.5)
                .starting_at(2_463_000)
                .renamed("capped", "SLOADCapped"),
        ],
        ranking: None,
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    let points = |index: usize| {
        report.charts[index].series[0]
            .points
            .iter()
            .map(|point| (point.height, point.value))
            .collect::<Vec<(u64, f64)>>()
    };
    assert_eq!(
        points(0),
        vec![(2_463_000, 1.0), (2_500_000, 1.0), (2_600_000, 1.0)]
    );
    assert_eq!(points(1), vec![(2_500_000, 0.5), (2_600_000, 0.5)]);
    assert_eq!(report.charts[1].title, "Time per gas (SLOAD) - capped");
    assert_eq!(report.charts[1].cap, Some(0.5));
    assert_eq!(report.charts[1].from_height, 2_463_000);
}

#[test]
fn ok_plot_start_below_global_start() {
    let settings = Settings {
        plots: vec![Plot::from(Group::Single(Opcode::SLOAD)).starting_at(2_400_000)],
        series: SeriesConfig {
            from_height: 2_500_000,
            ..SeriesConfig::default()
        },
        ranking: None,
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(report.charts[0].from_height, 2_500_000);
    assert_eq!(report.charts[0].series[0].points.len(), 1);
}

#[test]
fn ok_uncapped_all_keeps_series() {
    let settings = Settings {
        plots: vec![Plot::from(Group::All).uncapped()],
        ranking: None,
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(
        report.charts[0]
            .series
            .iter()
            .map(|series| series.opcode)
            .collect::<Vec<Opcode>>(),
        vec![Opcode::MLOAD, Opcode::SLOAD]
    );
    assert!(report.charts[0].skipped.is_empty());
}

#[test]
fn ok_quiet_dynamic_members_skipped() {
    let dataset: Dataset = [(100, 0), (200, 1), (300, 2)]
        .into_iter()
        .map(|(height, step)| {
            Snapshot::empty(height)
                .with_counter(Opcode::MLOAD, Counter::new(step * 10, step * 100))
                .with_counter(Opcode::SLOAD, Counter::new(step * 1_000, step * 200_000))
        })
        .collect();
    let settings = Settings {
        plots: vec![Plot::from(Group::StoragePart1)],
        ranking: None,
        ..Settings::default()
    };
    let report =
        Report::build(&dataset, &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(report.charts[0].skipped, vec![Opcode::MLOAD]);
    assert_eq!(report.charts[0].series.len(), 1);
}

#[test]
fn ok_charts_built_despite_ranking_window_error() {
    let settings = Settings {
        plots: vec![Plot::from(Group::Single(Opcode::SLOAD))],
        ranking: Some(RankingConfig {
            start: Some(2_450_001),
            ..RankingConfig::default()
        }),
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(report.charts.len(), 1);
    assert_eq!(report.charts[0].series[0].points.len(), 3);
    assert!(report.ranking.is_none());
    assert_eq!(
        report.ranking_error,
        Some(DatasetError::MissingHeight { height: 2_450_001 })
    );
}

#[test]
fn ok_charts_built_despite_unordered_ranking_window() {
    let settings = Settings {
        plots: vec![Plot::from(Group::Single(Opcode::SLOAD))],
        ranking: Some(RankingConfig {
            start: Some(2_600_000),
            end: Some(2_463_000),
            ..RankingConfig::default()
        }),
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(report.charts[0].series.len(), 1);
    assert_eq!(
        report.ranking_error,
        Some(DatasetError::UnorderedHeights {
            earlier: 2_600_000,
            later: 2_463_000,
        })
    );
}

#[test]
fn ok_plot_peak_filter() {
    let settings = Settings {
        plots: vec![Plot::from(Group::All).uncapped().with_peak_filter(0.1)],
        ranking: None,
        ..Settings::default()
    };
    let report =
        Report::build(&dataset(), &FeeSchedule::mainnet(), &settings).expect("Always valid");
    assert_eq!(
        report.charts[0]
            .series
            .iter()
            .map(|series| series.opcode)
            .collect::<Vec<Opcode>>(),
        vec![Opcode::SLOAD]
    );
}
