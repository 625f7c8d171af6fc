//!
//! The window ranking tests.
//!

use super::config::Config;
use super::entry::Exclusion;
use super::Ranking;
use crate::dataset::error::Error as DatasetError;
use crate::dataset::Dataset;
use crate::fee_schedule::FeeSchedule;
use crate::metric::Metric;
use crate::opcode::Opcode;
use crate::snapshot::counter::Counter;
use crate::snapshot::Snapshot;

fn dataset() -> Dataset {
    let earlier = Snapshot::empty(100)
        .with_counter(Opcode::ADD, Counter::new(1_000, 1_000))
        .with_counter(Opcode::DIV, Counter::new(2_000, 2_000));
    let later = Snapshot::empty(200)
        .with_counter(Opcode::ADD, Counter::new(2_000, 7_000))
        .with_counter(Opcode::MUL, Counter::new(1_000, 10_000))
        .with_counter(Opcode::SUB, Counter::new(1_000, 9_000))
        .with_counter(Opcode::DIV, Counter::new(1_000, 1_000))
        .with_counter(Opcode::LT, Counter::new(100, 300))
        .with_counter(Opcode::SLOAD, Counter::new(50, 5_000))
        .with_counter(Opcode::SSTORE, Counter::new(1_000, 90_000));
    [earlier, later].into_iter().collect()
}

fn names(ranking: &Ranking) -> Vec<&str> {
    ranking.labels().into_iter().map(|(name, _)| name).collect()
}

#[test]
fn ok_sorted_with_ties() {
    let ranking = Ranking::build(&dataset(), &FeeSchedule::mainnet(), &Config::default())
        .expect("Always valid");
    assert_eq!(ranking.start, 100);
    assert_eq!(ranking.end, 200);
    assert_eq!(names(&ranking), vec!["SUB", "ADD", "MUL", "LT"]);
    assert_eq!(
        ranking
            .labels()
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<f64>>(),
        vec![3.0, 2.0, 2.0, 1.0]
    );
}

#[test]
fn ok_exclusions() {
    let ranking = Ranking::build(&dataset(), &FeeSchedule::mainnet(), &Config::default())
        .expect("Always valid");
    let reason = |opcode: Opcode| {
        ranking
            .excluded
            .iter()
            .find(|(excluded, _)| *excluded == opcode)
            .map(|(_, reason)| *reason)
    };
    assert_eq!(reason(Opcode::SLOAD), Some(Exclusion::Infrequent));
    assert_eq!(reason(Opcode::SSTORE), Some(Exclusion::NotStaticizable));
    assert_eq!(reason(Opcode::DIV), Some(Exclusion::Restart));
    assert_eq!(reason(Opcode::LT), None);
    assert_eq!(reason(Opcode(0x0c)), Some(Exclusion::Infrequent));
    assert_eq!(ranking.entries.len() + ranking.excluded.len(), 256);
}

#[test]
fn ok_cost_agnostic_metric() {
    let config = Config {
        metric: Metric::Count,
        ..Config::default()
    };
    let ranking =
        Ranking::build(&dataset(), &FeeSchedule::mainnet(), &config).expect("Always valid");
    assert_eq!(names(&ranking), vec!["ADD", "MUL", "SUB", "SSTORE", "LT"]);
}

#[test]
fn ok_top() {
    let config = Config {
        top: Some(2),
        ..Config::default()
    };
    let ranking =
        Ranking::build(&dataset(), &FeeSchedule::mainnet(), &config).expect("Always valid");
    assert_eq!(names(&ranking), vec!["SUB", "ADD"]);
}

#[test]
fn ok_deterministic() {
    let dataset = dataset();
    let schedule = FeeSchedule::mainnet();
    let first = Ranking::build(&dataset, &schedule, &Config::default()).expect("Always valid");
    let second = Ranking::build(&dataset, &schedule, &Config::default()).expect("Always valid");
    assert_eq!(first, second);
}

#[test]
fn ok_write_all() {
    let ranking = Ranking::build(&dataset(), &FeeSchedule::mainnet(), &Config::default())
        .expect("Always valid");
    let mut buffer = Vec::new();
    ranking.write_all(&mut buffer).expect("Always valid");
    let text = String::from_utf8(buffer).expect("Always valid");
    assert!(text.contains("SUB"));
    assert!(text.contains("100..200"));
    assert_eq!(text.lines().count(), 2 + ranking.entries.len());
}

#[test]
fn error_empty() {
    assert_eq!(
        Ranking::build(
            &Dataset::default(),
            &FeeSchedule::mainnet(),
            &Config::default()
        ),
        Err(DatasetError::Empty)
    );
}

#[test]
fn error_missing_window_start() {
    let config = Config {
        start: Some(150),
        ..Config::default()
    };
    assert_eq!(
        Ranking::build(&dataset(), &FeeSchedule::mainnet(), &config),
        Err(DatasetError::MissingHeight { height: 150 })
    );
}

#[test]
fn ok_overflow_excluded() {
    let dataset: Dataset = [
        Snapshot::empty(100).with_counter(Opcode::ADD, Counter::new(1_000, 1_000)),
        Snapshot::empty(200)
            .with_counter(Opcode::ADD, Counter::new(2_000, 7_000))
            .with_counter(Opcode::MUL, Counter::new(u64::MAX, 1_000)),
    ]
    .into_iter()
    .collect();
    let ranking = Ranking::build(&dataset, &FeeSchedule::mainnet(), &Config::default())
        .expect("Always valid");
    assert_eq!(names(&ranking), vec!["ADD"]);
    assert!(ranking
        .excluded
        .contains(&(Opcode::MUL, Exclusion::Overflow)));
}
