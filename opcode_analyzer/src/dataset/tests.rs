//!
//! The dataset and delta tests.
//!

use super::error::Error;
use super::Dataset;
use crate::opcode::Opcode;
use crate::snapshot::counter::Counter;
use crate::snapshot::Snapshot;

fn snapshot(height: u64, count: u64, time_ns: u64) -> Snapshot {
    Snapshot::empty(height)
        .with_counter(Opcode::SLOAD, Counter::new(count, time_ns))
        .with_counter(Opcode::ADD, Counter::new(count * 10, time_ns * 2))
}

fn dataset() -> Dataset {
    [
        snapshot(300, 9_000, 90_000),
        snapshot(100, 1_000, 10_000),
        snapshot(200, 4_000, 50_000),
    ]
    .into_iter()
    .collect()
}

#[test]
fn ok_ordered() {
    let dataset = dataset();
    assert_eq!(dataset.heights().collect::<Vec<u64>>(), vec![100, 200, 300]);
    assert_eq!(dataset.first_height(), Some(100));
    assert_eq!(dataset.last_height(), Some(300));
    assert_eq!(dataset.len(), 3);
}

#[test]
fn ok_delta_correctness() {
    let dataset = dataset();
    for opcode in Opcode::all() {
        let earlier = dataset.get(100).expect("Always valid").counter(opcode);
        let later = dataset.get(300).expect("Always valid").counter(opcode);
        let delta = dataset
            .delta(Some(100), 300, opcode)
            .expect("Always valid");
        assert_eq!(delta.height, 300);
        assert_eq!(delta.count, (later.count - earlier.count) as i64);
        assert_eq!(delta.time_ns, (later.time_ns - earlier.time_ns) as i64);
        assert!(!delta.is_restart());
    }
}

#[test]
fn ok_delta_since_start() {
    let dataset = dataset();
    let delta = dataset
        .delta(None, 200, Opcode::SLOAD)
        .expect("Always valid");
    assert_eq!(delta.count, 4_000);
    assert_eq!(delta.time_ns, 50_000);
    assert!(!delta.is_restart());
}

#[test]
fn ok_delta_restart_flagged() {
    let mut dataset = dataset();
    dataset.insert(snapshot(400, 10, 100));
    let delta = dataset
        .delta(Some(300), 400, Opcode::SLOAD)
        .expect("Always valid");
    assert_eq!(delta.count, 10 - 9_000);
    assert_eq!(delta.time_ns, 100 - 90_000);
    assert!(delta.is_restart());
}

#[test]
fn ok_insert_last_write_wins() {
    let mut dataset = dataset();
    let replaced = dataset.insert(snapshot(200, 5_000, 60_000));
    assert_eq!(replaced, Some(snapshot(200, 4_000, 50_000)));
    assert_eq!(dataset.len(), 3);
    assert_eq!(
        dataset
            .get(200)
            .expect("Always valid")
            .counter(Opcode::SLOAD),
        Counter::new(5_000, 60_000)
    );
}

#[test]
fn ok_intervals() {
    let dataset = dataset();
    assert_eq!(
        dataset.intervals(0).collect::<Vec<(u64, u64)>>(),
        vec![(100, 200), (200, 300)]
    );
    assert_eq!(
        dataset.intervals(150).collect::<Vec<(u64, u64)>>(),
        vec![(200, 300)]
    );
    assert_eq!(dataset.intervals(300).count(), 0);
}

#[test]
fn error_missing_later() {
    let dataset = dataset();
    assert_eq!(
        dataset.delta(Some(100), 250, Opcode::SLOAD),
        Err(Error::MissingHeight { height: 250 })
    );
}

#[test]
fn error_missing_earlier() {
    let dataset = dataset();
    assert_eq!(
        dataset.delta(Some(150), 300, Opcode::SLOAD),
        Err(Error::MissingHeight { height: 150 })
    );
}

#[test]
fn error_unordered() {
    let dataset = dataset();
    assert_eq!(
        dataset.delta(Some(300), 200, Opcode::SLOAD),
        Err(Error::UnorderedHeights {
            earlier: 300,
            later: 200,
        })
    );
}

#[test]
fn error_overflow() {
    let dataset: Dataset = [
        Snapshot::empty(100).with_counter(Opcode::SLOAD, Counter::new(0, 0)),
        Snapshot::empty(200).with_counter(Opcode::SLOAD, Counter::new(u64::MAX, 10)),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        dataset.delta(Some(100), 200, Opcode::SLOAD),
        Err(Error::Overflow {
            height: 200,
            opcode: Opcode::SLOAD,
        })
    );
    assert_eq!(
        dataset.delta(None, 200, Opcode::SLOAD),
        Err(Error::Overflow {
            height: 200,
            opcode: Opcode::SLOAD,
        })
    );
    assert!(dataset.delta(Some(100), 200, Opcode::ADD).is_ok());
}

#[test]
fn ok_delta_at_signed_bounds() {
    let dataset: Dataset = [
        Snapshot::empty(100).with_counter(Opcode::SLOAD, Counter::new(0, i64::MAX as u64)),
        Snapshot::empty(200).with_counter(Opcode::SLOAD, Counter::new(i64::MAX as u64, 0)),
    ]
    .into_iter()
    .collect();
    let delta = dataset
        .delta(Some(100), 200, Opcode::SLOAD)
        .expect("Always valid");
    assert_eq!(delta.count, i64::MAX);
    assert_eq!(delta.time_ns, -i64::MAX);
    assert!(delta.is_restart());
}
