//!
//! The checkpoint file reader tests.
//!

use std::path::Path;
use std::path::PathBuf;

use super::error::DecodeError;
use super::error::Error as InputError;
use crate::opcode::Opcode;
use crate::snapshot::counter::Counter;
use crate::snapshot::Snapshot;

fn records(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|index| format!(r#"{{"Num":{index},"Time":{}}}"#, index * 100))
        .collect();
    format!("[{}]", records.join(","))
}

fn directory(name: &str) -> PathBuf {
    let directory = std::env::temp_dir().join(format!(
        "opcode-analyzer-{name}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(directory.as_path());
    std::fs::create_dir_all(directory.as_path()).expect("Always valid");
    directory
}

#[test]
fn ok_decode() {
    let counters = super::decode(records(256).as_bytes()).expect("Always valid");
    assert_eq!(counters[0], Counter::new(0, 0));
    assert_eq!(
        counters[Opcode::SLOAD.0 as usize],
        Counter::new(0x54, 0x54 * 100)
    );
    assert_eq!(counters[255], Counter::new(255, 25_500));
}

#[test]
fn ok_height() {
    assert_eq!(super::height(Path::new("metrics_to_4370000")).ok(), Some(4_370_000));
    assert_eq!(
        super::height(Path::new("/data/metrics_to_100_run2.json")).ok(),
        Some(100)
    );
    assert_eq!(super::height(Path::new("metrics_to_7.json")).ok(), Some(7));
}

#[test]
fn ok_read_and_resolve() {
    let directory = directory("resolve");
    std::fs::write(directory.join("metrics_to_200"), records(256)).expect("Always valid");
    std::fs::write(directory.join("metrics_to_100"), records(256)).expect("Always valid");
    std::fs::write(directory.join("notes.txt"), "unrelated").expect("Always valid");

    let paths = super::resolve(directory.as_path()).expect("Always valid");
    assert_eq!(
        paths,
        vec![directory.join("metrics_to_100"), directory.join("metrics_to_200")]
    );

    let snapshot = Snapshot::try_from(paths[1].as_path()).expect("Always valid");
    assert_eq!(snapshot.height(), 200);
    assert_eq!(snapshot.counter(Opcode::ADD), Counter::new(1, 100));

    let _ = std::fs::remove_dir_all(directory);
}

#[test]
fn error_counter_count_short() {
    assert!(matches!(
        super::decode(records(255).as_bytes()),
        Err(DecodeError::CounterCount {
            expected: 256,
            found: 255,
        })
    ));
}

#[test]
fn error_counter_count_long() {
    assert!(matches!(
        super::decode(records(257).as_bytes()),
        Err(DecodeError::CounterCount { found: 257, .. })
    ));
}

#[test]
fn error_malformed() {
    assert!(matches!(
        super::decode(br#"[{"Num":"many"}]"#),
        Err(DecodeError::Parsing(_))
    ));
    assert!(matches!(
        super::decode(b"not json"),
        Err(DecodeError::Parsing(_))
    ));
}

#[test]
fn error_file_name() {
    for name in ["metrics_from_100", "metrics_to_", "metrics_to_abc", "counters.json"] {
        assert!(
            matches!(super::height(Path::new(name)), Err(InputError::FileName { .. })),
            "{name}"
        );
    }
}

#[test]
fn error_empty_file() {
    let directory = directory("empty");
    let path = directory.join("metrics_to_300");
    std::fs::write(path.as_path(), "\n").expect("Always valid");
    assert!(matches!(
        Snapshot::try_from(path.as_path()),
        Err(InputError::EmptyFile { .. })
    ));
    let _ = std::fs::remove_dir_all(directory);
}
