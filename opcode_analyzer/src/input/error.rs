//!
//! The checkpoint file reading error.
//!

use std::path::PathBuf;

///
/// The counter table decoding error.
///
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The data is not a JSON array of counter records.
    #[error("{0}")]
    Parsing(#[from] serde_json::Error),
    /// The array does not hold one record per opcode.
    #[error("Expected {expected} counter records, found {found}")]
    CounterCount {
        /// The expected number of records.
        expected: usize,
        /// The number of records found.
        found: usize,
    },
}

///
/// The checkpoint file reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the checkpoint file.
    #[error("Reading checkpoint file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the checkpoint file.
        path: PathBuf,
    },
    /// Error decoding the checkpoint file.
    #[error("Decoding checkpoint file {path:?}: {error}")]
    Decoding {
        /// The underlying decoding error.
        error: DecodeError,
        /// The path to the checkpoint file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Checkpoint file {path:?} is empty")]
    EmptyFile {
        /// The path to the checkpoint file.
        path: PathBuf,
    },
    /// The file name does not carry a checkpoint height.
    #[error("Checkpoint file {path:?} is not named `metrics_to_<height>`")]
    FileName {
        /// The path to the checkpoint file.
        path: PathBuf,
    },
}
