//!
//! The checkpoint file reader.
//!

pub mod error;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use regex::Regex;

use crate::opcode::OPCODE_COUNT;
use crate::snapshot::counter::Counter;
use crate::snapshot::Counters;
use crate::snapshot::Snapshot;

use self::error::DecodeError;
use self::error::Error as InputError;

/// The checkpoint file name prefix.
pub const FILE_NAME_PREFIX: &str = "metrics_to_";

lazy_static::lazy_static! {
    ///
    /// The checkpoint file name pattern, capturing the height.
    ///
    static ref FILE_NAME: Regex = {
        Regex::new(r"^metrics_to_(\d+)(?:[_.].*)?$").expect("Always valid")
    };
}

///
/// Decodes a JSON array of exactly one counter record per opcode.
///
pub fn decode(bytes: &[u8]) -> Result<Counters, DecodeError> {
    let records: Vec<Counter> = serde_json::from_slice(bytes)?;
    let found = records.len();
    records
        .into_boxed_slice()
        .try_into()
        .map_err(|_| DecodeError::CounterCount {
            expected: OPCODE_COUNT,
            found,
        })
}

///
/// Parses the checkpoint height from a `metrics_to_<height>[_...]` file name.
///
pub fn height(path: &Path) -> Result<u64, InputError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| FILE_NAME.captures(name))
        .and_then(|captures| captures.get(1))
        .and_then(|height| height.as_str().parse::<u64>().ok())
        .ok_or_else(|| InputError::FileName {
            path: path.to_path_buf(),
        })
}

///
/// Lists the checkpoint files in `directory`, in path order.
///
pub fn resolve(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = format!("{}/{FILE_NAME_PREFIX}*", directory.to_string_lossy());
    let mut paths: Vec<PathBuf> = glob::glob(pattern.as_str())?
        .filter_map(Result::ok)
        .filter(|path| path.is_file() && height(path).is_ok())
        .collect();
    paths.sort();
    Ok(paths)
}

impl TryFrom<&Path> for Snapshot {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let height = height(path)?;
        let bytes = std::fs::read(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let counters = decode(bytes.as_slice()).map_err(|error| InputError::Decoding {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Snapshot::new(height, counters))
    }
}
