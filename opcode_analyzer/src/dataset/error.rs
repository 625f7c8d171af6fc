//!
//! The dataset lookup error.
//!

use serde::Serialize;

use crate::opcode::Opcode;

///
/// The dataset lookup error.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum Error {
    /// No snapshots were loaded.
    #[error("The dataset is empty")]
    Empty,
    /// No snapshot was taken at the requested height.
    #[error("No checkpoint at height {height}")]
    MissingHeight {
        /// The requested height.
        height: u64,
    },
    /// The interval bounds are not in ascending order.
    #[error("Checkpoint interval {earlier}..{later} is not ascending")]
    UnorderedHeights {
        /// The lower bound.
        earlier: u64,
        /// The upper bound.
        later: u64,
    },
    /// A counter difference does not fit into a signed 64-bit integer.
    #[error("Counter difference of {opcode} at height {height} overflows")]
    Overflow {
        /// The height of the later checkpoint.
        height: u64,
        /// The opcode.
        opcode: Opcode,
    },
}
