//!
//! A checkpoint snapshot of the opcode counters.
//!

pub mod counter;


use crate::opcode::Opcode;
use crate::opcode::OPCODE_COUNT;

use self::counter::Counter;

///
/// The full counter table, indexed by the opcode identifier.
///
pub type Counters = Box<[Counter; OPCODE_COUNT]>;

///
/// A checkpoint snapshot of the opcode counters.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The block height the snapshot was taken at.
    height: u64,
    /// The counters.
    counters: Counters,
}

impl Snapshot {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(height: u64, counters: Counters) -> Self {
        Self { height, counters }
    }

    ///
    /// Creates a snapshot with every counter at zero.
    ///
    pub fn empty(height: u64) -> Self {
        Self::new(height, Box::new([Counter::default(); OPCODE_COUNT]))
    }

    ///
    /// Returns a copy of the snapshot with the counter of `opcode` replaced.
    ///
    pub fn with_counter(mut self, opcode: Opcode, counter: Counter) -> Self {
        self.counters[opcode.0 as usize] = counter;
        self
    }

    ///
    /// The block height the snapshot was taken at.
    ///
    pub fn height(&self) -> u64 {
        self.height
    }

    ///
    /// Returns the counter of `opcode`.
    ///
    pub fn counter(&self, opcode: Opcode) -> Counter {
        self.counters[opcode.0 as usize]
    }

    ///
    /// Iterates over all opcodes with their counters.
    ///
    pub fn counters(&self) -> impl Iterator<Item = (Opcode, Counter)> + '_ {
        self.counters
            .iter()
            .enumerate()
            .map(|(index, counter)| (Opcode(index as u8), *counter))
    }
}
