//!
//! The per-interval counter difference.
//!

use crate::opcode::Opcode;
use crate::snapshot::counter::Counter;

use super::error::Error;

///
/// The difference between two cumulative counters of one opcode.
///
/// Both components are signed: a negative count means the metered process
/// restarted inside the interval, and is kept as is for the caller to handle.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    /// The height of the later snapshot.
    pub height: u64,
    /// The opcode.
    pub opcode: Opcode,
    /// The number of invocations inside the interval.
    pub count: i64,
    /// The execution time inside the interval, in nanoseconds.
    pub time_ns: i64,
}

impl Delta {
    ///
    /// Computes `later - earlier` component-wise.
    ///
    /// # Errors
    /// `Overflow` if a difference does not fit into `i64`.
    ///
    pub fn between(
        height: u64,
        opcode: Opcode,
        earlier: Counter,
        later: Counter,
    ) -> Result<Self, Error> {
        let overflow = || Error::Overflow { height, opcode };
        Ok(Self {
            height,
            opcode,
            count: difference(later.count, earlier.count).ok_or_else(overflow)?,
            time_ns: difference(later.time_ns, earlier.time_ns).ok_or_else(overflow)?,
        })
    }

    ///
    /// The delta from zero, for the first interval of a run.
    ///
    pub fn since_start(height: u64, opcode: Opcode, counter: Counter) -> Result<Self, Error> {
        Self::between(height, opcode, Counter::default(), counter)
    }

    ///
    /// Whether the counters went backwards, which means the process restarted.
    ///
    pub fn is_restart(&self) -> bool {
        self.count < 0 || self.time_ns < 0
    }
}

fn difference(later: u64, earlier: u64) -> Option<i64> {
    i64::try_from(i128::from(later) - i128::from(earlier)).ok()
}
