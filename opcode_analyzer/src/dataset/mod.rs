//!
//! The height-ordered snapshot collection.
//!

pub mod delta;
pub mod error;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::opcode::Opcode;
use crate::snapshot::Snapshot;

use self::delta::Delta;
use self::error::Error;

///
/// The height-ordered snapshot collection.
///
/// Built once during ingestion and only read afterwards.
///
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    /// The snapshots, keyed by height.
    snapshots: BTreeMap<u64, Snapshot>,
}

impl Dataset {
    ///
    /// Inserts a snapshot. A snapshot at the same height is replaced and returned.
    ///
    pub fn insert(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        self.snapshots.insert(snapshot.height(), snapshot)
    }

    ///
    /// Returns the snapshot taken at `height`.
    ///
    pub fn get(&self, height: u64) -> Result<&Snapshot, Error> {
        self.snapshots
            .get(&height)
            .ok_or(Error::MissingHeight { height })
    }

    ///
    /// Whether a snapshot was taken at `height`.
    ///
    pub fn contains(&self, height: u64) -> bool {
        self.snapshots.contains_key(&height)
    }

    ///
    /// The checkpoint heights in ascending order.
    ///
    pub fn heights(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.snapshots.keys().copied()
    }

    ///
    /// The snapshots in ascending height order.
    ///
    pub fn snapshots(&self) -> impl DoubleEndedIterator<Item = &Snapshot> + '_ {
        self.snapshots.values()
    }

    ///
    /// Consecutive checkpoint pairs at or above `from_height`, in ascending order.
    ///
    /// The first checkpoint of the range has no predecessor and only opens the walk.
    ///
    pub fn intervals(&self, from_height: u64) -> impl Iterator<Item = (u64, u64)> + '_ {
        let earlier = self.snapshots.range(from_height..).map(|(height, _)| *height);
        let later = earlier.clone().skip(1);
        earlier.zip(later)
    }

    /// The number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The lowest checkpoint height.
    pub fn first_height(&self) -> Option<u64> {
        self.snapshots.keys().next().copied()
    }

    /// The highest checkpoint height.
    pub fn last_height(&self) -> Option<u64> {
        self.snapshots.keys().next_back().copied()
    }

    ///
    /// Computes the counter difference of `opcode` between two checkpoints.
    ///
    /// With no `earlier` height the raw counter at `later` is returned, as the
    /// interval then starts with the metered process.
    ///
    pub fn delta(&self, earlier: Option<u64>, later: u64, opcode: Opcode) -> Result<Delta, Error> {
        let later_snapshot = self.get(later)?;
        let earlier = match earlier {
            Some(earlier) => earlier,
            None => {
                return Delta::since_start(later, opcode, later_snapshot.counter(opcode))
            }
        };
        if earlier >= later {
            return Err(Error::UnorderedHeights { earlier, later });
        }
        let earlier_snapshot = self.get(earlier)?;
        Delta::between(
            later,
            opcode,
            earlier_snapshot.counter(opcode),
            later_snapshot.counter(opcode),
        )
    }
}

impl FromIterator<Snapshot> for Dataset {
    fn from_iter<T: IntoIterator<Item = Snapshot>>(iter: T) -> Self {
        let mut dataset = Self::default();
        dataset.extend(iter);
        dataset
    }
}

impl Extend<Snapshot> for Dataset {
    fn extend<T: IntoIterator<Item = Snapshot>>(&mut self, iter: T) {
        for snapshot in iter {
            self.insert(snapshot);
        }
    }
}
