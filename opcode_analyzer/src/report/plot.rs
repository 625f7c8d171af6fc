//!
//! The layout of one chart.
//!

use crate::opcode::group::Group;
use crate::opcode::Opcode;

///
/// The layout of one chart: the charted group and how its series are shaped.
///
/// The same group may be charted several times, e.g. once uncapped and once
/// with a cap, as long as the worksheet names differ.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// The charted group.
    pub group: Group,
    /// The chart title.
    pub title: String,
    /// The worksheet name.
    pub sheet: String,
    /// The upper bound the values are clamped to.
    pub cap: Option<f64>,
    /// The value one of the series points must reach for the series to be charted.
    pub peak_filter: Option<f64>,
    /// The lowest height the series start at. The larger of this and the global setting applies.
    pub from_height: u64,
}

impl Plot {
    /// The height the capped all-opcode chart starts at.
    pub const ALL_CAPPED_FROM_HEIGHT: u64 = 3_220_000;

    /// The cap of the second pushes, duplications and swaps chart.
    pub const STACK_OPERATIONS_LOW_CAP: f64 = 100.0;

    ///
    /// The charts drawn by default.
    ///
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::from(Group::All).uncapped(),
            Self::from(Group::All)
                .renamed("capped", "AllCapped")
                .starting_at(Self::ALL_CAPPED_FROM_HEIGHT),
            Self::from(Group::Arithmetic).uncapped(),
            Self::from(Group::Arithmetic).renamed("capped", "ArithmeticCapped"),
            Self::from(Group::Comparison),
            Self::from(Group::Sha3),
            Self::from(Group::ContextPart1),
            Self::from(Group::ContextPart2),
            Self::from(Group::BlockOperations),
            Self::from(Group::Blockhash),
            Self::from(Group::StoragePart1),
            Self::from(Group::StackOperations),
            Self::from(Group::StackOperations)
                .with_cap(Self::STACK_OPERATIONS_LOW_CAP)
                .renamed("capped at 100", "StackCapped"),
            Self::from(Group::Logging),
            Self::from(Group::Single(Opcode::SLOAD)),
            Self::from(Group::Single(Opcode::BALANCE)),
        ]
    }

    ///
    /// Removes the cap and the peak filter.
    ///
    pub fn uncapped(mut self) -> Self {
        self.cap = None;
        self.peak_filter = None;
        self
    }

    ///
    /// Sets the cap.
    ///
    pub fn with_cap(mut self, cap: f64) -> Self {
        self.cap = Some(cap);
        self
    }

    ///
    /// Sets the peak filter.
    ///
    pub fn with_peak_filter(mut self, peak: f64) -> Self {
        self.peak_filter = Some(peak);
        self
    }

    ///
    /// Sets the lowest height the series start at.
    ///
    pub fn starting_at(mut self, height: u64) -> Self {
        self.from_height = height;
        self
    }

    ///
    /// Appends `suffix` to the title and replaces the worksheet name.
    ///
    pub fn renamed(mut self, suffix: &str, sheet: &str) -> Self {
        self.title = format!("{} - {suffix}", self.title);
        self.sheet = sheet.to_owned();
        self
    }
}

impl From<Group> for Plot {
    fn from(group: Group) -> Self {
        Self {
            group,
            title: group.title(),
            sheet: group.sheet_name(),
            cap: group.cap(),
            peak_filter: group.peak_filter(),
            from_height: 0,
        }
    }
}
