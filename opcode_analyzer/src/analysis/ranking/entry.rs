//!
//! The window ranking entries.
//!

use serde::Serialize;

use crate::opcode::Opcode;

///
/// A ranked opcode.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// The opcode.
    pub opcode: Opcode,
    /// The opcode label.
    pub name: String,
    /// The metric value over the window.
    pub value: f64,
    /// The number of invocations inside the window.
    pub count: i64,
}

///
/// The reason an opcode is left out of the ranking.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exclusion {
    /// Executed less than once per block in the window.
    Infrequent,
    /// The cost is not static, so gas-based values are meaningless.
    NotStaticizable,
    /// The counters went backwards inside the window.
    Restart,
    /// The counter difference does not fit into a signed 64-bit integer.
    Overflow,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infrequent => write!(f, "less than one invocation per block"),
            Self::NotStaticizable => write!(f, "dynamic cost"),
            Self::Restart => write!(f, "counter restart"),
            Self::Overflow => write!(f, "counter overflow"),
        }
    }
}
