//!
//! A resolved opcode cost.
//!

///
/// A resolved opcode cost.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    /// The cost is fully determined by the opcode and the height.
    /// Zero is a legitimate value here, e.g. `STOP` or an opcode not introduced yet.
    Static(u64),
    /// The cost depends on the runtime context: memory expansion, data size,
    /// or the call target. Such opcodes must be left out of per-gas comparisons.
    Dynamic,
    /// The identifier is not a defined instruction.
    Undefined,
}

impl Cost {
    ///
    /// Returns the gas units if the cost is statically resolvable.
    ///
    pub fn gas(&self) -> Option<u64> {
        match self {
            Self::Static(gas) => Some(*gas),
            Self::Dynamic | Self::Undefined => None,
        }
    }

    ///
    /// Whether the cost is statically resolvable.
    ///
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(gas) => write!(f, "{gas}"),
            Self::Dynamic => write!(f, "dynamic"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
