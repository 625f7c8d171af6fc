//!
//! Protocol upgrades that changed the fee schedule.
//!

use serde::Serialize;

use crate::fee_schedule::gas_table::GasTable;

///
/// A protocol upgrade that changed the fee schedule.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Fork {
    /// The baseline. Frontier blocks are resolved with it too, as the statically
    /// resolvable costs did not change at Homestead.
    Homestead,
    /// EIP-150, the gas repricing.
    TangerineWhistle,
    /// EIP-158, the state clearing.
    SpuriousDragon,
    /// Byzantium.
    Byzantium,
    /// Constantinople, with the shift opcodes.
    Constantinople,
}

impl Fork {
    ///
    /// Returns the fee table introduced by the fork.
    ///
    pub fn gas_table(&self) -> GasTable {
        match self {
            Self::Homestead => GasTable::HOMESTEAD,
            Self::TangerineWhistle => GasTable::TANGERINE_WHISTLE,
            Self::SpuriousDragon => GasTable::SPURIOUS_DRAGON,
            Self::Byzantium => GasTable::BYZANTIUM,
            Self::Constantinople => GasTable::CONSTANTINOPLE,
        }
    }

    ///
    /// Returns the Ethereum mainnet activation height.
    ///
    pub fn mainnet_height(&self) -> u64 {
        match self {
            Self::Homestead => 0,
            Self::TangerineWhistle => 2_463_000,
            Self::SpuriousDragon => 2_675_000,
            Self::Byzantium => 4_370_000,
            Self::Constantinople => 7_280_000,
        }
    }
}

impl std::fmt::Display for Fork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Homestead => write!(f, "Homestead"),
            Self::TangerineWhistle => write!(f, "EIP150"),
            Self::SpuriousDragon => write!(f, "EIP158"),
            Self::Byzantium => write!(f, "Byzantium"),
            Self::Constantinople => write!(f, "Constantinople"),
        }
    }
}
