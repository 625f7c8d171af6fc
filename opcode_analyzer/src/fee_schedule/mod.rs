//!
//! The versioned fee schedule resolver.
//!

pub mod cost;
pub mod error;
pub mod fork;
pub mod gas_table;
pub mod step;


use crate::opcode::Opcode;

use self::cost::Cost;
use self::error::Error;
use self::fork::Fork;
use self::gas_table::GasTable;
use self::step::Step;
use self::step::JUMPDEST_GAS;

///
/// A fee table that takes effect at a block height.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// The first block the table applies to.
    pub height: u64,
    /// The fork introducing the table.
    pub fork: Fork,
    /// The costs of the repriced opcodes.
    pub table: GasTable,
}

impl Activation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(height: u64, fork: Fork) -> Self {
        Self {
            height,
            fork,
            table: fork.gas_table(),
        }
    }
}

///
/// The versioned fee schedule resolver.
///
/// Resolution is a pure function of the opcode and the block height: the
/// activation in effect is looked up in an ordered table, then the opcode is
/// priced either by its fixed step class or by the activation's fee table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Activations ordered by strictly increasing height.
    activations: Vec<Activation>,
}

impl FeeSchedule {
    ///
    /// Creates a schedule from activations ordered by strictly increasing height.
    ///
    /// Heights below the first activation are resolved with the first activation.
    ///
    pub fn new(activations: Vec<Activation>) -> Result<Self, Error> {
        if activations.is_empty() {
            return Err(Error::Empty);
        }
        for pair in activations.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(Error::UnorderedActivations {
                    previous: pair[0].height,
                    next: pair[1].height,
                });
            }
        }
        Ok(Self { activations })
    }

    ///
    /// The Ethereum mainnet schedule.
    ///
    pub fn mainnet() -> Self {
        let activations = [
            Fork::Homestead,
            Fork::TangerineWhistle,
            Fork::SpuriousDragon,
            Fork::Byzantium,
            Fork::Constantinople,
        ]
        .into_iter()
        .map(|fork| Activation::new(fork.mainnet_height(), fork))
        .collect();
        Self { activations }
    }

    ///
    /// The activations, ordered by height.
    ///
    pub fn activations(&self) -> &[Activation] {
        self.activations.as_slice()
    }

    ///
    /// Returns the activation in effect at `height`.
    ///
    pub fn activation(&self, height: u64) -> &Activation {
        let index = self
            .activations
            .partition_point(|activation| activation.height <= height);
        &self.activations[index.saturating_sub(1)]
    }

    ///
    /// Returns the cost of `opcode` in effect at `height`.
    ///
    pub fn cost(&self, opcode: Opcode, height: u64) -> Cost {
        if let Some(step) = Step::of(opcode) {
            return Cost::Static(step.gas());
        }

        let table = &self.activation(height).table;
        match opcode {
            Opcode::STOP => Cost::Static(0),
            Opcode::JUMPDEST => Cost::Static(JUMPDEST_GAS),

            Opcode::SLOAD => Cost::Static(table.sload),
            Opcode::BALANCE => Cost::Static(table.balance),
            Opcode::EXTCODESIZE => Cost::Static(table.ext_code_size),
            Opcode::EXTCODECOPY => Cost::Static(table.ext_code_copy),
            Opcode::EXTCODEHASH => Cost::Static(table.ext_code_hash),
            Opcode::CALL => Cost::Static(table.calls),
            Opcode::SHL | Opcode::SHR | Opcode::SAR => Cost::Static(table.shift),
            Opcode::RETURNDATASIZE => Cost::Static(table.return_data_size),

            Opcode::EXP
            | Opcode::SHA3
            | Opcode::CALLDATACOPY
            | Opcode::CODECOPY
            | Opcode::RETURNDATACOPY
            | Opcode::MLOAD
            | Opcode::MSTORE
            | Opcode::MSTORE8
            | Opcode::SSTORE
            | Opcode::CREATE
            | Opcode::CALLCODE
            | Opcode::RETURN
            | Opcode::DELEGATECALL
            | Opcode::CREATE2
            | Opcode::STATICCALL
            | Opcode::REVERT
            | Opcode::SELFDESTRUCT => Cost::Dynamic,
            opcode if opcode.is_log() => Cost::Dynamic,

            _ => Cost::Undefined,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::mainnet()
    }
}
