//!
//! Fixed step classes of the fee schedule.
//!

use crate::opcode::Opcode;

///
/// The gas charged by `JUMPDEST`, which belongs to no step class.
///
pub const JUMPDEST_GAS: u64 = 1;

///
/// A fixed step class. Every opcode in a class costs the same at any height.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Environment getters and stack housekeeping.
    Quick,
    /// Simple arithmetic, comparisons and stack manipulation.
    Fastest,
    /// Multiplication and division.
    Fast,
    /// Modular arithmetic and unconditional jumps.
    Mid,
    /// Conditional jumps.
    Slow,
    /// Historical block hash lookups.
    Ext,
}

impl Step {
    ///
    /// The gas charged by every opcode of the class.
    ///
    pub fn gas(&self) -> u64 {
        match self {
            Self::Quick => 2,
            Self::Fastest => 3,
            Self::Fast => 5,
            Self::Mid => 8,
            Self::Slow => 10,
            Self::Ext => 20,
        }
    }

    ///
    /// Returns the class of the opcode, if its cost never changed across forks.
    ///
    /// The `PUSH`, `DUP` and `SWAP` families are resolved by range, regardless
    /// of the immediate width or the stack slot.
    ///
    pub fn of(opcode: Opcode) -> Option<Self> {
        if opcode.is_push() || opcode.is_dup() || opcode.is_swap() {
            return Some(Self::Fastest);
        }

        Some(match opcode {
            Opcode::ADD
            | Opcode::SUB
            | Opcode::LT
            | Opcode::GT
            | Opcode::SLT
            | Opcode::SGT
            | Opcode::EQ
            | Opcode::ISZERO
            | Opcode::AND
            | Opcode::OR
            | Opcode::XOR
            | Opcode::NOT
            | Opcode::BYTE
            | Opcode::CALLDATALOAD => Self::Fastest,
            Opcode::MUL
            | Opcode::DIV
            | Opcode::SDIV
            | Opcode::MOD
            | Opcode::SMOD
            | Opcode::SIGNEXTEND => Self::Fast,
            Opcode::ADDMOD | Opcode::MULMOD | Opcode::JUMP => Self::Mid,
            Opcode::ADDRESS
            | Opcode::ORIGIN
            | Opcode::CALLER
            | Opcode::CALLVALUE
            | Opcode::CALLDATASIZE
            | Opcode::CODESIZE
            | Opcode::GASPRICE
            | Opcode::COINBASE
            | Opcode::TIMESTAMP
            | Opcode::NUMBER
            | Opcode::DIFFICULTY
            | Opcode::GASLIMIT
            | Opcode::POP
            | Opcode::PC
            | Opcode::MSIZE
            | Opcode::GAS => Self::Quick,
            Opcode::BLOCKHASH => Self::Ext,
            Opcode::JUMPI => Self::Slow,
            _ => return None,
        })
    }
}
