//!
//! The EVM opcode identifier.
//!

pub mod group;


use serde::Deserialize;
use serde::Serialize;

///
/// The number of opcode slots in a counter table.
///
pub const OPCODE_COUNT: usize = 256;

///
/// The EVM opcode identifier.
///
/// Every byte value is a valid identifier, but only some of them are defined
/// as instructions. Undefined identifiers still own a counter slot.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opcode(pub u8);

impl Opcode {
    pub const STOP: Self = Self(0x00);
    pub const ADD: Self = Self(0x01);
    pub const MUL: Self = Self(0x02);
    pub const SUB: Self = Self(0x03);
    pub const DIV: Self = Self(0x04);
    pub const SDIV: Self = Self(0x05);
    pub const MOD: Self = Self(0x06);
    pub const SMOD: Self = Self(0x07);
    pub const ADDMOD: Self = Self(0x08);
    pub const MULMOD: Self = Self(0x09);
    pub const EXP: Self = Self(0x0a);
    pub const SIGNEXTEND: Self = Self(0x0b);

    pub const LT: Self = Self(0x10);
    pub const GT: Self = Self(0x11);
    pub const SLT: Self = Self(0x12);
    pub const SGT: Self = Self(0x13);
    pub const EQ: Self = Self(0x14);
    pub const ISZERO: Self = Self(0x15);
    pub const AND: Self = Self(0x16);
    pub const OR: Self = Self(0x17);
    pub const XOR: Self = Self(0x18);
    pub const NOT: Self = Self(0x19);
    pub const BYTE: Self = Self(0x1a);
    pub const SHL: Self = Self(0x1b);
    pub const SHR: Self = Self(0x1c);
    pub const SAR: Self = Self(0x1d);

    pub const SHA3: Self = Self(0x20);

    pub const ADDRESS: Self = Self(0x30);
    pub const BALANCE: Self = Self(0x31);
    pub const ORIGIN: Self = Self(0x32);
    pub const CALLER: Self = Self(0x33);
    pub const CALLVALUE: Self = Self(0x34);
    pub const CALLDATALOAD: Self = Self(0x35);
    pub const CALLDATASIZE: Self = Self(0x36);
    pub const CALLDATACOPY: Self = Self(0x37);
    pub const CODESIZE: Self = Self(0x38);
    pub const CODECOPY: Self = Self(0x39);
    pub const GASPRICE: Self = Self(0x3a);
    pub const EXTCODESIZE: Self = Self(0x3b);
    pub const EXTCODECOPY: Self = Self(0x3c);
    pub const RETURNDATASIZE: Self = Self(0x3d);
    pub const RETURNDATACOPY: Self = Self(0x3e);
    pub const EXTCODEHASH: Self = Self(0x3f);

    pub const BLOCKHASH: Self = Self(0x40);
    pub const COINBASE: Self = Self(0x41);
    pub const TIMESTAMP: Self = Self(0x42);
    pub const NUMBER: Self = Self(0x43);
    pub const DIFFICULTY: Self = Self(0x44);
    pub const GASLIMIT: Self = Self(0x45);

    pub const POP: Self = Self(0x50);
    pub const MLOAD: Self = Self(0x51);
    pub const MSTORE: Self = Self(0x52);
    pub const MSTORE8: Self = Self(0x53);
    pub const SLOAD: Self = Self(0x54);
    pub const SSTORE: Self = Self(0x55);
    pub const JUMP: Self = Self(0x56);
    pub const JUMPI: Self = Self(0x57);
    pub const PC: Self = Self(0x58);
    pub const MSIZE: Self = Self(0x59);
    pub const GAS: Self = Self(0x5a);
    pub const JUMPDEST: Self = Self(0x5b);

    pub const PUSH1: Self = Self(0x60);
    pub const PUSH32: Self = Self(0x7f);
    pub const DUP1: Self = Self(0x80);
    pub const DUP16: Self = Self(0x8f);
    pub const SWAP1: Self = Self(0x90);
    pub const SWAP16: Self = Self(0x9f);
    pub const LOG0: Self = Self(0xa0);
    pub const LOG4: Self = Self(0xa4);

    pub const CREATE: Self = Self(0xf0);
    pub const CALL: Self = Self(0xf1);
    pub const CALLCODE: Self = Self(0xf2);
    pub const RETURN: Self = Self(0xf3);
    pub const DELEGATECALL: Self = Self(0xf4);
    pub const CREATE2: Self = Self(0xf5);
    pub const STATICCALL: Self = Self(0xfa);
    pub const REVERT: Self = Self(0xfd);
    pub const SELFDESTRUCT: Self = Self(0xff);

    ///
    /// Returns all 256 identifiers in ascending order.
    ///
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }

    ///
    /// Returns the `PUSH{width}` opcode, `width` in `1..=32`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use opcode_analyzer::Opcode;
    ///
    /// assert_eq!(Opcode::push(2), Some(Opcode(0x61)));
    /// assert_eq!(Opcode::push(2).map(|opcode| opcode.to_string()), Some("PUSH2".to_owned()));
    /// assert_eq!(Opcode::push(33), None);
    /// ```
    ///
    pub fn push(width: u8) -> Option<Self> {
        matches!(width, 1..=32).then(|| Self(Self::PUSH1.0 + width - 1))
    }

    ///
    /// Returns the `DUP{slot}` opcode, `slot` in `1..=16`.
    ///
    pub fn dup(slot: u8) -> Option<Self> {
        matches!(slot, 1..=16).then(|| Self(Self::DUP1.0 + slot - 1))
    }

    ///
    /// Returns the `SWAP{slot}` opcode, `slot` in `1..=16`.
    ///
    pub fn swap(slot: u8) -> Option<Self> {
        matches!(slot, 1..=16).then(|| Self(Self::SWAP1.0 + slot - 1))
    }

    /// Whether the opcode belongs to the `PUSH1..PUSH32` family.
    pub fn is_push(&self) -> bool {
        (Self::PUSH1..=Self::PUSH32).contains(self)
    }

    /// Whether the opcode belongs to the `DUP1..DUP16` family.
    pub fn is_dup(&self) -> bool {
        (Self::DUP1..=Self::DUP16).contains(self)
    }

    /// Whether the opcode belongs to the `SWAP1..SWAP16` family.
    pub fn is_swap(&self) -> bool {
        (Self::SWAP1..=Self::SWAP16).contains(self)
    }

    /// Whether the opcode belongs to the `LOG0..LOG4` family.
    pub fn is_log(&self) -> bool {
        (Self::LOG0..=Self::LOG4).contains(self)
    }

    ///
    /// Returns the mnemonic of a defined opcode.
    ///
    pub fn mnemonic(&self) -> Option<String> {
        if self.is_push() {
            return Some(format!("PUSH{}", self.0 - Self::PUSH1.0 + 1));
        }
        if self.is_dup() {
            return Some(format!("DUP{}", self.0 - Self::DUP1.0 + 1));
        }
        if self.is_swap() {
            return Some(format!("SWAP{}", self.0 - Self::SWAP1.0 + 1));
        }
        if self.is_log() {
            return Some(format!("LOG{}", self.0 - Self::LOG0.0));
        }
        self.fixed_mnemonic().map(str::to_owned)
    }

    ///
    /// Whether the identifier names a defined instruction.
    ///
    pub fn is_defined(&self) -> bool {
        self.is_push()
            || self.is_dup()
            || self.is_swap()
            || self.is_log()
            || self.fixed_mnemonic().is_some()
    }

    fn fixed_mnemonic(&self) -> Option<&'static str> {
        Some(match *self {
            Self::STOP => "STOP",
            Self::ADD => "ADD",
            Self::MUL => "MUL",
            Self::SUB => "SUB",
            Self::DIV => "DIV",
            Self::SDIV => "SDIV",
            Self::MOD => "MOD",
            Self::SMOD => "SMOD",
            Self::ADDMOD => "ADDMOD",
            Self::MULMOD => "MULMOD",
            Self::EXP => "EXP",
            Self::SIGNEXTEND => "SIGNEXTEND",
            Self::LT => "LT",
            Self::GT => "GT",
            Self::SLT => "SLT",
            Self::SGT => "SGT",
            Self::EQ => "EQ",
            Self::ISZERO => "ISZERO",
            Self::AND => "AND",
            Self::OR => "OR",
            Self::XOR => "XOR",
            Self::NOT => "NOT",
            Self::BYTE => "BYTE",
            Self::SHL => "SHL",
            Self::SHR => "SHR",
            Self::SAR => "SAR",
            Self::SHA3 => "SHA3",
            Self::ADDRESS => "ADDRESS",
            Self::BALANCE => "BALANCE",
            Self::ORIGIN => "ORIGIN",
            Self::CALLER => "CALLER",
            Self::CALLVALUE => "CALLVALUE",
            Self::CALLDATALOAD => "CALLDATALOAD",
            Self::CALLDATASIZE => "CALLDATASIZE",
            Self::CALLDATACOPY => "CALLDATACOPY",
            Self::CODESIZE => "CODESIZE",
            Self::CODECOPY => "CODECOPY",
            Self::GASPRICE => "GASPRICE",
            Self::EXTCODESIZE => "EXTCODESIZE",
            Self::EXTCODECOPY => "EXTCODECOPY",
            Self::RETURNDATASIZE => "RETURNDATASIZE",
            Self::RETURNDATACOPY => "RETURNDATACOPY",
            Self::EXTCODEHASH => "EXTCODEHASH",
            Self::BLOCKHASH => "BLOCKHASH",
            Self::COINBASE => "COINBASE",
            Self::TIMESTAMP => "TIMESTAMP",
            Self::NUMBER => "NUMBER",
            Self::DIFFICULTY => "DIFFICULTY",
            Self::GASLIMIT => "GASLIMIT",
            Self::POP => "POP",
            Self::MLOAD => "MLOAD",
            Self::MSTORE => "MSTORE",
            Self::MSTORE8 => "MSTORE8",
            Self::SLOAD => "SLOAD",
            Self::SSTORE => "SSTORE",
            Self::JUMP => "JUMP",
            Self::JUMPI => "JUMPI",
            Self::PC => "PC",
            Self::MSIZE => "MSIZE",
            Self::GAS => "GAS",
            Self::JUMPDEST => "JUMPDEST",
            Self::CREATE => "CREATE",
            Self::CALL => "CALL",
            Self::CALLCODE => "CALLCODE",
            Self::RETURN => "RETURN",
            Self::DELEGATECALL => "DELEGATECALL",
            Self::CREATE2 => "CREATE2",
            Self::STATICCALL => "STATICCALL",
            Self::REVERT => "REVERT",
            Self::SELFDESTRUCT => "SELFDESTRUCT",
            _ => return None,
        })
    }
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mnemonic() {
            Some(mnemonic) => f.write_str(mnemonic.as_str()),
            None => write!(f, "opcode {:#04x}", self.0),
        }
    }
}
