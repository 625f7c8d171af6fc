//!
//! Per-fork costs of the repriced opcodes.
//!

///
/// Costs of the opcodes whose price depends on the active fork.
///
/// Opcodes that do not exist yet in a fork are priced at zero.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasTable {
    /// `SLOAD`.
    pub sload: u64,
    /// `BALANCE`.
    pub balance: u64,
    /// `EXTCODESIZE`.
    pub ext_code_size: u64,
    /// `EXTCODECOPY`, the base charge excluding the copied words.
    pub ext_code_copy: u64,
    /// `EXTCODEHASH`.
    pub ext_code_hash: u64,
    /// `CALL`, the base charge excluding value transfer and account creation.
    pub calls: u64,
    /// `SHL`, `SHR` and `SAR`.
    pub shift: u64,
    /// `RETURNDATASIZE`.
    pub return_data_size: u64,
}

impl GasTable {
    /// The baseline table.
    pub const HOMESTEAD: Self = Self {
        sload: 50,
        balance: 20,
        ext_code_size: 20,
        ext_code_copy: 20,
        ext_code_hash: 0,
        calls: 40,
        shift: 0,
        return_data_size: 0,
    };

    /// The IO-heavy opcodes repricing.
    pub const TANGERINE_WHISTLE: Self = Self {
        sload: 200,
        balance: 400,
        ext_code_size: 700,
        ext_code_copy: 700,
        ext_code_hash: 0,
        calls: 700,
        shift: 0,
        return_data_size: 0,
    };

    /// The state clearing. Only `EXP` was repriced, and it is not statically resolvable.
    pub const SPURIOUS_DRAGON: Self = Self::TANGERINE_WHISTLE;

    /// Introduces `RETURNDATASIZE` at the quick step.
    pub const BYZANTIUM: Self = Self {
        return_data_size: 2,
        ..Self::SPURIOUS_DRAGON
    };

    /// Introduces the shift opcodes at the fastest step and `EXTCODEHASH`.
    pub const CONSTANTINOPLE: Self = Self {
        ext_code_hash: 400,
        shift: 3,
        ..Self::BYZANTIUM
    };
}
