//!
//! Opcode groups charted together.
//!

use crate::metric::Metric;
use crate::opcode::Opcode;

///
/// A set of opcodes charted together, with the metric it is charted by.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Every opcode, by the time spent.
    All,
    /// The `0x00` arithmetic range.
    Arithmetic,
    /// The `0x10` comparison and bitwise range.
    Comparison,
    /// `SHA3`, by the time spent.
    Sha3,
    /// The first half of the `0x30` context range.
    ContextPart1,
    /// The second half of the `0x30` context range.
    ContextPart2,
    /// The `0x40` block information range, except `BLOCKHASH`.
    BlockOperations,
    /// `BLOCKHASH` alone, as its scale differs from the rest of the range.
    Blockhash,
    /// The cheap part of the `0x50` storage and execution range.
    StoragePart1,
    /// Pushes, duplications and swaps.
    StackOperations,
    /// The `0xa0` logging range, by the time spent.
    Logging,
    /// A single opcode.
    Single(Opcode),
}

impl Group {
    ///
    /// The opcodes charted in the group.
    ///
    pub fn members(&self) -> Vec<Opcode> {
        match self {
            Self::All => Opcode::all().collect(),
            Self::Arithmetic => vec![
                Opcode::ADD,
                Opcode::MUL,
                Opcode::SUB,
                Opcode::DIV,
                Opcode::SDIV,
                Opcode::MOD,
                Opcode::SMOD,
                Opcode::ADDMOD,
                Opcode::MULMOD,
                Opcode::EXP,
                Opcode::SIGNEXTEND,
            ],
            Self::Comparison => vec![
                Opcode::LT,
                Opcode::GT,
                Opcode::SLT,
                Opcode::SGT,
                Opcode::EQ,
                Opcode::ISZERO,
                Opcode::AND,
                Opcode::OR,
                Opcode::XOR,
                Opcode::NOT,
                Opcode::BYTE,
            ],
            Self::Sha3 => vec![Opcode::SHA3],
            Self::ContextPart1 => vec![
                Opcode::ADDRESS,
                Opcode::BALANCE,
                Opcode::ORIGIN,
                Opcode::CALLER,
                Opcode::CALLVALUE,
                Opcode::CALLDATASIZE,
            ],
            Self::ContextPart2 => vec![
                Opcode::CODESIZE,
                Opcode::GASPRICE,
                Opcode::EXTCODESIZE,
                Opcode::RETURNDATASIZE,
                Opcode::EXTCODEHASH,
            ],
            Self::BlockOperations => vec![
                Opcode::COINBASE,
                Opcode::TIMESTAMP,
                Opcode::NUMBER,
                Opcode::DIFFICULTY,
                Opcode::GASLIMIT,
            ],
            Self::Blockhash => vec![Opcode::BLOCKHASH],
            Self::StoragePart1 => vec![
                Opcode::POP,
                Opcode::MLOAD,
                Opcode::SLOAD,
                Opcode::PC,
                Opcode::MSIZE,
                Opcode::GAS,
            ],
            Self::StackOperations => (Opcode::PUSH1.0..=Opcode::SWAP16.0)
                .map(Opcode)
                .collect(),
            Self::Logging => (Opcode::LOG0.0..=Opcode::LOG4.0).map(Opcode).collect(),
            Self::Single(opcode) => vec![*opcode],
        }
    }

    ///
    /// The chart title.
    ///
    pub fn title(&self) -> String {
        match self {
            Self::All => "Time spent".to_owned(),
            Self::Arithmetic => "Time per gas (0x00 opcodes - Arithmetic)".to_owned(),
            Self::Comparison => "Time per gas (0x10 opcodes - Comparison)".to_owned(),
            Self::Sha3 => "Time spent on SHA3 (0x20)".to_owned(),
            Self::ContextPart1 => "Time per gas (0x30 opcodes - Context, part 1)".to_owned(),
            Self::ContextPart2 => "Time per gas (0x30 opcodes - Context, part 2)".to_owned(),
            Self::BlockOperations => "Time per gas (0x40 opcodes - Block ops)".to_owned(),
            Self::Blockhash => "Time per gas (BLOCKHASH)".to_owned(),
            Self::StoragePart1 => "Time per gas (0x50 Storage and execution - part 1)".to_owned(),
            Self::StackOperations => "Time per gas (0x60 Pushes, Dups, Swaps)".to_owned(),
            Self::Logging => "Time spent on log operations (0xa0 LOG)".to_owned(),
            Self::Single(opcode) => format!("Time per gas ({opcode})"),
        }
    }

    ///
    /// The worksheet name. Worksheet names are limited to 31 characters.
    ///
    pub fn sheet_name(&self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::Arithmetic => "Arithmetic".to_owned(),
            Self::Comparison => "Comparison".to_owned(),
            Self::Sha3 => "SHA3".to_owned(),
            Self::ContextPart1 => "Context1".to_owned(),
            Self::ContextPart2 => "Context2".to_owned(),
            Self::BlockOperations => "BlockOps".to_owned(),
            Self::Blockhash => "Blockhash".to_owned(),
            Self::StoragePart1 => "Storage1".to_owned(),
            Self::StackOperations => "Stack".to_owned(),
            Self::Logging => "Logging".to_owned(),
            Self::Single(opcode) => opcode.to_string().replace(' ', "_"),
        }
    }

    ///
    /// The metric the group is charted by.
    ///
    pub fn metric(&self) -> Metric {
        match self {
            Self::All | Self::Sha3 | Self::Logging => Metric::Time,
            _ => Metric::TimePerGas,
        }
    }

    ///
    /// The default upper bound values are clamped to, keeping outliers from flattening the chart.
    ///
    pub fn cap(&self) -> Option<f64> {
        match self {
            Self::All => Some(100_000.0),
            Self::Arithmetic | Self::Comparison => Some(250.0),
            Self::ContextPart1 | Self::ContextPart2 => Some(500.0),
            Self::BlockOperations | Self::StackOperations => Some(600.0),
            Self::Blockhash | Self::StoragePart1 => Some(3_000.0),
            Self::Sha3 | Self::Logging | Self::Single(_) => None,
        }
    }

    ///
    /// The default value one of the series points must reach for the series to be charted.
    ///
    pub fn peak_filter(&self) -> Option<f64> {
        match self {
            Self::All => Some(45_000.0),
            _ => None,
        }
    }

    ///
    /// Whether the per-interval invocation count is charted next to the metric.
    ///
    pub fn has_count_series(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sheet_name().as_str())
    }
}
