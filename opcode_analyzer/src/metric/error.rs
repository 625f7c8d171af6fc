//!
//! The metric derivation error.
//!

use crate::opcode::Opcode;

///
/// The metric derivation error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The opcode cost depends on the runtime context and cannot be resolved statically.
    #[error("The cost of {opcode} at height {height} is not static")]
    NotStaticizable {
        /// The opcode.
        opcode: Opcode,
        /// The height the cost was requested at.
        height: u64,
    },
    /// The delta could not be computed.
    #[error(transparent)]
    Dataset(#[from] crate::dataset::error::Error),
}
