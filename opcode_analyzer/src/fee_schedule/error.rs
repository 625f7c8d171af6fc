//!
//! Fee schedule construction error.
//!

///
/// Fee schedule construction error.
///
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// No activations were provided.
    #[error("The fee schedule has no activations")]
    Empty,
    /// The activation heights are not strictly increasing.
    #[error("Fee schedule activation at {next} does not follow the one at {previous}")]
    UnorderedActivations {
        /// The height of the preceding activation.
        previous: u64,
        /// The height of the offending activation.
        next: u64,
    },
}
