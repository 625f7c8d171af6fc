//!
//! The read paths over a built dataset.
//!

pub mod ranking;
pub mod series;
