//! Umbrella crate for the demos; everything lives in `travelrec-core`.
pub use travelrec_core::*;
