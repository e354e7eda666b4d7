//! Export of clinic data for accounting.

mod billing;

pub use billing::*;
