//! Screen actions over the shared store.
//!
//! Pipeline: Registration → Examination → {Pharmacy, Payment}
//!
//! Every action reads whole collections, edits them in memory and writes
//! them back. A queue-advance performs its writes one after another with no
//! transaction spanning them; a failure between writes leaves the earlier
//! writes in place.

mod catalog;
mod dashboard;
mod examination;
mod payment;
mod pharmacy;
mod registration;
mod settings;

pub use catalog::*;
pub use dashboard::*;
pub use examination::*;
pub use payment::*;
pub use pharmacy::*;
pub use registration::*;
pub use settings::*;

use thiserror::Error;

/// Workflow errors.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Storage error: {0}")]
    Store(#[from] crate::db::StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),
}

pub type ClinicResult<T> = Result<T, ClinicError>;
