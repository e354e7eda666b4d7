//! Domain models for the clinic.

pub mod lenient;
mod examination;
mod medicine;
mod patient;
mod payment;
mod session;
mod settings;

pub use examination::*;
pub use medicine::*;
pub use patient::*;
pub use payment::*;
pub use session::*;
pub use settings::*;
