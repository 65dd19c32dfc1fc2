//! Domain models for specifications
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Unsatisfied`] - Why a candidate was rejected
//! - [`ConjunctionError`] - Misuse when assembling a conjunction
//! - [`Evaluation`] - Per-member verdicts of one conjunction pass

mod error;
mod evaluation;
mod unsatisfied;

pub use error::ConjunctionError;
pub use evaluation::{Evaluation, Verdict};
pub use unsatisfied::Unsatisfied;
