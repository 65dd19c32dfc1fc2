//! Combinator services
//!
//! Pure logic over the [`Specification`](crate::core::ports::Specification)
//! port. No I/O.
//!
//! - [`conjunction`] - Require every member rule to hold
//! - [`predicate`] - Wrap closures as rules

pub mod conjunction;
pub mod predicate;

pub use conjunction::{Conjunction, MIN_MEMBERS, and};
pub use predicate::{FnSpecification, from_fn};
