//! Bundled rule sets
//!
//! Concrete specifications over a [`Person`], used by the `spec` binary and
//! as worked examples of writing rules against the
//! [`Specification`](crate::core::ports::Specification) port.
//!
//! - [`vampire`] - Immortal, ancient, and on a restricted diet
//! - [`scholar`] - A particular person: name, age, mortality and birth year

mod person;
mod scholar;
mod vampire;

pub use person::Person;
pub use scholar::{BornIn, Mortal, NamedAs, OlderThan, scholar};
pub use vampire::{AncientAge, Diet, Immortal, vampire};
