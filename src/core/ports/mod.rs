//! Port traits (interfaces)
//!
//! The boundary between the combinator logic and the rules callers write.
//! The core depends only on these traits, never on concrete rules.

mod specification;

pub use specification::{SharedSpecification, Specification};
