//! spec - Composable Specification predicates that report every failing rule
//!
//! A [`Specification`] judges a candidate value and either accepts it or
//! explains why not. A [`Conjunction`] holds two or more specifications,
//! evaluates all of them without short-circuiting, and reports the failures
//! of every member that declined, in the order the members were supplied.
//!
//! ```
//! use spec::{Person, Specification, VampireRules, vampire};
//!
//! let man = Person {
//!     age: 200,
//!     mortal: true,
//!     diet: vec!["meat".into(), "apple".into()],
//!     ..Person::default()
//! };
//!
//! let failure = vampire(&VampireRules::default()).satisfied_by(&man).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "expected to be immortal\nexpected to be older than 500 years\nexpected diet: blood"
//! );
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod rules;

pub use config::{ConfigError, RulesConfig, ScholarRules, VampireRules};
pub use crate::core::models::{ConjunctionError, Evaluation, Unsatisfied, Verdict};
pub use crate::core::ports::{SharedSpecification, Specification};
pub use crate::core::services::{Conjunction, FnSpecification, and, from_fn};
pub use rules::{Person, scholar, vampire};
