//! Command implementations

mod check;

pub use check::{scholar, vampire};
