//! Construction errors for conjunctions

/// Misuse when assembling a conjunction
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConjunctionError {
    /// Fewer than two members were supplied
    #[error("a conjunction needs at least two members, found {found}")]
    TooFewMembers {
        /// How many members were supplied
        found: usize,
    },
}
