//! Evaluation model
//!
//! A positional view of one conjunction pass: one verdict per member, in
//! member order, whether or not the member failed.

use serde::Serialize;

use super::Unsatisfied;

/// Outcome of a single member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Position of the member in the conjunction
    pub index: usize,

    /// Name reported by the member
    pub name: String,

    /// Whether the member accepted the candidate
    pub satisfied: bool,

    /// Why the member declined, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Unsatisfied>,
}

impl Verdict {
    /// Record a member's result
    #[must_use]
    pub fn new(index: usize, name: String, result: Result<(), Unsatisfied>) -> Self {
        Self {
            index,
            name,
            satisfied: result.is_ok(),
            reason: result.err(),
        }
    }

    /// Whether the member accepted the candidate
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Convert back into the member's result
    pub fn into_result(self) -> Result<(), Unsatisfied> {
        self.reason.map_or(Ok(()), Err)
    }
}

/// All verdicts from one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// One verdict per member, in member order
    pub verdicts: Vec<Verdict>,
}

impl Evaluation {
    /// Whether every member accepted the candidate
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.verdicts.iter().all(Verdict::is_satisfied)
    }

    /// Verdicts of members that declined
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_satisfied())
    }

    /// Collapse into the same result `satisfied_by` would return
    pub fn into_result(self) -> Result<(), Unsatisfied> {
        Unsatisfied::merge(self.verdicts.into_iter().map(Verdict::into_result)).map_or(Ok(()), Err)
    }
}
