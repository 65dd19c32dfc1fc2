//! Unsatisfied model
//!
//! The failure value a specification returns when it rejects a candidate.
//! A conjunction bundles the failures of its members into one aggregate.

use serde::{Deserialize, Serialize};

/// Why a candidate value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum Unsatisfied {
    /// A single rule declined the candidate
    #[error("{0}")]
    Reason(String),

    /// Every failure of a conjunction, in member order
    #[error("{}", join_lines(.0))]
    All(Vec<Unsatisfied>),
}

impl Unsatisfied {
    /// Create a single-rule failure
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self::Reason(reason.into())
    }

    /// Merge evaluation results into one aggregate
    ///
    /// Successful results contribute nothing. Returns `None` when no result
    /// failed, otherwise an [`Unsatisfied::All`] holding only the real
    /// failures in iteration order. Every item is consumed.
    #[must_use]
    pub fn merge<I>(results: I) -> Option<Self>
    where
        I: IntoIterator<Item = Result<(), Self>>,
    {
        let failures: Vec<Self> = results.into_iter().filter_map(Result::err).collect();
        if failures.is_empty() {
            None
        } else {
            Some(Self::All(failures))
        }
    }

    /// Whether this failure bundles other failures
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::All(_))
    }

    /// Direct children of an aggregate, or the failure itself for a reason
    #[must_use]
    pub const fn failures(&self) -> &[Self] {
        match self {
            Self::Reason(_) => std::slice::from_ref(self),
            Self::All(failures) => failures.as_slice(),
        }
    }

    /// Number of leaf reasons, counting through nested aggregates
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Reason(_) => 1,
            Self::All(failures) => failures.iter().map(Self::len).sum(),
        }
    }

    /// Whether no leaf reason is present
    ///
    /// Only an empty aggregate is empty; [`Unsatisfied::merge`] never builds one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Leaf reasons in order, flattening nested aggregates
    #[must_use]
    pub fn reasons(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_reasons(&mut out);
        out
    }

    fn collect_reasons<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Reason(reason) => out.push(reason),
            Self::All(failures) => {
                for failure in failures {
                    failure.collect_reasons(out);
                }
            },
        }
    }
}

impl From<String> for Unsatisfied {
    fn from(reason: String) -> Self {
        Self::Reason(reason)
    }
}

impl From<&str> for Unsatisfied {
    fn from(reason: &str) -> Self {
        Self::Reason(reason.to_string())
    }
}

fn join_lines(failures: &[Unsatisfied]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
