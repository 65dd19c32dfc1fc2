//! Conjunction service - "all of these rules must hold"
//!
//! A conjunction evaluates every member against the candidate, in the order
//! the members were supplied, and never stops at the first failure. Its
//! failure lists exactly the members that declined.

use std::sync::Arc;

use crate::core::models::{ConjunctionError, Evaluation, Unsatisfied, Verdict};
use crate::core::ports::{SharedSpecification, Specification};

/// Minimum number of members a conjunction holds
pub const MIN_MEMBERS: usize = 2;

/// A specification satisfied only when every member is satisfied
///
/// Members are shared handles; the same rule may appear in several
/// conjunctions, and a conjunction may itself be a member of another one.
/// The member list never changes once a conjunction exists.
pub struct Conjunction<T: ?Sized> {
    members: Vec<SharedSpecification<T>>,
}

impl<T: ?Sized> Conjunction<T> {
    /// Combine two required members with any number of extra ones
    #[must_use]
    pub fn new<I>(x: SharedSpecification<T>, y: SharedSpecification<T>, rest: I) -> Self
    where
        I: IntoIterator<Item = SharedSpecification<T>>,
    {
        let mut members = vec![x, y];
        members.extend(rest);
        Self { members }
    }

    /// Build from an ordered list, rejecting lists shorter than two
    pub fn try_from_members<I>(members: I) -> Result<Self, ConjunctionError>
    where
        I: IntoIterator<Item = SharedSpecification<T>>,
    {
        let members: Vec<_> = members.into_iter().collect();
        if members.len() < MIN_MEMBERS {
            log::debug!("rejected conjunction with {} member(s)", members.len());
            return Err(ConjunctionError::TooFewMembers {
                found: members.len(),
            });
        }
        Ok(Self { members })
    }

    /// Return a conjunction with `spec` appended as the last member
    #[must_use]
    pub fn and<S>(self, spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        self.and_shared(Arc::new(spec))
    }

    /// Return a conjunction with a shared member appended
    #[must_use]
    pub fn and_shared(mut self, spec: SharedSpecification<T>) -> Self {
        self.members.push(spec);
        self
    }

    /// Number of members, always at least two
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members in evaluation order
    #[must_use]
    pub fn members(&self) -> &[SharedSpecification<T>] {
        &self.members
    }

    /// Evaluate every member and keep one verdict per member
    pub fn evaluate(&self, value: &T) -> Evaluation {
        let verdicts = self
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| Verdict::new(index, member.name(), member.satisfied_by(value)))
            .collect();
        Evaluation { verdicts }
    }

    fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name()).collect()
    }
}

impl<T: ?Sized> Specification<T> for Conjunction<T> {
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied> {
        let merged = Unsatisfied::merge(self.members.iter().map(|m| m.satisfied_by(value)));
        log::trace!(
            "conjunction of {} member(s) evaluated, {} failed",
            self.members.len(),
            merged.as_ref().map_or(0, |failure| failure.failures().len())
        );
        merged.map_or(Ok(()), Err)
    }

    fn name(&self) -> String {
        format!("all of [{}]", self.member_names().join(", "))
    }
}

impl<T: ?Sized> Clone for Conjunction<T> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Conjunction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conjunction").field("members", &self.member_names()).finish()
    }
}

/// Combine two owned specifications
///
/// Chain [`Conjunction::and`] to add more members.
#[must_use]
pub fn and<T, X, Y>(x: X, y: Y) -> Conjunction<T>
where
    T: ?Sized,
    X: Specification<T> + 'static,
    Y: Specification<T> + 'static,
{
    Conjunction::new(Arc::new(x), Arc::new(y), [])
}
