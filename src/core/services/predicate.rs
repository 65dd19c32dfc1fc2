//! Closure-backed specifications
//!
//! Lets a one-off rule be written inline instead of as a named type.

use std::marker::PhantomData;

use crate::core::models::Unsatisfied;
use crate::core::ports::Specification;

/// A specification backed by a closure
pub struct FnSpecification<T: ?Sized, F> {
    name: String,
    check: F,
    candidate: PhantomData<fn(&T)>,
}

/// Wrap `check` as a specification reported under `name`
///
/// ```
/// use spec::core::models::Unsatisfied;
/// use spec::core::ports::Specification;
/// use spec::core::services::from_fn;
///
/// let positive = from_fn("Positive", |n: &i64| {
///     if *n > 0 { Ok(()) } else { Err(Unsatisfied::new("expected a positive number")) }
/// });
/// assert!(positive.is_satisfied_by(&3));
/// assert!(!positive.is_satisfied_by(&-1));
/// assert_eq!(positive.name(), "Positive");
/// ```
#[must_use]
pub fn from_fn<T, F>(name: impl Into<String>, check: F) -> FnSpecification<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Unsatisfied> + Send + Sync,
{
    FnSpecification {
        name: name.into(),
        check,
        candidate: PhantomData,
    }
}

impl<T, F> Specification<T> for FnSpecification<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Unsatisfied> + Send + Sync,
{
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied> {
        (self.check)(value)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

impl<T: ?Sized, F> std::fmt::Debug for FnSpecification<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSpecification").field("name", &self.name).finish_non_exhaustive()
    }
}
