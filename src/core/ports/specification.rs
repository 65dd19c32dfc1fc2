//! Specification port
//!
//! The one capability every rule implements. The conjunction combinator
//! depends only on this trait, never on concrete rule types.

use std::sync::Arc;

use crate::core::models::Unsatisfied;

/// A shared, type-erased specification
///
/// Conjunctions hold their members through this handle so a single rule can
/// belong to several conjunctions at once.
pub type SharedSpecification<T> = Arc<dyn Specification<T>>;

/// A rule that judges candidate values of type `T`
///
/// Implementations may carry configuration (a threshold, a set of allowed
/// values) but must not rely on the caller evaluating them in any particular
/// order or only once.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Judge `value`
    ///
    /// Returns `Ok(())` when the value is acceptable, otherwise a descriptive
    /// [`Unsatisfied`].
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied>;

    /// Shorthand for `satisfied_by(value).is_ok()`
    fn is_satisfied_by(&self, value: &T) -> bool {
        self.satisfied_by(value).is_ok()
    }

    /// Name used in reports and logs
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied> {
        (**self).satisfied_by(value)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied> {
        (**self).satisfied_by(value)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn satisfied_by(&self, value: &T) -> Result<(), Unsatisfied> {
        (**self).satisfied_by(value)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Strip module paths and generic arguments: `a::b::Rule<x::Y>` becomes `Rule`
fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
