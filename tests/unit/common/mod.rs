//! Shared test fixtures and helpers
//!
//! Stub specifications with a fixed verdict that count how often they run.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use spec::{SharedSpecification, Specification, Unsatisfied};

/// A specification with a fixed verdict that counts its evaluations
pub struct Stub {
    verdict: Option<String>,
    calls: AtomicUsize,
}

impl Stub {
    /// A stub that always passes
    pub fn pass() -> Arc<Self> {
        Arc::new(Self {
            verdict: None,
            calls: AtomicUsize::new(0),
        })
    }

    /// A stub that always fails with `reason`
    pub fn fail(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            verdict: Some(reason.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Pass on `None`, fail with the reason on `Some`
    pub fn from_verdict(verdict: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            verdict,
            calls: AtomicUsize::new(0),
        })
    }

    /// How many times this stub has been evaluated
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: ?Sized> Specification<T> for Stub {
    fn satisfied_by(&self, _value: &T) -> Result<(), Unsatisfied> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.verdict {
            None => Ok(()),
            Some(reason) => Err(Unsatisfied::new(reason.clone())),
        }
    }
}

/// Erase a stub into a shared member
pub fn shared<T: ?Sized>(stub: &Arc<Stub>) -> SharedSpecification<T> {
    Arc::clone(stub) as SharedSpecification<T>
}

/// Erase a list of stubs into shared members
pub fn members<T: ?Sized>(stubs: &[Arc<Stub>]) -> Vec<SharedSpecification<T>> {
    stubs.iter().map(shared).collect()
}
