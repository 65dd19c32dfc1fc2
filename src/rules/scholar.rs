//! Scholar rules

use super::Person;
use crate::config::ScholarRules;
use crate::core::models::Unsatisfied;
use crate::core::ports::Specification;
use crate::core::services::{Conjunction, and};

/// Satisfied by people strictly older than `age`
#[derive(Debug, Clone, Copy)]
pub struct OlderThan {
    /// Exclusive lower bound
    pub age: u32,
}

impl Specification<Person> for OlderThan {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.age > self.age {
            return Ok(());
        }
        Err(Unsatisfied::new(format!("expected to be older than {}", self.age)))
    }
}

/// Satisfied by people with exactly this name
#[derive(Debug, Clone)]
pub struct NamedAs {
    /// Required name
    pub name: String,
}

impl NamedAs {
    /// Require `name`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification<Person> for NamedAs {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.name == self.name {
            return Ok(());
        }
        Err(Unsatisfied::new(format!("expected to be named as {:?}", self.name)))
    }
}

/// Satisfied by people who can die
#[derive(Debug, Clone, Copy, Default)]
pub struct Mortal;

impl Specification<Person> for Mortal {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.mortal {
            return Ok(());
        }
        Err(Unsatisfied::new("expected to be mortal"))
    }
}

/// Satisfied by people born in `year`
#[derive(Debug, Clone, Copy)]
pub struct BornIn {
    /// Required birth year
    pub year: i32,
}

impl Specification<Person> for BornIn {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.birth_year == self.year {
            return Ok(());
        }
        Err(Unsatisfied::new(format!("expected to be born in {}", self.year)))
    }
}

/// Older than a threshold, with the right name, mortal, born in the right year
#[must_use]
pub fn scholar(rules: &ScholarRules) -> Conjunction<Person> {
    and(OlderThan { age: rules.older_than }, NamedAs::new(rules.name.clone()))
        .and(Mortal)
        .and(BornIn { year: rules.birth_year })
}
