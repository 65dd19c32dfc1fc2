//! Vampire rules

use std::collections::BTreeSet;

use super::Person;
use crate::config::VampireRules;
use crate::core::models::Unsatisfied;
use crate::core::ports::Specification;
use crate::core::services::{Conjunction, and};

/// Satisfied by people who cannot die
#[derive(Debug, Clone, Copy, Default)]
pub struct Immortal;

impl Specification<Person> for Immortal {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.mortal {
            return Err(Unsatisfied::new("expected to be immortal"));
        }
        Ok(())
    }
}

/// Satisfied by people at least `min_age` years old
#[derive(Debug, Clone, Copy)]
pub struct AncientAge {
    /// Minimum age, inclusive
    pub min_age: u32,
}

impl Specification<Person> for AncientAge {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.age >= self.min_age {
            return Ok(());
        }
        Err(Unsatisfied::new(format!("expected to be older than {} years", self.min_age)))
    }
}

/// Satisfied when every meal eaten is an allowed meal
///
/// An empty diet is always allowed.
#[derive(Debug, Clone, Default)]
pub struct Diet {
    meals: BTreeSet<String>,
}

impl Diet {
    /// Allow exactly `meals`
    #[must_use]
    pub fn new<I, S>(meals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            meals: meals.into_iter().map(Into::into).collect(),
        }
    }
}

impl Specification<Person> for Diet {
    fn satisfied_by(&self, person: &Person) -> Result<(), Unsatisfied> {
        if person.diet.iter().all(|meal| self.meals.contains(meal)) {
            return Ok(());
        }
        let allowed: Vec<&str> = self.meals.iter().map(String::as_str).collect();
        Err(Unsatisfied::new(format!("expected diet: {}", allowed.join(", "))))
    }
}

/// Immortal, ancient, and eating only what `rules` allows
#[must_use]
pub fn vampire(rules: &VampireRules) -> Conjunction<Person> {
    and(Immortal, AncientAge { min_age: rules.min_age }).and(Diet::new(rules.diet.iter().cloned()))
}
