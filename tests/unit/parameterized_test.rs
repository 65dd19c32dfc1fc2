//! Parameterized tests using test-case
//!
//! Boundary behavior of the bundled rules.

use spec::rules::{AncientAge, BornIn, Diet, Immortal, Mortal, NamedAs, OlderThan};
use spec::{Person, Specification};
use test_case::test_case;

fn aged(age: u32) -> Person {
    Person {
        age,
        ..Person::default()
    }
}

// =============================================================================
// Age rules
// =============================================================================

#[test_case(499, false ; "just below ancient")]
#[test_case(500, true ; "exactly ancient")]
#[test_case(501, true ; "beyond ancient")]
fn test_ancient_age_is_inclusive(age: u32, expected: bool) {
    assert_eq!(AncientAge { min_age: 500 }.is_satisfied_by(&aged(age)), expected);
}

#[test_case(20, false ; "exactly threshold")]
#[test_case(21, true ; "one above threshold")]
#[test_case(0, false ; "newborn")]
fn test_older_than_is_exclusive(age: u32, expected: bool) {
    assert_eq!(OlderThan { age: 20 }.is_satisfied_by(&aged(age)), expected);
}

// =============================================================================
// Mortality rules
// =============================================================================

#[test_case(true, true, false ; "mortal person")]
#[test_case(false, false, true ; "immortal person")]
fn test_mortality_rules_are_opposites(mortal: bool, expect_mortal: bool, expect_immortal: bool) {
    let person = Person {
        mortal,
        ..Person::default()
    };
    assert_eq!(Mortal.is_satisfied_by(&person), expect_mortal);
    assert_eq!(Immortal.is_satisfied_by(&person), expect_immortal);
}

// =============================================================================
// Diet, name and birth year
// =============================================================================

#[test_case(&[], true ; "empty diet")]
#[test_case(&["blood"], true ; "only allowed meals")]
#[test_case(&["blood", "apple"], false ; "one forbidden meal")]
#[test_case(&["meat", "apple"], false ; "all forbidden meals")]
fn test_diet_requires_subset(meals: &[&str], expected: bool) {
    let person = Person {
        diet: meals.iter().map(ToString::to_string).collect(),
        ..Person::default()
    };
    assert_eq!(Diet::new(["blood"]).is_satisfied_by(&person), expected);
}

#[test_case("Newton", true ; "exact name")]
#[test_case("newton", false ; "case differs")]
#[test_case("", false ; "no name")]
fn test_named_as_is_exact(name: &str, expected: bool) {
    let person = Person {
        name: name.to_string(),
        ..Person::default()
    };
    assert_eq!(NamedAs::new("Newton").is_satisfied_by(&person), expected);
}

#[test_case(1643, true ; "same year")]
#[test_case(1642, false ; "year before")]
fn test_born_in_is_exact(year: i32, expected: bool) {
    let person = Person {
        birth_year: year,
        ..Person::default()
    };
    assert_eq!(BornIn { year: 1643 }.is_satisfied_by(&person), expected);
}
