//! Applicative validation of a `Person`.
//!
//! Name and age are checked independently and every failed rule reports its
//! own message, name first:
//!
//! ```rust
//! use tour::person::PersonValidator;
//!
//! let invalid = PersonValidator.validate("John? Doe!4", -1);
//! assert_eq!(
//!     invalid.into_result().unwrap_err(),
//!     vec![
//!         "Name contains invalid characters: '!4?'".to_string(),
//!         "Age must be at least 0".to_string(),
//!     ],
//! );
//! ```

use std::collections::BTreeSet;
use std::fmt;

use functour::control::Validation;

/// A validated person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Letters and spaces only.
    pub name: String,
    /// Never negative.
    pub age: i32,
}

impl Person {
    /// Builds a person without validation.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Person({}, {})", self.name, self.age)
    }
}

/// Validates the fields of a [`Person`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl PersonValidator {
    /// The smallest accepted age.
    pub const MIN_AGE: i32 = 0;

    /// Validates both fields, accumulating every error.
    pub fn validate(self, name: &str, age: i32) -> Validation<Vec<String>, Person> {
        Validation::combine(self.validate_name(name), self.validate_age(age)).ap(Person::new)
    }

    /// Accepts names made of ASCII letters and spaces. The error lists each
    /// offending character once, in sorted order.
    pub fn validate_name(self, name: &str) -> Validation<String, String> {
        let invalid: BTreeSet<char> = name
            .chars()
            .filter(|c| !(c.is_ascii_alphabetic() || *c == ' '))
            .collect();
        if invalid.is_empty() {
            Validation::valid(name.to_string())
        } else {
            let listed: String = invalid.into_iter().collect();
            Validation::invalid(format!("Name contains invalid characters: '{listed}'"))
        }
    }

    /// Accepts ages of at least [`PersonValidator::MIN_AGE`].
    pub fn validate_age(self, age: i32) -> Validation<String, i32> {
        if age < Self::MIN_AGE {
            Validation::invalid(format!("Age must be at least {}", Self::MIN_AGE))
        } else {
            Validation::valid(age)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_input_builds_the_person() {
        let person = PersonValidator.validate("John Doe", 30);
        assert_eq!(person, Validation::valid(Person::new("John Doe", 30)));
        assert_eq!(person.to_string(), "Valid(Person(John Doe, 30))");
    }

    #[rstest]
    #[case("John? Doe!4", 30, vec!["Name contains invalid characters: '!4?'"])]
    #[case("John Doe", -1, vec!["Age must be at least 0"])]
    #[case("a-b-c", -5, vec!["Name contains invalid characters: '-'", "Age must be at least 0"])]
    fn every_broken_rule_is_reported(
        #[case] name: &str,
        #[case] age: i32,
        #[case] expected: Vec<&str>,
    ) {
        let errors = PersonValidator.validate(name, age).into_result().unwrap_err();
        assert_eq!(errors, expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_names_are_accepted(#[case] name: &str) {
        assert!(PersonValidator.validate_name(name).is_valid());
    }

    #[rstest]
    fn age_boundary_is_inclusive() {
        assert!(PersonValidator.validate_age(0).is_valid());
        assert!(PersonValidator.validate_age(-1).is_invalid());
    }
}
