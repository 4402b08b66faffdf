//! Password validation utilities.
//!
//! Checks a password against a set of character class flags:
//! - an enabled class must appear at least once
//! - a disabled class must not appear at all

use super::charset::{CharacterClass, CharacterClasses};
use serde::Serialize;

/// Validates a password against the requested character classes
///
/// Returns true only if every class's presence matches its flag exactly
pub fn validate_password(
    lowercase: bool,
    uppercase: bool,
    numeric: bool,
    special: bool,
    spaces: bool,
    password: &str,
) -> bool {
    validate_classes(&CharacterClasses::new(lowercase, uppercase, numeric, special, spaces), password)
}

/// Same as `validate_password`, taking the flags as one value
pub fn validate_classes(classes: &CharacterClasses, password: &str) -> bool {
    get_password_validation_details(password).matches(classes)
}

/// Get detailed validation results for a password
///
/// Each class is tested independently; one character may count for several
pub fn get_password_validation_details(password: &str) -> PasswordValidationDetails {
    let has = |class: CharacterClass| password.chars().any(|c| class.matches(c));

    PasswordValidationDetails {
        has_lowercase: has(CharacterClass::Lowercase),
        has_uppercase: has(CharacterClass::Uppercase),
        has_numeric: has(CharacterClass::Numeric),
        has_special: has(CharacterClass::Special),
        has_spaces: has(CharacterClass::Space),
    }
}

/// Per-class presence found in a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordValidationDetails {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numeric: bool,
    pub has_special: bool,
    pub has_spaces: bool,
}

impl PasswordValidationDetails {
    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.has_lowercase,
            CharacterClass::Uppercase => self.has_uppercase,
            CharacterClass::Space => self.has_spaces,
            CharacterClass::Numeric => self.has_numeric,
            CharacterClass::Special => self.has_special,
        }
    }

    /// Check if presence matches the requested flags for every class
    pub fn matches(&self, classes: &CharacterClasses) -> bool {
        CharacterClass::ALL.iter().all(|&class| self.has(class) == classes.is_enabled(class))
    }

    /// Classes whose presence disagrees with the requested flags
    pub fn mismatches(&self, classes: &CharacterClasses) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.has(class) != classes.is_enabled(class))
            .collect()
    }
}
