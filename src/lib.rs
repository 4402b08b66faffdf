//! Simbld Password Generator
//!
//! Generates random passwords from a set of enabled character classes and
//! validates that a password contains exactly those classes.
//! Generation draws from the operating system's secure random source and
//! never places three identical characters in a row.

pub mod config;
pub mod password;
pub mod types;

// Re-export commonly used types and functions
pub use password::charset::{CharacterClass, CharacterClasses};
pub use password::generator::{generate_password, PasswordGenerator};
pub use password::validator::{
    get_password_validation_details, validate_classes, validate_password,
    PasswordValidationDetails,
};
pub use types::{GeneratorConfig, PasswordError};
