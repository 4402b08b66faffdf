//! Password generator module
//!
//! This module provides functionality to generate a random password
//! - `generate_password`: Generates a password from five class flags and a length
//! - `PasswordGenerator`: Generator with configurable retry limits and an injectable RNG
//! - `PASSWORD_LENGTH_MIN` / `PASSWORD_LENGTH_MAX`: Accepted length range, inclusive
//! - `MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS`: Longest run of one character allowed

use super::charset::CharacterClasses;
use super::validator::get_password_validation_details;
use crate::config::load_config;
use crate::types::{GeneratorConfig, PasswordError};
use log::{debug, warn};
use rand::rngs::OsRng;
use rand::Rng;

pub const PASSWORD_LENGTH_MIN: usize = 12;
pub const PASSWORD_LENGTH_MAX: usize = 64;
pub const MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS: usize = 2;

/// Generate a password with the default limits and the OS random source
pub fn generate_password(
    lowercase: bool,
    uppercase: bool,
    numeric: bool,
    special: bool,
    spaces: bool,
    length: usize,
) -> Result<String, PasswordError> {
    let classes = CharacterClasses::new(lowercase, uppercase, numeric, special, spaces);
    PasswordGenerator::default().generate(&classes, length)
}

/// Reject lengths outside `PASSWORD_LENGTH_MIN..=PASSWORD_LENGTH_MAX`
pub fn check_length(length: usize) -> Result<(), PasswordError> {
    if !(PASSWORD_LENGTH_MIN..=PASSWORD_LENGTH_MAX).contains(&length) {
        return Err(PasswordError::LengthOutOfRange {
            length,
            min: PASSWORD_LENGTH_MIN,
            max: PASSWORD_LENGTH_MAX,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
}

impl PasswordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
        }
    }

    /// Build a generator from `PASSGEN_*` environment variables
    pub fn from_env() -> Result<Self, PasswordError> {
        Ok(Self::new(load_config()?))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a password using the operating system's secure random source
    pub fn generate(&self, classes: &CharacterClasses, length: usize) -> Result<String, PasswordError> {
        self.generate_with_rng(classes, length, &mut OsRng)
    }

    /// Generate a password drawing from `rng`.
    ///
    /// Each attempt fills every position and then validates the whole password;
    /// a failed attempt is discarded and the next one starts from scratch.
    pub fn generate_with_rng<R: Rng>(
        &self,
        classes: &CharacterClasses,
        length: usize,
        rng: &mut R,
    ) -> Result<String, PasswordError> {
        check_length(length)?;

        let alphabet = classes.alphabet()?;
        // A single character can never fill position 3
        if alphabet.len() < 2 {
            return Err(PasswordError::AlphabetTooSmall(alphabet.len()));
        }

        for attempt in 1..=self.config.max_attempts {
            let Some(password) = self.fill(&alphabet, length, rng) else {
                debug!("Attempt {attempt}: redraw limit hit, regenerating");
                continue;
            };

            let details = get_password_validation_details(&password);
            if details.matches(classes) {
                if attempt > 1 {
                    debug!("Password accepted after {attempt} attempts");
                }
                return Ok(password);
            }

            debug!(
                "Attempt {attempt}: class check failed for {:?}, regenerating",
                details.mismatches(classes)
            );
        }

        warn!("Gave up generating a password after {} attempts", self.config.max_attempts);
        Err(PasswordError::NotConverged(self.config.max_attempts))
    }

    /// Fill `length` positions left to right, redrawing any character that
    /// would make a run longer than `MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS`.
    ///
    /// Returns `None` once a single position needs more than `max_redraws`.
    fn fill<R: Rng>(&self, alphabet: &[char], length: usize, rng: &mut R) -> Option<String> {
        let mut password: Vec<char> = Vec::with_capacity(length);

        for _ in 0..length {
            let mut next = draw(alphabet, rng);
            let mut redraws = 0;

            while extends_run(&password, next) {
                if redraws == self.config.max_redraws {
                    return None;
                }
                redraws += 1;
                next = draw(alphabet, rng);
            }

            password.push(next);
        }

        Some(password.into_iter().collect())
    }
}

/// Uniform pick over the alphabet (rejection sampling, no modulo bias)
fn draw<R: Rng>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Whether placing `next` after `password` breaks the run limit.
///
/// Only checked once more than `MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS` characters
/// precede it, so the first three positions are never rejected.
fn extends_run(password: &[char], next: char) -> bool {
    let position = password.len();
    position > MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS
        && password[position - MAXIMUM_IDENTICAL_CONSECUTIVE_CHARS..].iter().all(|&c| c == next)
}
