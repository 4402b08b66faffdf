//! Character classes and alphabet assembly.

use crate::types::PasswordError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SPACE_CHARS: &str = " ";
pub const NUMERIC_CHARS: &str = "1234567890";
pub const SPECIAL_CHARS: &str = "-~`!@#$%^&*_+=|:;',.?";

// Unicode-aware: any decimal digit (Nd), not only ASCII
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").unwrap());

/// A named category of password characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Space,
    Numeric,
    Special,
}

impl CharacterClass {
    /// Every class, in the order their characters enter the alphabet
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Space,
        CharacterClass::Numeric,
        CharacterClass::Special,
    ];

    /// Literal characters this class contributes to the alphabet
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Space => SPACE_CHARS,
            CharacterClass::Numeric => NUMERIC_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }

    /// Whether `c` counts as a member of this class during validation.
    ///
    /// The space class accepts any whitespace and the numeric class any
    /// Unicode decimal digit, not only the characters they generate.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Space => c.is_whitespace(),
            CharacterClass::Numeric => DIGIT_REGEX.is_match(c.encode_utf8(&mut [0; 4])),
            CharacterClass::Special => SPECIAL_CHARS.contains(c),
        }
    }
}

/// One enable flag per character class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numeric: bool,
    pub special: bool,
    pub spaces: bool,
}

impl CharacterClasses {
    pub fn new(lowercase: bool, uppercase: bool, numeric: bool, special: bool, spaces: bool) -> Self {
        Self {
            lowercase,
            uppercase,
            numeric,
            special,
            spaces,
        }
    }

    /// Every class enabled
    pub fn all() -> Self {
        Self::new(true, true, true, true, true)
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Space => self.spaces,
            CharacterClass::Numeric => self.numeric,
            CharacterClass::Special => self.special,
        }
    }

    /// Enabled classes in alphabet order
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&class| self.is_enabled(class))
    }

    /// Concatenate the character sets of all enabled classes.
    ///
    /// Fails with `EmptyAlphabet` when every class is disabled.
    pub fn alphabet(&self) -> Result<Vec<char>, PasswordError> {
        let alphabet: Vec<char> = self.enabled().flat_map(|class| class.chars().chars()).collect();

        if alphabet.is_empty() {
            return Err(PasswordError::EmptyAlphabet);
        }

        Ok(alphabet)
    }
}
