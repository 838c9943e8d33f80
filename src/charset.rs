//! Character classes - classification of passwords and random draws per class.

use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?\"'/\\`~";

/// Digits, lowercase, uppercase and special symbols, in that order.
const ALL_SYMBOLS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-=[]{}|;:,.<>?\"'/\\`~";

/// The four character classes a password is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    Lower,
    Upper,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Special,
    ];

    /// Number of symbols this class contributes to the alphabet size.
    pub const fn size(self) -> usize {
        match self {
            CharClass::Digit => 10,
            CharClass::Lower => 26,
            CharClass::Upper => 26,
            CharClass::Special => 32,
        }
    }

    /// ASCII symbols drawn from when generating characters of this class.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Special => SPECIAL,
        }
    }

    /// Classifies a single character.
    ///
    /// Precedence is digit, lowercase, uppercase, then special for anything
    /// that is not alphanumeric. Letters and digits outside ASCII map to `None`.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if !c.is_alphanumeric() {
            Some(CharClass::Special)
        } else {
            None
        }
    }

    /// Draws one uniformly random character of this class.
    pub fn random_char<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        let alphabet = self.alphabet();
        alphabet[rng.random_range(0..alphabet.len())] as char
    }
}

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub has_digit: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_special: bool,
}

impl CharacterClasses {
    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Digit => self.has_digit,
            CharClass::Lower => self.has_lower,
            CharClass::Upper => self.has_upper,
            CharClass::Special => self.has_special,
        }
    }

    fn insert(&mut self, class: CharClass) {
        match class {
            CharClass::Digit => self.has_digit = true,
            CharClass::Lower => self.has_lower = true,
            CharClass::Upper => self.has_upper = true,
            CharClass::Special => self.has_special = true,
        }
    }

    pub fn count(&self) -> usize {
        CharClass::ALL.iter().filter(|&&c| self.contains(c)).count()
    }
}

/// Scans the password once and flags every character class it contains.
///
/// An empty string yields no flags.
pub fn classify(password: &str) -> CharacterClasses {
    let mut classes = CharacterClasses::default();
    for class in password.chars().filter_map(CharClass::of) {
        classes.insert(class);
    }
    classes
}

/// Draws one character from the union of all four class alphabets.
pub fn random_any<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALL_SYMBOLS[rng.random_range(0..ALL_SYMBOLS.len())] as char
}

/// Draws a four character block: lowercase, uppercase, digit, special.
pub fn random_block<R: Rng + ?Sized>(rng: &mut R) -> String {
    [CharClass::Lower, CharClass::Upper, CharClass::Digit, CharClass::Special]
        .into_iter()
        .map(|class| class.random_char(rng))
        .collect()
}
