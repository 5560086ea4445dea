//! Variable sigils

use serde::{Deserialize, Serialize};

/// The sigil class a variable belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigilClass {
    Dollar,
    Pound,
}

impl SigilClass {
    /// Both classes, in the order their variables are listed
    pub const ALL: [SigilClass; 2] = [SigilClass::Dollar, SigilClass::Pound];

    /// The prefix character for this class
    pub fn as_char(&self) -> char {
        match self {
            SigilClass::Dollar => '$',
            SigilClass::Pound => '£',
        }
    }

    pub fn from_char(c: char) -> Option<SigilClass> {
        match c {
            '$' => Some(SigilClass::Dollar),
            '£' => Some(SigilClass::Pound),
            _ => None,
        }
    }

    /// Class of a sigil-prefixed token such as `$name`
    pub fn of_token(token: &str) -> Option<SigilClass> {
        token.chars().next().and_then(SigilClass::from_char)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SigilClass::Dollar => "dollar",
            SigilClass::Pound => "pound",
        }
    }
}

/// True for `$` and `£`
pub fn is_sigil(c: char) -> bool {
    SigilClass::from_char(c).is_some()
}

/// Identifier body characters: ASCII letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
