//! Three-letter team codes.
//!
//! Codes are case-insensitive on input and always stored uppercase, so
//! `"bar"`, `"Bar"` and `"BAR"` all name the same team.

use std::fmt;

use crate::error::RosterError;

/// A canonical team code: exactly three ASCII letters, uppercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamCode([u8; 3]);

impl TeamCode {
    /// Parses and canonicalizes a team code.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidCode`] unless `text` is exactly three
    /// ASCII letters.
    pub fn new(text: &str) -> Result<Self, RosterError> {
        let bytes = text.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(RosterError::InvalidCode(text.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamCode({})", self.as_str())
    }
}

impl std::str::FromStr for TeamCode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for TeamCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TeamCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
