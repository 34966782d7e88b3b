//! The persisted counter value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a counter from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCounterError {
    /// Nothing left after trimming.
    #[error("value is empty")]
    Empty,

    /// A character other than an ASCII digit was found.
    #[error("value contains a non-digit character")]
    InvalidDigit,

    /// The digits describe a number larger than the counter can hold.
    #[error("value exceeds the counter range")]
    Overflow,
}

/// A non-negative counter persisted as decimal ASCII text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter(u128);

impl Counter {
    /// Creates a counter with the given value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Returns the next counter value, or `None` on overflow.
    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u128> for Counter {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Counter {
    type Err = ParseCounterError;

    /// Parses already-trimmed text. Only ASCII digits are accepted, so signs,
    /// separators and inner whitespace are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCounterError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCounterError::InvalidDigit);
        }

        // Only digits remain, so the sole failure mode is overflow
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| ParseCounterError::Overflow)
    }
}
