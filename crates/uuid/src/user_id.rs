//! The [`UserId`] type.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Identifier of a single user record.
///
/// Once constructed, the contained value is a valid 128-bit UUID. Fresh identifiers come from
/// [`UserId::new`]; identifiers supplied from outside (for example, an HTTP path segment) must go
/// through [`UserId::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(Uuid);

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl UserId {
    /// Generates a new random identifier (RFC 4122 version 4).
    ///
    /// Draws from the process-wide random source; collisions are negligible.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an externally supplied identifier.
    ///
    /// # Arguments
    ///
    /// * `input` - Candidate identifier in any standard UUID spelling.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not a valid UUID.
    pub fn parse(input: &str) -> UuidResult<Self> {
        Uuid::parse_str(input).map(Self).map_err(|e| {
            UuidError::InvalidInput(format!("'{}' is not a valid UUID: {}", input, e))
        })
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for UserId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}
