//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::Serialize;

/// Identifier of a phone in the catalog.
///
/// Ids are positive integers assigned by the catalog; they are what clients
/// see on the wire (`"id": 4`, `"phoneId": 4`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneId(u64);

impl PhoneId {
    /// Never handed out by the catalog; stands in for ids that are absent or unparsable.
    pub const UNASSIGNED: PhoneId = PhoneId(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for PhoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PhoneId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_segments() {
        assert_eq!("7".parse::<PhoneId>().unwrap(), PhoneId::new(7));
        assert!("abc".parse::<PhoneId>().is_err());
        assert!("-1".parse::<PhoneId>().is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&PhoneId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
