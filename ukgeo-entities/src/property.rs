use std::{fmt, num::ParseIntError, str::FromStr};

/// Unique Property Reference Number (UPRN).
///
/// Identifies a property across both reference datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u64);

impl PropertyId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn to_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for PropertyId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<PropertyId> for u64 {
    fn from(from: PropertyId) -> Self {
        from.0
    }
}

impl FromStr for PropertyId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
