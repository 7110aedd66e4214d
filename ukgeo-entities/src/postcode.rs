use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt, str::FromStr};
use thiserror::Error;

lazy_static! {
    static ref OUTWARD_CODE: Regex = Regex::new(r"^[A-Z]{1,2}[0-9][0-9A-Z]?$").unwrap();
    static ref INWARD_CODE: Regex = Regex::new(r"^[0-9][A-Z]{2}$").unwrap();
}

const INWARD_CODE_LEN: usize = 3;
const MIN_LEN: usize = 5;
const MAX_LEN: usize = 7;

/// A UK postcode in canonical `"OUTWARD INWARD"` form, e.g. `"SW1A 2AA"`.
///
/// Can only be obtained by parsing, which guarantees that
/// the wrapped string always matches the UK postcode grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Postcode {
    canonical: String,
    // Byte offset of the separating space
    split_at: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid UK postcode: '{raw}'")]
pub struct PostcodeParseError {
    /// The rejected input, verbatim
    pub raw: String,
}

impl Postcode {
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn outward(&self) -> &str {
        &self.canonical[..self.split_at]
    }

    pub fn inward(&self) -> &str {
        &self.canonical[self.split_at + 1..]
    }
}

/// Strip all whitespace, upper-case and split into
/// outward and inward code without any repair.
fn split_codes(raw: &str) -> Option<(String, String)> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if !compact.is_ascii() || !(MIN_LEN..=MAX_LEN).contains(&compact.len()) {
        return None;
    }
    let (outward, inward) = compact.split_at(compact.len() - INWARD_CODE_LEN);
    if !INWARD_CODE.is_match(inward) || !OUTWARD_CODE.is_match(outward) {
        return None;
    }
    Some((outward.to_owned(), inward.to_owned()))
}

pub fn is_valid_postcode(raw: &str) -> bool {
    split_codes(raw).is_some()
}

impl FromStr for Postcode {
    type Err = PostcodeParseError;
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (outward, inward) = split_codes(raw).ok_or_else(|| PostcodeParseError {
            raw: raw.to_owned(),
        })?;
        Ok(Self {
            split_at: outward.len(),
            canonical: format!("{outward} {inward}"),
        })
    }
}

impl AsRef<str> for Postcode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Postcode> for String {
    fn from(from: Postcode) -> Self {
        from.canonical
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
