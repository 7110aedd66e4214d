use crate::{postcode::*, property::*};

/// A single row of the address reference dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub property_id: PropertyId,
    pub postcode: Postcode,
    /// Full display address
    pub address_text: String,
    /// Additional, partial address columns of the
    /// dataset, e.g. "FLAT A" or "1 EXAMPLE ROAD".
    pub address_lines: Vec<String>,
}

impl AddressRecord {
    /// All texts that are eligible for matching, the
    /// full address first. Empty address lines are skipped.
    pub fn match_texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.address_text.as_str()).chain(
            self.address_lines
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty()),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub record: AddressRecord,
    /// Similarity in the range [0, 1]
    pub score: f64,
}
