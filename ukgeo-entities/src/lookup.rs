use std::fmt;

use crate::{address::*, coordinate::*, property::*};

const MATCH_SCORE_DECIMALS: i32 = 3;

/// Complete result of a postcode + address -> coordinate lookup.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub property_id     : PropertyId,
    pub matched_address : String,
    pub match_score     : f64, // 0.0-1.0 similarity confidence
    pub easting         : f64,
    pub northing        : f64,
    pub latitude        : f64,
    pub longitude       : f64,
}

impl LookupResult {
    /// Combine the winning candidate with its coordinates.
    ///
    /// Both records must refer to the same property.
    pub fn new(candidate: ScoredCandidate, coordinate: CoordinateRecord) -> Self {
        let ScoredCandidate { record, score } = candidate;
        debug_assert_eq!(record.property_id, coordinate.property_id);
        let CoordinateRecord {
            property_id: _,
            easting,
            northing,
            latitude,
            longitude,
        } = coordinate;
        Self {
            property_id: record.property_id,
            matched_address: record.address_text,
            match_score: score,
            easting,
            northing,
            latitude,
            longitude,
        }
    }

    pub fn rounded_match_score(&self) -> f64 {
        round_to_decimals(self.match_score, MATCH_SCORE_DECIMALS)
    }

    /// Ordered key/value view, e.g. for printing.
    ///
    /// Only the match score is rounded, all other values pass through.
    pub fn to_plain_mapping(&self) -> Vec<(&'static str, PlainValue)> {
        vec![
            ("uprn", PlainValue::Integer(self.property_id.to_u64())),
            (
                "matched_address",
                PlainValue::Text(self.matched_address.clone()),
            ),
            ("match_score", PlainValue::Float(self.rounded_match_score())),
            ("easting", PlainValue::Float(self.easting)),
            ("northing", PlainValue::Float(self.northing)),
            ("latitude", PlainValue::Float(self.latitude)),
            ("longitude", PlainValue::Float(self.longitude)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlainValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PlainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // Whole numbers keep a trailing ".0"
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
