use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A resolved address with its coordinates.
///
/// The match score is rounded to 3 decimals.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LookupResult {
    pub uprn            : u64,
    pub matched_address : String,
    pub match_score     : f64,
    pub easting         : f64,
    pub northing        : f64,
    pub latitude        : f64,
    pub longitude       : f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HealthStatus {
    pub healthy: bool,
    pub epc_status: String,
    pub os_status: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    /// Machine readable failure kind, e.g. `"no_match_found"`
    pub kind: String,
    pub message: String,
}
