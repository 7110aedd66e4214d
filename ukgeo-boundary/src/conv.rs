use super::*;
use ukgeo_entities as e;

impl From<e::lookup::LookupResult> for LookupResult {
    fn from(from: e::lookup::LookupResult) -> Self {
        let match_score = from.rounded_match_score();
        let e::lookup::LookupResult {
            property_id,
            matched_address,
            match_score: _,
            easting,
            northing,
            latitude,
            longitude,
        } = from;
        Self {
            uprn: property_id.into(),
            matched_address,
            match_score,
            easting,
            northing,
            latitude,
            longitude,
        }
    }
}

impl From<e::health::HealthStatus> for HealthStatus {
    fn from(from: e::health::HealthStatus) -> Self {
        let e::health::HealthStatus {
            healthy,
            epc_status,
            os_status,
        } = from;
        Self {
            healthy,
            epc_status,
            os_status,
        }
    }
}
