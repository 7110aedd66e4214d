use crate::property::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRecord {
    pub property_id : PropertyId,
    pub easting     : f64, // OS National Grid
    pub northing    : f64, // OS National Grid
    pub latitude    : f64, // WGS84
    pub longitude   : f64, // WGS84
}
