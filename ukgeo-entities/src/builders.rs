pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_record_builder::*, coordinate_record_builder::*};

pub mod address_record_builder {

    use super::*;
    use crate::{address::*, property::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn property_id(mut self, id: u64) -> Self {
            self.record.property_id = id.into();
            self
        }
        pub fn postcode(mut self, postcode: &str) -> Self {
            self.record.postcode = postcode.parse().unwrap();
            self
        }
        pub fn address_text(mut self, text: &str) -> Self {
            self.record.address_text = text.into();
            self
        }
        pub fn address_lines(mut self, lines: Vec<impl Into<String>>) -> Self {
            self.record.address_lines = lines.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> Self::Build {
            Self::Build {
                record: AddressRecord {
                    property_id: PropertyId::new(0),
                    postcode: "SW1A 2AA".parse().unwrap(),
                    address_text: "".into(),
                    address_lines: vec![],
                },
            }
        }
    }
}

pub mod coordinate_record_builder {

    use super::*;
    use crate::coordinate::*;

    #[derive(Debug)]
    pub struct CoordinateRecordBuild {
        record: CoordinateRecord,
    }

    impl CoordinateRecordBuild {
        pub fn property_id(mut self, id: u64) -> Self {
            self.record.property_id = id.into();
            self
        }
        pub fn grid(mut self, easting: f64, northing: f64) -> Self {
            self.record.easting = easting;
            self.record.northing = northing;
            self
        }
        pub fn lat_lng(mut self, latitude: f64, longitude: f64) -> Self {
            self.record.latitude = latitude;
            self.record.longitude = longitude;
            self
        }
        pub fn finish(self) -> CoordinateRecord {
            self.record
        }
    }

    impl Builder for CoordinateRecord {
        type Build = CoordinateRecordBuild;
        fn build() -> Self::Build {
            Self::Build {
                record: CoordinateRecord {
                    property_id: 0.into(),
                    easting: 0.0,
                    northing: 0.0,
                    latitude: 0.0,
                    longitude: 0.0,
                },
            }
        }
    }
}
