use super::*;

fn load_coordinate_record(row: models::UprnCoordinate) -> Option<CoordinateRecord> {
    let models::UprnCoordinate {
        uprn,
        x_coordinate,
        y_coordinate,
        latitude,
        longitude,
    } = row;
    let property_id = u64::try_from(uprn).ok().map(PropertyId::new)?;
    match (x_coordinate, y_coordinate, latitude, longitude) {
        (Some(easting), Some(northing), Some(latitude), Some(longitude)) => {
            Some(CoordinateRecord {
                property_id,
                easting,
                northing,
                latitude,
                longitude,
            })
        }
        _ => {
            log::warn!("Incomplete coordinates for UPRN {property_id}");
            None
        }
    }
}

impl CoordinateRepo for CoordinateDb {
    fn fetch_coordinate_by_property_id(&self, id: PropertyId) -> Result<Option<CoordinateRecord>> {
        use schema::uprns::dsl;
        let Ok(uprn) = i64::try_from(id.to_u64()) else {
            // Not representable in the dataset
            return Ok(None);
        };
        let row = self.db.with_connection(|conn| {
            schema::uprns::table
                .filter(dsl::uprn.eq(uprn))
                .first::<models::UprnCoordinate>(conn)
                .optional()
        })?;
        Ok(row.and_then(load_coordinate_record))
    }

    fn check_coordinate_dataset(&self) -> Result<()> {
        self.db.validate_tables()
    }
}
