use super::*;

/// Pick the display text of an EPC row.
///
/// The full address wins, the first line is used as a fallback.
fn address_text(row: &models::EpcAddress) -> String {
    [&row.address, &row.address1]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_default()
}

fn load_address_record(postcode: &Postcode, row: models::EpcAddress) -> Option<AddressRecord> {
    let raw_id = row.uprn.as_deref().unwrap_or_default();
    let property_id = match raw_id.parse::<PropertyId>() {
        Ok(id) => id,
        Err(err) => {
            log::warn!("Skipping EPC address with invalid UPRN '{raw_id}' at {postcode}: {err}");
            return None;
        }
    };
    let address_text = address_text(&row);
    let models::EpcAddress {
        uprn: _,
        address1,
        address2,
        address3,
        address: _,
    } = row;
    let address_lines = [address1, address2, address3]
        .into_iter()
        .flatten()
        .filter(|line| !line.is_empty())
        .collect();
    Some(AddressRecord {
        property_id,
        postcode: postcode.clone(),
        address_text,
        address_lines,
    })
}

impl AddressRepo for AddressDb {
    fn fetch_candidates_by_postcode(&self, postcode: &Postcode) -> Result<Vec<AddressRecord>> {
        use schema::epc_addresses::dsl;
        let rows = self.db.with_connection(|conn| {
            schema::epc_addresses::table
                .select((
                    dsl::uprn,
                    dsl::address1,
                    dsl::address2,
                    dsl::address3,
                    dsl::address,
                ))
                .filter(dsl::postcode.eq(postcode.as_str()))
                .filter(dsl::uprn.is_not_null())
                .filter(dsl::uprn.ne(""))
                .order_by(dsl::rowid)
                .load::<models::EpcAddress>(conn)
        })?;
        log::debug!("Found {} EPC addresses at {postcode}", rows.len());
        Ok(rows
            .into_iter()
            .filter_map(|row| load_address_record(postcode, row))
            .collect())
    }

    fn check_address_dataset(&self) -> Result<()> {
        self.db.validate_tables()
    }
}
