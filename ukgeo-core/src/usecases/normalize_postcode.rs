use super::prelude::*;

pub fn normalize_postcode(raw: &str) -> Result<Postcode> {
    Ok(raw.parse()?)
}
