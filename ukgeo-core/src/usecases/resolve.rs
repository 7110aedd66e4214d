use super::{normalize_postcode, prelude::*, select_best_match};

/// Resolve a UK postcode and address line to coordinates.
///
/// The postcode must be valid, the best matching address
/// must reach the `threshold` and the matched property
/// must have coordinates. Otherwise no result is returned.
pub fn resolve<A, C>(
    addresses: &A,
    coordinates: &C,
    postcode_raw: &str,
    address_line: &str,
    threshold: f64,
) -> Result<LookupResult>
where
    A: AddressRepo,
    C: CoordinateRepo,
{
    let postcode = normalize_postcode(postcode_raw)?;
    let no_match_found = || Error::NoMatchFound {
        postcode: postcode.to_string(),
        address: address_line.to_owned(),
    };

    let candidates = addresses.fetch_candidates_by_postcode(&postcode)?;
    log::debug!(
        "Scoring {} candidate(s) at {postcode} against '{address_line}'",
        candidates.len()
    );

    let best = select_best_match(candidates, address_line, threshold).map_err(|err| {
        if let Some(score) = err.best_score {
            log::debug!("Best match score {score:.3} is below threshold {threshold}");
        }
        no_match_found()
    })?;
    log::debug!(
        "Matched '{}' (UPRN {}) with score {:.3}",
        best.record.address_text,
        best.record.property_id,
        best.score
    );

    let Some(coordinate) = coordinates.fetch_coordinate_by_property_id(best.record.property_id)?
    else {
        log::debug!("No coordinates for UPRN {}", best.record.property_id);
        return Err(no_match_found());
    };
    Ok(LookupResult::new(best, coordinate))
}
