use super::prelude::*;

fn status_of(res: std::result::Result<(), crate::RepoError>) -> (bool, String) {
    match res {
        Ok(()) => (true, STATUS_OK.to_owned()),
        Err(err) => {
            log::warn!("Health check failed: {err}");
            (false, err.to_string())
        }
    }
}

/// Check both datasets independently.
///
/// Never fails, all errors are reported as status messages.
pub fn health_check<A, C>(addresses: &A, coordinates: &C) -> HealthStatus
where
    A: AddressRepo,
    C: CoordinateRepo,
{
    let (epc_ok, epc_status) = status_of(addresses.check_address_dataset());
    let (os_ok, os_status) = status_of(coordinates.check_coordinate_dataset());
    HealthStatus {
        healthy: epc_ok && os_ok,
        epc_status,
        os_status,
    }
}
