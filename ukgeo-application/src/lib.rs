use std::path::PathBuf;

use ukgeo_core::{entities::*, usecases};
use ukgeo_db_sqlite::{AddressDb, CoordinateDb};

pub use ukgeo_core::usecases::{Error, ErrorKind, DEFAULT_MATCH_THRESHOLD};
pub use ukgeo_db_sqlite::PoolOptions;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct GeolocatorOptions {
    pub match_threshold: f64,
    pub pool: PoolOptions,
}

impl Default for GeolocatorOptions {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            pool: PoolOptions::default(),
        }
    }
}

/// Resolves UK addresses to coordinates via their UPRN.
///
/// Both datasets are opened and validated on construction.
pub struct Geolocator {
    addresses: AddressDb,
    coordinates: CoordinateDb,
    match_threshold: f64,
}

impl Geolocator {
    pub fn open(
        epc_db: impl Into<PathBuf>,
        os_db: impl Into<PathBuf>,
        options: GeolocatorOptions,
    ) -> Result<Self> {
        let GeolocatorOptions {
            match_threshold,
            pool,
        } = options;
        let (epc_db, os_db) = (epc_db.into(), os_db.into());
        let addresses = AddressDb::open(&epc_db, pool.clone()).map_err(|err| {
            log::warn!("Failed to open addresses from '{}': {err}", epc_db.display());
            err
        })?;
        let coordinates = CoordinateDb::open(&os_db, pool).map_err(|err| {
            log::warn!("Failed to open coordinates from '{}': {err}", os_db.display());
            err
        })?;
        log::info!(
            "Geolocator ready (addresses = '{}', coordinates = '{}', threshold = {match_threshold})",
            epc_db.display(),
            os_db.display()
        );
        Ok(Self {
            addresses,
            coordinates,
            match_threshold,
        })
    }

    pub const fn match_threshold(&self) -> f64 {
        self.match_threshold
    }

    pub fn find_coordinates(&self, postcode: &str, address_line: &str) -> Result<LookupResult> {
        usecases::resolve(
            &self.addresses,
            &self.coordinates,
            postcode,
            address_line,
            self.match_threshold,
        )
        .map(|res| {
            log::debug!(
                "Resolved '{postcode}' / '{address_line}' to UPRN {} (score = {:.3})",
                res.property_id,
                res.match_score
            );
            res
        })
        .map_err(|err| {
            match err.kind() {
                ErrorKind::InvalidPostcode | ErrorKind::NoMatchFound => {
                    log::debug!("No coordinates for '{postcode}' / '{address_line}': {err}");
                }
                ErrorKind::DatabaseNotFound | ErrorKind::DatabaseInvalid | ErrorKind::Other => {
                    log::warn!("Failed to look up '{postcode}' / '{address_line}': {err}");
                }
            }
            err
        })
    }

    pub fn health_check(&self) -> HealthStatus {
        usecases::health_check(&self.addresses, &self.coordinates)
    }

    /// Release all database connections.
    ///
    /// Subsequent requests reopen the databases.
    pub fn close(&self) {
        if self.is_open() {
            log::debug!("Closing geolocator");
        }
        self.addresses.close();
        self.coordinates.close();
    }

    pub fn is_open(&self) -> bool {
        self.addresses.database().is_open() || self.coordinates.database().is_open()
    }
}

impl Drop for Geolocator {
    fn drop(&mut self) {
        self.close();
    }
}
