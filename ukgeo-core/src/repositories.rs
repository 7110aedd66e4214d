// Low-level access traits for the two reference datasets.
// Both are read-only: the resolution logic never
// modifies any record.

use crate::entities::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{dataset} database not found at: {}", path.display())]
    DatabaseNotFound { dataset: Dataset, path: PathBuf },
    #[error("Invalid database at {}: {detail}", path.display())]
    DatabaseInvalid { path: PathBuf, detail: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    // Candidates in the order they are stored
    fn fetch_candidates_by_postcode(&self, postcode: &Postcode) -> Result<Vec<AddressRecord>>;

    // Presence check of the expected structure
    fn check_address_dataset(&self) -> Result<()>;
}

pub trait CoordinateRepo {
    fn fetch_coordinate_by_property_id(&self, id: PropertyId) -> Result<Option<CoordinateRecord>>;

    // Presence check of the expected structure
    fn check_coordinate_dataset(&self) -> Result<()>;
}
