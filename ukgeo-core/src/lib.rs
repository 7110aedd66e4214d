pub mod repositories;
pub mod similarity;
pub mod text;
pub mod usecases;

pub mod entities {
    pub use ukgeo_entities::{
        address::*, coordinate::*, dataset::*, health::*, lookup::*, postcode::*, property::*,
    };
}

pub use self::repositories::Error as RepoError;
