use crate::{entities::PostcodeParseError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid UK postcode: '{0}'")]
    InvalidPostcode(String),
    #[error("No match found for '{address}' at '{postcode}'")]
    NoMatchFound { postcode: String, address: String },
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Flat classification of all failures for blanket handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidPostcode,
    NoMatchFound,
    DatabaseNotFound,
    DatabaseInvalid,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPostcode(_) => ErrorKind::InvalidPostcode,
            Self::NoMatchFound { .. } => ErrorKind::NoMatchFound,
            Self::Repo(err) => match err {
                repositories::Error::DatabaseNotFound { .. } => ErrorKind::DatabaseNotFound,
                repositories::Error::DatabaseInvalid { .. } => ErrorKind::DatabaseInvalid,
                repositories::Error::Other(_) => ErrorKind::Other,
            },
        }
    }
}

impl From<PostcodeParseError> for Error {
    fn from(err: PostcodeParseError) -> Self {
        Self::InvalidPostcode(err.raw)
    }
}
