mod error;
mod health_check;
mod normalize_postcode;
mod resolve;
mod select_best_match;


/// Minimum similarity of an accepted match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.45;

pub use self::{
    error::{Error, ErrorKind},
    health_check::*,
    normalize_postcode::*,
    resolve::*,
    select_best_match::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
