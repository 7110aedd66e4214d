use diesel::prelude::*;

use ukgeo_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;
mod coordinate;

type Result<T> = std::result::Result<T, repo::Error>;
