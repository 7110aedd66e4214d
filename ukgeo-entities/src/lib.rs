#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # ukgeo-entities
//!
//! Reusable, agnostic domain entities for ukgeolocate.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod coordinate;
pub mod dataset;
pub mod health;
pub mod lookup;
pub mod postcode;
pub mod property;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
