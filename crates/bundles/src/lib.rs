//! Combined-shipment (bundle) domain module.
//!
//! Pure cross-reference matching between inventory items and shipment
//! records; no IO. The best-effort fetch-and-enrich pipeline around it lives
//! in the station crate.

pub mod matcher;

pub use matcher::{BundleShipment, BundledItemRef, annotate};
