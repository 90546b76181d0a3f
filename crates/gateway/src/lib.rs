//! Backend gateway.
//!
//! This core consumes, but does not implement, a handful of backend
//! operations: the paginated item list, single-item and barcode lookups, the
//! shipment list, and move persistence. The [`Backend`] trait is that
//! boundary; [`HttpBackend`] is the HTTP rendition of it.

pub mod client;
pub mod config;
pub mod dto;

pub use client::{Backend, HttpBackend, ItemFilter};
pub use config::BackendConfig;
