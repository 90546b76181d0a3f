//! Operator-station orchestration.
//!
//! Composes the domain crates over a [`tradewind_gateway::Backend`]: the
//! list/enrich pipeline, scan dispatch, and move submission. The screen
//! layer driving a station is an external collaborator.

pub mod station;

pub use station::{ScanOutcome, Station};
