//! Triage state and aggregation engine.
//!
//! Consumes the suggestion pipeline's output: base threats are lifted into
//! tracked entries by [`factory::materialize`], held in a [`TriageStore`],
//! and summarized by the read-only aggregation functions in [`stats`].

pub mod factory;
pub mod stats;
mod store;

pub use factory::materialize;
pub use stats::Dashboard;
pub use store::TriageStore;
