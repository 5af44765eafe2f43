//! Threat suggestion pipeline: sources and the fallback orchestrator.
//!
//! Two [`ThreatSource`] implementations feed the pipeline: the curated
//! [`intel::IntelFeed`] and the generative [`advisor::LlmAdvisor`]. The
//! [`orchestrator::SuggestionOrchestrator`] composes them under a fixed
//! fallback policy — curated intelligence is authoritative when available,
//! and the advisor is consulted only when it is not.

pub mod advisor;
pub mod intel;
pub mod orchestrator;
pub mod prompt;
mod source;

pub use orchestrator::{SuggestRequest, SuggestResponse, SuggestionOrchestrator};
pub use source::ThreatSource;
