//! Suggestion orchestrator: composes the threat sources under the fallback
//! policy.

use serde::{Deserialize, Serialize};
use vigil_core::{BaseThreat, Result, SystemDetails, VigilError};

use crate::source::ThreatSource;

/// Input to [`SuggestionOrchestrator::suggest_threats`] — the sole entry
/// point the view layer invokes.
///
/// # Examples
///
/// ```
/// use vigil_core::SystemDetails;
/// use vigil_suggest::SuggestRequest;
///
/// let request = SuggestRequest {
///     system_details: SystemDetails::new("A mobile banking backend").unwrap(),
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert!(json.get("systemDetails").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// The system to analyze. Length bounds are enforced by
    /// [`SystemDetails::new`] before this boundary.
    pub system_details: SystemDetails,
}

/// The authoritative threat list for a completed suggestion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    /// Candidate threats, in source order.
    pub threats: Vec<BaseThreat>,
}

/// Composes the curated intelligence source and the generative advisor
/// under a fixed fallback policy.
///
/// The policy privileges curated intelligence over generative suggestions:
/// the advisor runs only when the curated source fails or returns nothing.
/// The two source calls are strictly sequential; there is no parallel race
/// and no cancellation of an in-flight request.
pub struct SuggestionOrchestrator {
    intel: Box<dyn ThreatSource>,
    advisor: Box<dyn ThreatSource>,
}

impl SuggestionOrchestrator {
    /// Create an orchestrator over a curated source and an advisor.
    pub fn new(intel: Box<dyn ThreatSource>, advisor: Box<dyn ThreatSource>) -> Self {
        Self { intel, advisor }
    }

    /// Produce the authoritative threat list for a request.
    ///
    /// Algorithm, in fixed order:
    ///
    /// 1. Call the intelligence source. A non-empty result is returned
    ///    immediately and the advisor is never invoked.
    /// 2. On failure or an empty result, invoke the advisor exactly once.
    /// 3. If the advisor also fails to produce a non-empty, valid list, the
    ///    request fails with a generation error. The earlier intelligence
    ///    failure is an internal fallback trigger: it is logged, not
    ///    propagated.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::Generation`] when both sources fail to produce
    /// a usable result. Callers keep their previous triage state; a failed
    /// request installs nothing.
    pub async fn suggest_threats(&self, request: &SuggestRequest) -> Result<SuggestResponse> {
        let details = &request.system_details;

        match self.intel.threats(details).await {
            Ok(threats) if !threats.is_empty() => {
                return Ok(SuggestResponse { threats });
            }
            Ok(_) => {
                eprintln!(
                    "warning: {} returned no threats, falling back to {}",
                    self.intel.name(),
                    self.advisor.name()
                );
            }
            Err(e) => {
                eprintln!(
                    "warning: {} unavailable ({e}), falling back to {}",
                    self.intel.name(),
                    self.advisor.name()
                );
            }
        }

        let threats = self
            .advisor
            .threats(details)
            .await
            .map_err(|e| match e {
                VigilError::Generation(_) => e,
                other => VigilError::Generation(other.to_string()),
            })?;
        if threats.is_empty() {
            return Err(VigilError::Generation(format!(
                "{} produced no threat suggestions",
                self.advisor.name()
            )));
        }

        Ok(SuggestResponse { threats })
    }
}
