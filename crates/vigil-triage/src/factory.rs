//! Lifts base threats into tracked triage records.

use vigil_core::{BaseThreat, TrackedThreat, TriageStatus};

/// Materialize base threats into tracked threats ready for triage.
///
/// Pure and synchronous. Each entry receives a process-unique identifier, an
/// initial status of [`TriageStatus::Pending`], and no assignee. Output order
/// mirrors input order; list rendering depends on it being deterministic.
///
/// # Examples
///
/// ```
/// use vigil_core::{BaseThreat, TriageStatus};
/// use vigil_triage::materialize;
///
/// let base = vec![BaseThreat {
///     name: "Phishing".into(),
///     description: "Credential harvesting.".into(),
/// }];
/// let tracked = materialize(base);
/// assert_eq!(tracked.len(), 1);
/// assert_eq!(tracked[0].status, TriageStatus::Pending);
/// assert!(tracked[0].assignee.is_none());
/// ```
pub fn materialize(threats: Vec<BaseThreat>) -> Vec<TrackedThreat> {
    threats
        .into_iter()
        .map(|base| TrackedThreat {
            id: format!("threat-{}", uuid::Uuid::new_v4()),
            name: base.name,
            description: base.description,
            status: TriageStatus::Pending,
            assignee: None,
        })
        .collect()
}
