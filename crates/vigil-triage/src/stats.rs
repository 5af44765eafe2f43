//! Read-only aggregation over a triage snapshot.
//!
//! Pure folds: nothing here mutates the store, and every result is
//! recomputable from the live set at any time.

use serde::Serialize;
use vigil_core::{DashboardSummary, DistributionEntry, TrackedThreat, TriageConfig, TriageStatus};

/// Full dashboard payload: summary plus both categorical distributions.
///
/// # Examples
///
/// ```
/// use vigil_core::TriageConfig;
/// use vigil_triage::stats;
///
/// let dashboard = stats::dashboard(&[], &TriageConfig::default());
/// assert_eq!(dashboard.summary.total, 0);
/// assert_eq!(dashboard.status_distribution.len(), 4);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Counts per status plus total.
    pub summary: DashboardSummary,
    /// One entry per status, canonical order.
    pub status_distribution: Vec<DistributionEntry>,
    /// One entry per configured analyst plus the unassigned sentinel.
    pub assignee_distribution: Vec<DistributionEntry>,
}

/// Count threats per status.
///
/// `pending + triaged + in_progress + resolved == total` holds for every
/// snapshot, since each threat carries exactly one status.
pub fn summary(threats: &[TrackedThreat]) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total: threats.len(),
        ..DashboardSummary::default()
    };
    for threat in threats {
        match threat.status {
            TriageStatus::Pending => summary.pending += 1,
            TriageStatus::Triaged => summary.triaged += 1,
            TriageStatus::InProgress => summary.in_progress += 1,
            TriageStatus::Resolved => summary.resolved += 1,
        }
    }
    summary
}

/// Distribution of threats over the four statuses.
///
/// Always yields one entry per status in canonical order (Pending, Triaged,
/// In Progress, Resolved); zero-count statuses are present so downstream
/// rendering is stable across snapshots.
pub fn status_distribution(threats: &[TrackedThreat]) -> Vec<DistributionEntry> {
    TriageStatus::ALL
        .iter()
        .map(|status| DistributionEntry {
            category: status.to_string(),
            count: threats.iter().filter(|t| t.status == *status).count(),
        })
        .collect()
}

/// Distribution of threats over the configured analyst roster.
///
/// Yields one entry per analyst in roster order, then the unassigned
/// sentinel last. Analysts with zero assigned threats are present. A threat
/// assigned to an identity outside the roster counts toward no roster entry;
/// the roster is the rendering contract.
pub fn assignee_distribution(
    threats: &[TrackedThreat],
    config: &TriageConfig,
) -> Vec<DistributionEntry> {
    let mut entries: Vec<DistributionEntry> = config
        .analysts
        .iter()
        .map(|analyst| DistributionEntry {
            category: analyst.clone(),
            count: threats
                .iter()
                .filter(|t| t.assignee.as_deref() == Some(analyst.as_str()))
                .count(),
        })
        .collect();

    entries.push(DistributionEntry {
        category: config.unassigned_label.clone(),
        count: threats.iter().filter(|t| t.assignee.is_none()).count(),
    });

    entries
}

/// Assemble the full dashboard payload from one snapshot.
pub fn dashboard(threats: &[TrackedThreat], config: &TriageConfig) -> Dashboard {
    Dashboard {
        summary: summary(threats),
        status_distribution: status_distribution(threats),
        assignee_distribution: assignee_distribution(threats, config),
    }
}
