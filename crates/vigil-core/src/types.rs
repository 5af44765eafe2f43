use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VigilError;

/// Minimum accepted length of a system description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Maximum accepted length of a system description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Free-text description of the system under analysis.
///
/// This is the sole input to the suggestion pipeline. Length bounds are
/// enforced at construction, before the description crosses into the core.
///
/// # Examples
///
/// ```
/// use vigil_core::SystemDetails;
///
/// let details = SystemDetails::new("A web app with a Postgres database").unwrap();
/// assert!(details.description.contains("Postgres"));
///
/// assert!(SystemDetails::new("too short").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDetails {
    /// Description of the system: architecture, technologies, data flow,
    /// user types.
    pub description: String,
}

impl SystemDetails {
    /// Validate and wrap a system description.
    ///
    /// # Errors
    ///
    /// Returns [`VigilError::InvalidInput`] if the description is shorter
    /// than [`MIN_DESCRIPTION_CHARS`] or longer than
    /// [`MAX_DESCRIPTION_CHARS`].
    pub fn new(description: impl Into<String>) -> Result<Self, VigilError> {
        let description = description.into();
        let len = description.chars().count();
        if len < MIN_DESCRIPTION_CHARS {
            return Err(VigilError::InvalidInput(format!(
                "system description must be at least {MIN_DESCRIPTION_CHARS} characters, got {len}"
            )));
        }
        if len > MAX_DESCRIPTION_CHARS {
            return Err(VigilError::InvalidInput(format!(
                "system description must be at most {MAX_DESCRIPTION_CHARS} characters, got {len}"
            )));
        }
        Ok(Self { description })
    }
}

/// A candidate threat as produced by a threat source.
///
/// Source-agnostic and immutable: both fields are non-empty, and a base
/// threat carries no triage state until it is materialized into a
/// [`TrackedThreat`].
///
/// # Examples
///
/// ```
/// use vigil_core::BaseThreat;
///
/// let threat = BaseThreat {
///     name: "SQL Injection".into(),
///     description: "Code injection against the database layer.".into(),
/// };
/// assert_eq!(threat.name, "SQL Injection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseThreat {
    /// Concise name of the threat (e.g. "SQL Injection").
    pub name: String,
    /// Brief explanation of the threat and how it applies to the system.
    pub description: String,
}

/// Triage status of a tracked threat.
///
/// A closed set: every consumer matches exhaustively, so adding a status is
/// a compile-time-visible change. All transitions are legal — triage in
/// practice is non-linear, and an analyst may revert a resolved item.
///
/// # Examples
///
/// ```
/// use vigil_core::TriageStatus;
///
/// let s: TriageStatus = serde_json::from_str("\"inProgress\"").unwrap();
/// assert_eq!(s, TriageStatus::InProgress);
/// assert_eq!(s.to_string(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriageStatus {
    /// Awaiting initial triage. Every tracked threat starts here.
    Pending,
    /// Reviewed and classified by an analyst.
    Triaged,
    /// Actively being worked on.
    InProgress,
    /// Mitigated or closed.
    Resolved,
}

impl TriageStatus {
    /// All statuses in canonical order: Pending, Triaged, In Progress,
    /// Resolved. Distribution output follows this order.
    pub const ALL: [TriageStatus; 4] = [
        TriageStatus::Pending,
        TriageStatus::Triaged,
        TriageStatus::InProgress,
        TriageStatus::Resolved,
    ];
}

impl fmt::Display for TriageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriageStatus::Pending => write!(f, "Pending"),
            TriageStatus::Triaged => write!(f, "Triaged"),
            TriageStatus::InProgress => write!(f, "In Progress"),
            TriageStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for TriageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "pending" => Ok(TriageStatus::Pending),
            "triaged" => Ok(TriageStatus::Triaged),
            "inprogress" => Ok(TriageStatus::InProgress),
            "resolved" => Ok(TriageStatus::Resolved),
            other => Err(format!("unknown triage status: {other}")),
        }
    }
}

/// A threat under triage: a [`BaseThreat`] enriched with identity, status,
/// and assignee.
///
/// The `id` is generated once at materialization and never reused or
/// mutated; `status` and `assignee` are the only mutable fields, changed
/// exclusively through the triage store.
///
/// # Examples
///
/// ```
/// use vigil_core::{TrackedThreat, TriageStatus};
///
/// let threat = TrackedThreat {
///     id: "threat-1".into(),
///     name: "Phishing".into(),
///     description: "Credential harvesting via forged messages.".into(),
///     status: TriageStatus::Pending,
///     assignee: None,
/// };
/// assert!(threat.assignee.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedThreat {
    /// Unique identifier within a triage session.
    pub id: String,
    /// Name of the threat.
    pub name: String,
    /// Description of the threat.
    pub description: String,
    /// Current triage status.
    pub status: TriageStatus,
    /// Assigned analyst, or `None` if unassigned.
    pub assignee: Option<String>,
}

/// Summary counts for the dashboard, derived from the live threat set.
///
/// Never stored: always recomputed from a snapshot, so
/// `pending + triaged + in_progress + resolved == total` holds for every
/// reachable state.
///
/// # Examples
///
/// ```
/// use vigil_core::DashboardSummary;
///
/// let summary = DashboardSummary {
///     total: 3,
///     pending: 1,
///     triaged: 1,
///     in_progress: 0,
///     resolved: 1,
/// };
/// assert_eq!(
///     summary.pending + summary.triaged + summary.in_progress + summary.resolved,
///     summary.total
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total tracked threats.
    pub total: usize,
    /// Threats awaiting initial triage.
    pub pending: usize,
    /// Threats reviewed and classified.
    pub triaged: usize,
    /// Threats actively worked on.
    pub in_progress: usize,
    /// Threats mitigated or closed.
    pub resolved: usize,
}

/// One category/count pair in a dashboard distribution.
///
/// Zero-count categories are always present, so downstream rendering is
/// stable across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    /// Category label: a status name or an analyst identity.
    pub category: String,
    /// Number of threats in the category.
    pub count: usize,
}

/// Output format for CLI subcommands.
///
/// Implements [`FromStr`] so it can be used directly with `clap` argument
/// parsing.
///
/// # Examples
///
/// ```
/// use vigil_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
///
/// let fmt: OutputFormat = "md".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Markdown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables and summaries.
    #[default]
    Text,
    /// Machine-readable JSON with camelCase keys.
    Json,
    /// Markdown-formatted output.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
