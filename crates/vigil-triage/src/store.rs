use vigil_core::{TrackedThreat, TriageStatus};

/// In-memory store holding the current set of tracked threats.
///
/// The store exclusively owns the authoritative set for a triage session.
/// It is a flat set keyed by id, preserving insertion order for stable
/// rendering. Single-writer by design: one active session mutates, readers
/// take snapshots after mutation completes.
///
/// Every status transition is legal — triage is non-linear, and an analyst
/// may move a resolved item straight back to pending.
///
/// # Examples
///
/// ```
/// use vigil_core::{BaseThreat, TriageStatus};
/// use vigil_triage::{materialize, TriageStore};
///
/// let mut store = TriageStore::new();
/// store.replace_all(materialize(vec![BaseThreat {
///     name: "DoS".into(),
///     description: "Flooding.".into(),
/// }]));
///
/// let id = store.threats()[0].id.clone();
/// assert!(store.set_status(&id, TriageStatus::Resolved));
/// assert!(!store.set_status("no-such-id", TriageStatus::Resolved));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriageStore {
    threats: Vec<TrackedThreat>,
}

impl TriageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current set and install `threats` wholesale.
    ///
    /// Called once per completed analysis; there is no merging across
    /// requests. A stale in-flight suggestion request that resolves after a
    /// newer one will overwrite it — a known limitation, as no request
    /// tokening or cancellation exists.
    pub fn replace_all(&mut self, threats: Vec<TrackedThreat>) {
        self.threats = threats;
    }

    /// Update the status of the threat with `id`, leaving all other fields
    /// untouched.
    ///
    /// Returns `false` without mutating anything if `id` is not present —
    /// a mutation miss is a no-op, never an error.
    pub fn set_status(&mut self, id: &str, status: TriageStatus) -> bool {
        match self.threats.iter_mut().find(|t| t.id == id) {
            Some(threat) => {
                threat.status = status;
                true
            }
            None => false,
        }
    }

    /// Update the assignee of the threat with `id`. `None` means
    /// unassigned; the sentinel label maps to `None` at the view boundary,
    /// never to a literal string here.
    ///
    /// Same miss contract as [`TriageStore::set_status`].
    pub fn set_assignee(&mut self, id: &str, assignee: Option<String>) -> bool {
        match self.threats.iter_mut().find(|t| t.id == id) {
            Some(threat) => {
                threat.assignee = assignee;
                true
            }
            None => false,
        }
    }

    /// Current snapshot of the tracked set, in insertion order.
    pub fn threats(&self) -> &[TrackedThreat] {
        &self.threats
    }

    /// Number of tracked threats.
    pub fn len(&self) -> usize {
        self.threats.len()
    }

    /// Returns `true` if no threats are tracked.
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use vigil_core::BaseThreat;

    use crate::factory::materialize;

    use super::*;

    fn populated(names: &[&str]) -> TriageStore {
        let mut store = TriageStore::new();
        store.replace_all(materialize(
            names
                .iter()
                .map(|n| BaseThreat {
                    name: (*n).into(),
                    description: format!("{n} description"),
                })
                .collect(),
        ));
        store
    }

    #[test]
    fn replace_all_discards_previous_set() {
        let mut store = populated(&["A", "B"]);
        let old_ids: Vec<String> = store.threats().iter().map(|t| t.id.clone()).collect();

        store.replace_all(materialize(vec![BaseThreat {
            name: "C".into(),
            description: "new".into(),
        }]));

        assert_eq!(store.len(), 1);
        assert_eq!(store.threats()[0].name, "C");
        for id in old_ids {
            assert!(!store.set_status(&id, TriageStatus::Resolved));
        }
    }

    #[test]
    fn set_status_updates_in_place() {
        let mut store = populated(&["A", "B"]);
        let id = store.threats()[1].id.clone();
        let before = store.threats()[1].clone();

        assert!(store.set_status(&id, TriageStatus::InProgress));

        let after = &store.threats()[1];
        assert_eq!(after.status, TriageStatus::InProgress);
        assert_eq!(after.name, before.name);
        assert_eq!(after.assignee, before.assignee);
        assert_eq!(after.id, before.id);
        // The sibling entry is untouched.
        assert_eq!(store.threats()[0].status, TriageStatus::Pending);
    }

    #[test]
    fn any_status_may_move_to_any_other() {
        let mut store = populated(&["A"]);
        let id = store.threats()[0].id.clone();

        for status in TriageStatus::ALL {
            assert!(store.set_status(&id, status));
            assert_eq!(store.threats()[0].status, status);
        }
        // Reverting a resolved item is legal.
        assert!(store.set_status(&id, TriageStatus::Pending));
        assert_eq!(store.threats()[0].status, TriageStatus::Pending);
    }

    #[test]
    fn set_assignee_roundtrip() {
        let mut store = populated(&["A"]);
        let id = store.threats()[0].id.clone();

        assert!(store.set_assignee(&id, Some("Alice".into())));
        assert_eq!(store.threats()[0].assignee.as_deref(), Some("Alice"));

        assert!(store.set_assignee(&id, None));
        assert!(store.threats()[0].assignee.is_none());
    }

    #[test]
    fn mutation_miss_is_a_silent_noop() {
        let mut store = populated(&["A"]);
        let snapshot = store.threats().to_vec();

        assert!(!store.set_status("missing", TriageStatus::Resolved));
        assert!(!store.set_assignee("missing", Some("Alice".into())));
        assert_eq!(store.threats(), snapshot.as_slice());
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = TriageStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.threats().is_empty());
    }
}
