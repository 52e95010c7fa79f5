//! Candidate alerts - fully-computed but not-yet-persisted alert values.
//!
//! Rule modules evaluate each domain record into `Option<CandidateAlert>`:
//! `None` when no threshold matches, `Some` when exactly one does. Keeping
//! the decision a pure value makes every threshold table unit-testable
//! without touching the write path.

use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};

/// A fully-computed alert awaiting deduplication and persistence.
///
/// Carries every classification and content field; identity, lifecycle state
/// and `created_at` are assigned by the writer at persistence time.
#[derive(Debug, Clone)]
pub struct CandidateAlert {
    /// Kind of notification
    pub alert_type: AlertType,
    /// Originating domain category
    pub category: AlertCategory,
    /// Seriousness of the condition
    pub severity: AlertSeverity,
    /// Client-facing priority tier
    pub priority: AlertPriority,
    /// Short headline
    pub title: String,
    /// Human-readable summary
    pub message: String,
    /// Optional long-form detail
    pub description: Option<String>,
    /// Kind of the source record, half of the dedup key
    pub related_entity_type: String,
    /// Id of the source record, the other half of the dedup key
    pub related_entity_id: i64,
    /// Denormalized display name of the source record
    pub related_entity_name: String,
    /// Deep link hint for a client
    pub action_url: Option<String>,
    /// Label to show on the action link
    pub action_label: Option<String>,
}
