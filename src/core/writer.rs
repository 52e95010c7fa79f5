//! Alert persistence - commits a household/category batch of candidates.
//!
//! The writer only ever inserts. Every row is forced into the initial
//! lifecycle state (Active, unread, not dismissed) with `created_at` set to
//! the cycle's captured "now"; state transitions belong to the CRUD layer.

use crate::core::candidate::CandidateAlert;
use crate::entities::alert;
use crate::entities::alert::AlertStatus;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

/// Persists a batch of candidates for one household in a single transaction.
///
/// Returns the number of alerts written. A failure anywhere in the batch
/// rolls the whole batch back and surfaces the error to the calling rule
/// module; partial batches are never committed.
pub async fn insert_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    candidates: Vec<CandidateAlert>,
    now: DateTime<Utc>,
) -> Result<usize> {
    if candidates.is_empty() {
        return Ok(0);
    }

    let txn = db.begin().await?;
    let count = candidates.len();

    for candidate in candidates {
        let row = alert::ActiveModel {
            household_id: Set(household_id),
            alert_type: Set(candidate.alert_type),
            category: Set(candidate.category),
            severity: Set(candidate.severity),
            priority: Set(candidate.priority),
            title: Set(candidate.title),
            message: Set(candidate.message),
            description: Set(candidate.description),
            related_entity_type: Set(Some(candidate.related_entity_type)),
            related_entity_id: Set(Some(candidate.related_entity_id)),
            related_entity_name: Set(Some(candidate.related_entity_name)),
            status: Set(AlertStatus::Active),
            is_read: Set(false),
            is_dismissed: Set(false),
            created_at: Set(now),
            action_url: Set(candidate.action_url),
            action_label: Set(candidate.action_label),
            is_recurring: Set(false),
            ..Default::default()
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;
    Ok(count)
}
