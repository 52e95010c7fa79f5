//! Document expiry alert rules.
//!
//! Documents with an expiry date alert at exactly 30 and 7 days before it.
//! Documents without an expiry date never participate.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{Document, document};
use crate::errors::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying documents in the alert correlation key.
pub const RELATED_ENTITY_TYPE: &str = "Document";

/// Evaluates one document against the expiry threshold table.
///
/// A document with no expiry date is skipped outright.
#[must_use]
pub fn evaluate_document(doc: &document::Model, today: NaiveDate) -> Option<CandidateAlert> {
    let expiry = doc.expiry_date?;
    let distance = expiry.signed_duration_since(today).num_days();

    let (alert_type, severity, priority, title) = match distance {
        30 => (
            AlertType::Reminder,
            AlertSeverity::Medium,
            AlertPriority::Medium,
            "Document Expiring Soon",
        ),
        7 => (
            AlertType::Warning,
            AlertSeverity::High,
            AlertPriority::High,
            "Document Expiring This Week",
        ),
        _ => return None,
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Documents,
        severity,
        priority,
        title: title.to_string(),
        message: format!("{} expires in {distance} days", doc.title),
        description: None,
        related_entity_type: RELATED_ENTITY_TYPE.to_string(),
        related_entity_id: doc.id,
        related_entity_name: doc.title.clone(),
        action_url: Some(format!("/documents/{}", doc.id)),
        action_label: Some("View Document".to_string()),
    })
}

/// Generates document alerts for one household and returns the count written.
pub async fn generate_document_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();

    // Only documents with a future-dated expiry
    let documents = Document::find()
        .filter(document::Column::HouseholdId.eq(household_id))
        .filter(document::Column::IsDeleted.eq(false))
        .filter(document::Column::ExpiryDate.is_not_null())
        .filter(document::Column::ExpiryDate.gte(today))
        .all(db)
        .await?;

    let mut staged = Vec::new();
    for doc in documents {
        let Some(candidate) = evaluate_document(&doc, today) else {
            continue;
        };
        if dedup::alert_exists_today(
            db,
            household_id,
            &candidate.related_entity_type,
            candidate.related_entity_id,
            today,
        )
        .await?
        {
            continue;
        }
        staged.push(candidate);
    }

    writer::insert_alerts(db, household_id, staged, now).await
}
