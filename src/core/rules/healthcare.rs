//! Healthcare alert rules: upcoming appointments and medication refills.
//!
//! Appointments alert at exactly 7, 3 and 1 days before the visit; past
//! visits never alert. Medication refills are a count threshold, not a date:
//! an active prescription with 2 or fewer refills remaining alerts every day
//! until it is refilled. Both kinds are staged into one Healthcare batch.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{Appointment, Medication, appointment, medication};
use crate::errors::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying appointments in the alert correlation key.
pub const APPOINTMENT_ENTITY_TYPE: &str = "Appointment";
/// Tag identifying medications in the alert correlation key.
pub const MEDICATION_ENTITY_TYPE: &str = "Medication";

/// Refill count at or below which a refill alert fires.
const REFILL_THRESHOLD: i32 = 2;

/// Evaluates one appointment against the lead-time threshold table.
#[must_use]
pub fn evaluate_appointment(
    appt: &appointment::Model,
    today: NaiveDate,
) -> Option<CandidateAlert> {
    let distance = appt.appointment_date.signed_duration_since(today).num_days();

    let (alert_type, severity, priority, title, lead) = match distance {
        7 => (
            AlertType::Reminder,
            AlertSeverity::Medium,
            AlertPriority::Medium,
            "Appointment Next Week",
            "in 7 days",
        ),
        3 => (
            AlertType::Reminder,
            AlertSeverity::High,
            AlertPriority::High,
            "Appointment This Week",
            "in 3 days",
        ),
        1 => (
            AlertType::Warning,
            AlertSeverity::High,
            AlertPriority::High,
            "Appointment Tomorrow",
            "tomorrow",
        ),
        _ => return None,
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Healthcare,
        severity,
        priority,
        title: title.to_string(),
        message: format!(
            "Appointment with {} {lead} at {}",
            appt.provider_name, appt.appointment_time
        ),
        description: None,
        related_entity_type: APPOINTMENT_ENTITY_TYPE.to_string(),
        related_entity_id: appt.id,
        related_entity_name: appt.provider_name.clone(),
        action_url: Some(format!("/appointments/{}", appt.id)),
        action_label: Some("View Appointment".to_string()),
    })
}

/// Evaluates one medication against the refill-count threshold.
#[must_use]
pub fn evaluate_medication(med: &medication::Model) -> Option<CandidateAlert> {
    if !med.is_active || med.refills_remaining > REFILL_THRESHOLD {
        return None;
    }

    Some(CandidateAlert {
        alert_type: AlertType::Warning,
        category: AlertCategory::Healthcare,
        severity: AlertSeverity::Medium,
        priority: AlertPriority::Medium,
        title: "Prescription Refill Needed".to_string(),
        message: format!(
            "{} has {} refill(s) remaining",
            med.name, med.refills_remaining
        ),
        description: None,
        related_entity_type: MEDICATION_ENTITY_TYPE.to_string(),
        related_entity_id: med.id,
        related_entity_name: med.name.clone(),
        action_url: Some(format!("/medications/{}", med.id)),
        action_label: Some("View Medication".to_string()),
    })
}

/// Generates healthcare alerts for one household and returns the count written.
pub async fn generate_healthcare_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();
    let mut staged = Vec::new();

    // Future-dated appointments only
    let appointments = Appointment::find()
        .filter(appointment::Column::HouseholdId.eq(household_id))
        .filter(appointment::Column::IsDeleted.eq(false))
        .filter(appointment::Column::AppointmentDate.gte(today))
        .all(db)
        .await?;

    for appt in appointments {
        let Some(candidate) = evaluate_appointment(&appt, today) else {
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

    let medications = Medication::find()
        .filter(medication::Column::HouseholdId.eq(household_id))
        .filter(medication::Column::IsDeleted.eq(false))
        .filter(medication::Column::IsActive.eq(true))
        .all(db)
        .await?;

    for med in medications {
        let Some(candidate) = evaluate_medication(&med) else {
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
