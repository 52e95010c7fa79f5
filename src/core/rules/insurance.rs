//! Insurance policy renewal alert rules.
//!
//! Policies alert at exactly 60, 30 and 7 days before the renewal date.
//! Only future-dated renewals are considered; a lapsed policy is the CRUD
//! layer's problem, not a daily alert.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{InsurancePolicy, insurance_policy};
use crate::errors::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying insurance policies in the alert correlation key.
pub const RELATED_ENTITY_TYPE: &str = "Insurance";

/// Evaluates one policy against the renewal threshold table.
#[must_use]
pub fn evaluate_policy(
    policy: &insurance_policy::Model,
    today: NaiveDate,
) -> Option<CandidateAlert> {
    let distance = policy.renewal_date.signed_duration_since(today).num_days();

    let (alert_type, severity, priority, title) = match distance {
        60 => (
            AlertType::Reminder,
            AlertSeverity::Medium,
            AlertPriority::Medium,
            "Insurance Policy Expiring Soon",
        ),
        30 => (
            AlertType::Warning,
            AlertSeverity::High,
            AlertPriority::High,
            "Insurance Policy Expiring",
        ),
        7 => (
            AlertType::Error,
            AlertSeverity::Critical,
            AlertPriority::Urgent,
            "Insurance Policy Expiring This Week",
        ),
        _ => return None,
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Insurance,
        severity,
        priority,
        title: title.to_string(),
        message: format!(
            "{} policy {} renews in {distance} days",
            policy.provider, policy.policy_number
        ),
        description: None,
        related_entity_type: RELATED_ENTITY_TYPE.to_string(),
        related_entity_id: policy.id,
        related_entity_name: policy.provider.clone(),
        action_url: Some(format!("/insurance/{}", policy.id)),
        action_label: Some("View Policy".to_string()),
    })
}

/// Generates insurance alerts for one household and returns the count written.
pub async fn generate_insurance_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();

    let policies = InsurancePolicy::find()
        .filter(insurance_policy::Column::HouseholdId.eq(household_id))
        .filter(insurance_policy::Column::IsDeleted.eq(false))
        .filter(insurance_policy::Column::RenewalDate.gte(today))
        .all(db)
        .await?;

    let mut staged = Vec::new();
    for policy in policies {
        let Some(candidate) = evaluate_policy(&policy, today) else {
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
