//! Bill due-date alert rules.
//!
//! Unpaid bills alert at exactly 7, 3 and 0 days before the due date, and on
//! every day past it. Overdue bills escalate to Error/Critical with the day
//! count in the message.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{Bill, bill};
use crate::errors::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying bills in the alert correlation key.
pub const RELATED_ENTITY_TYPE: &str = "Bill";

/// Evaluates one bill against the due-date threshold table.
#[must_use]
pub fn evaluate_bill(bill: &bill::Model, today: NaiveDate) -> Option<CandidateAlert> {
    let distance = bill.due_date.signed_duration_since(today).num_days();

    let (alert_type, severity, priority, title, message) = if distance < 0 {
        let days_overdue = distance.unsigned_abs();
        (
            AlertType::Error,
            AlertSeverity::Critical,
            AlertPriority::Urgent,
            "Bill Overdue",
            format!(
                "{} (${:.2}) was due {days_overdue} day(s) ago",
                bill.name, bill.amount
            ),
        )
    } else {
        match distance {
            7 => (
                AlertType::Reminder,
                AlertSeverity::Medium,
                AlertPriority::Medium,
                "Bill Due Soon",
                format!("{} (${:.2}) is due in 7 days", bill.name, bill.amount),
            ),
            3 => (
                AlertType::Warning,
                AlertSeverity::High,
                AlertPriority::High,
                "Bill Due This Week",
                format!("{} (${:.2}) is due in 3 days", bill.name, bill.amount),
            ),
            0 => (
                AlertType::Warning,
                AlertSeverity::Critical,
                AlertPriority::Urgent,
                "Bill Due Today",
                format!("{} (${:.2}) is due today", bill.name, bill.amount),
            ),
            _ => return None,
        }
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Bills,
        severity,
        priority,
        title: title.to_string(),
        message,
        description: None,
        related_entity_type: RELATED_ENTITY_TYPE.to_string(),
        related_entity_id: bill.id,
        related_entity_name: bill.name.clone(),
        action_url: Some(format!("/bills/{}", bill.id)),
        action_label: Some("View Bill".to_string()),
    })
}

/// Generates bill alerts for one household and returns the count written.
pub async fn generate_bill_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();

    let bills = Bill::find()
        .filter(bill::Column::HouseholdId.eq(household_id))
        .filter(bill::Column::IsDeleted.eq(false))
        .filter(bill::Column::Status.ne("Paid"))
        .all(db)
        .await?;

    let mut staged = Vec::new();
    for b in bills {
        let Some(candidate) = evaluate_bill(&b, today) else {
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

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Alert;
    use crate::entities::alert::AlertStatus;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    fn bill_due_in(days: i64) -> bill::Model {
        bill::Model {
            id: 1,
            household_id: 1,
            name: "Electric".to_string(),
            amount: 50.0,
            due_date: date_in_days(days),
            status: "Pending".to_string(),
            is_deleted: false,
        }
    }

    #[test]
    fn test_thresholds_trigger_on_exact_days() {
        let today = test_now().date_naive();

        let soon = evaluate_bill(&bill_due_in(7), today).unwrap();
        assert_eq!(soon.title, "Bill Due Soon");
        assert_eq!(soon.alert_type, AlertType::Reminder);
        assert_eq!(soon.severity, AlertSeverity::Medium);
        assert_eq!(soon.priority, AlertPriority::Medium);

        let week = evaluate_bill(&bill_due_in(3), today).unwrap();
        assert_eq!(week.title, "Bill Due This Week");
        assert_eq!(week.severity, AlertSeverity::High);

        let today_alert = evaluate_bill(&bill_due_in(0), today).unwrap();
        assert_eq!(today_alert.title, "Bill Due Today");
        assert_eq!(today_alert.alert_type, AlertType::Warning);
        assert_eq!(today_alert.severity, AlertSeverity::Critical);
        assert_eq!(today_alert.priority, AlertPriority::Urgent);
    }

    #[test]
    fn test_off_threshold_days_produce_nothing() {
        let today = test_now().date_naive();

        for days in [10, 8, 6, 5, 4, 2, 1] {
            assert!(
                evaluate_bill(&bill_due_in(days), today).is_none(),
                "bill due in {days} days should not alert"
            );
        }
    }

    #[test]
    fn test_overdue_alerts_carry_day_count() {
        let today = test_now().date_naive();

        let one_day = evaluate_bill(&bill_due_in(-1), today).unwrap();
        assert_eq!(one_day.title, "Bill Overdue");
        assert_eq!(one_day.alert_type, AlertType::Error);
        assert_eq!(one_day.severity, AlertSeverity::Critical);
        assert_eq!(one_day.priority, AlertPriority::Urgent);
        assert!(one_day.message.contains("1 day(s) ago"));

        let thirty_days = evaluate_bill(&bill_due_in(-30), today).unwrap();
        assert_eq!(thirty_days.title, "Bill Overdue");
        assert!(thirty_days.message.contains("30 day(s) ago"));
    }

    #[tokio::test]
    async fn test_bill_due_today_end_to_end() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();
        let bill_row =
            create_test_bill(&db, household.id, "Electric", 50.0, now.date_naive()).await?;

        let count = generate_bill_alerts(&db, household.id, now).await?;
        assert_eq!(count, 1);

        let alert_row = Alert::find().one(&db).await?.unwrap();
        assert_eq!(alert_row.alert_type, AlertType::Warning);
        assert_eq!(alert_row.severity, AlertSeverity::Critical);
        assert_eq!(alert_row.priority, AlertPriority::Urgent);
        assert_eq!(alert_row.title, "Bill Due Today");
        assert_eq!(alert_row.related_entity_type.as_deref(), Some("Bill"));
        assert_eq!(alert_row.related_entity_id, Some(bill_row.id));
        assert_eq!(alert_row.status, AlertStatus::Active);
        assert!(!alert_row.is_read);
        assert!(alert_row.message.contains("$50.00"));

        Ok(())
    }

    #[tokio::test]
    async fn test_second_run_same_day_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();
        create_test_bill(&db, household.id, "Electric", 50.0, now.date_naive()).await?;

        assert_eq!(generate_bill_alerts(&db, household.id, now).await?, 1);
        assert_eq!(generate_bill_alerts(&db, household.id, now).await?, 0);
        assert_eq!(Alert::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_later_threshold_creates_distinct_alert() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();
        let due = date_in_days(7);
        create_test_bill(&db, household.id, "Electric", 50.0, due).await?;

        // Day 0: distance 7 fires
        assert_eq!(generate_bill_alerts(&db, household.id, now).await?, 1);

        // Next day: distance 6, no threshold match
        let next_day = now + chrono::Duration::days(1);
        assert_eq!(generate_bill_alerts(&db, household.id, next_day).await?, 0);

        // Four days later: distance 3, a second distinct alert
        let day_four = now + chrono::Duration::days(4);
        assert_eq!(generate_bill_alerts(&db, household.id, day_four).await?, 1);

        let mut alerts = Alert::find().all(&db).await?;
        alerts.sort_by_key(|a| a.id);
        assert_eq!(alerts.len(), 2);
        assert_ne!(alerts[0].id, alerts[1].id);
        assert_eq!(alerts[0].title, "Bill Due Soon");
        assert_eq!(alerts[1].title, "Bill Due This Week");

        Ok(())
    }

    #[tokio::test]
    async fn test_paid_and_deleted_bills_are_skipped() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();
        let today = now.date_naive();

        create_custom_bill(&db, household.id, "Paid", 25.0, today, "Paid", false).await?;
        create_custom_bill(&db, household.id, "Deleted", 25.0, today, "Pending", true).await?;

        assert_eq!(generate_bill_alerts(&db, household.id, now).await?, 0);

        Ok(())
    }
}
