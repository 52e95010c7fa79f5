//! Maintenance task due-date alert rules.
//!
//! Uncompleted tasks alert at exactly 7 and 3 days out and on every day past
//! the due date. Unlike bills there is no due-today trigger; a task that was
//! due today simply surfaces as overdue tomorrow.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{MaintenanceTask, maintenance_task};
use crate::errors::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying maintenance tasks in the alert correlation key.
pub const RELATED_ENTITY_TYPE: &str = "Maintenance";

/// Evaluates one task against the due-date threshold table.
#[must_use]
pub fn evaluate_task(task: &maintenance_task::Model, today: NaiveDate) -> Option<CandidateAlert> {
    let distance = task.due_date.signed_duration_since(today).num_days();

    let (alert_type, severity, priority, title, message) = if distance < 0 {
        let days_overdue = distance.unsigned_abs();
        (
            AlertType::Error,
            AlertSeverity::High,
            AlertPriority::High,
            "Maintenance Task Overdue",
            format!("{} was due {days_overdue} day(s) ago", task.title),
        )
    } else {
        match distance {
            7 => (
                AlertType::Reminder,
                AlertSeverity::Medium,
                AlertPriority::Medium,
                "Maintenance Task Due Soon",
                format!("{} is due in 7 days", task.title),
            ),
            3 => (
                AlertType::Warning,
                AlertSeverity::High,
                AlertPriority::High,
                "Maintenance Task Due This Week",
                format!("{} is due in 3 days", task.title),
            ),
            _ => return None,
        }
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Maintenance,
        severity,
        priority,
        title: title.to_string(),
        message,
        description: None,
        related_entity_type: RELATED_ENTITY_TYPE.to_string(),
        related_entity_id: task.id,
        related_entity_name: task.title.clone(),
        action_url: Some(format!("/maintenance/{}", task.id)),
        action_label: Some("View Task".to_string()),
    })
}

/// Generates maintenance alerts for one household and returns the count written.
pub async fn generate_maintenance_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();

    let tasks = MaintenanceTask::find()
        .filter(maintenance_task::Column::HouseholdId.eq(household_id))
        .filter(maintenance_task::Column::IsDeleted.eq(false))
        .filter(maintenance_task::Column::Status.ne("Completed"))
        .all(db)
        .await?;

    let mut staged = Vec::new();
    for task in tasks {
        let Some(candidate) = evaluate_task(&task, today) else {
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
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    fn task_due_in(days: i64) -> maintenance_task::Model {
        maintenance_task::Model {
            id: 1,
            household_id: 1,
            title: "Replace HVAC filter".to_string(),
            due_date: date_in_days(days),
            status: "Pending".to_string(),
            is_deleted: false,
        }
    }

    #[test]
    fn test_thresholds_trigger_on_exact_days() {
        let today = test_now().date_naive();

        let soon = evaluate_task(&task_due_in(7), today).unwrap();
        assert_eq!(soon.title, "Maintenance Task Due Soon");
        assert_eq!(soon.alert_type, AlertType::Reminder);
        assert_eq!(soon.priority, AlertPriority::Medium);

        let week = evaluate_task(&task_due_in(3), today).unwrap();
        assert_eq!(week.title, "Maintenance Task Due This Week");
        assert_eq!(week.severity, AlertSeverity::High);
    }

    #[test]
    fn test_no_due_today_trigger() {
        let today = test_now().date_naive();
        assert!(evaluate_task(&task_due_in(0), today).is_none());
        assert!(evaluate_task(&task_due_in(1), today).is_none());
        assert!(evaluate_task(&task_due_in(8), today).is_none());
    }

    #[test]
    fn test_overdue_escalates_with_day_count() {
        let today = test_now().date_naive();

        let overdue = evaluate_task(&task_due_in(-5), today).unwrap();
        assert_eq!(overdue.title, "Maintenance Task Overdue");
        assert_eq!(overdue.alert_type, AlertType::Error);
        assert_eq!(overdue.severity, AlertSeverity::High);
        assert_eq!(overdue.priority, AlertPriority::High);
        assert!(overdue.message.contains("5 day(s) ago"));
    }

    #[tokio::test]
    async fn test_completed_tasks_are_skipped() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();

        create_custom_maintenance_task(&db, household.id, "Done", date_in_days(7), "Completed")
            .await?;
        create_custom_maintenance_task(&db, household.id, "Open", date_in_days(7), "Pending")
            .await?;

        let count = generate_maintenance_alerts(&db, household.id, now).await?;
        assert_eq!(count, 1);

        let alert_row = Alert::find().one(&db).await?.unwrap();
        assert_eq!(alert_row.related_entity_name.as_deref(), Some("Open"));

        Ok(())
    }

    #[tokio::test]
    async fn test_second_run_same_day_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;
        let now = test_now();
        create_test_maintenance_task(&db, household.id, "Gutters", date_in_days(-2)).await?;

        assert_eq!(generate_maintenance_alerts(&db, household.id, now).await?, 1);
        assert_eq!(generate_maintenance_alerts(&db, household.id, now).await?, 0);
        assert_eq!(Alert::find().count(&db).await?, 1);

        Ok(())
    }
}
