//! Shared test utilities for `TheButler`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults. Threshold tests work
//! against a fixed "now" (`test_now`) so date arithmetic never depends on the
//! wall clock.

#![allow(clippy::unwrap_used)]

use crate::entities::{
    alert, appointment, bill, budget, budget_period, document, household, insurance_policy,
    maintenance_task, medication, transaction,
};
use crate::entities::alert::{
    AlertCategory, AlertPriority, AlertSeverity, AlertStatus, AlertType,
};
use crate::errors::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A fixed instant used as "now" so threshold tests are deterministic.
#[must_use]
pub fn test_now() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

/// A date `days` away from `test_now` (negative for the past).
#[must_use]
pub fn date_in_days(days: i64) -> NaiveDate {
    test_now().date_naive() + Duration::days(days)
}

/// Creates an active, non-deleted test household.
pub async fn create_test_household(
    db: &DatabaseConnection,
    name: &str,
) -> Result<household::Model> {
    create_custom_household(db, name, true, false).await
}

/// Creates a household with explicit active/deleted flags.
pub async fn create_custom_household(
    db: &DatabaseConnection,
    name: &str,
    is_active: bool,
    is_deleted: bool,
) -> Result<household::Model> {
    household::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(is_active),
        is_deleted: Set(is_deleted),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a pending, non-deleted bill.
pub async fn create_test_bill(
    db: &DatabaseConnection,
    household_id: i64,
    name: &str,
    amount: f64,
    due_date: NaiveDate,
) -> Result<bill::Model> {
    create_custom_bill(db, household_id, name, amount, due_date, "Pending", false).await
}

/// Creates a bill with explicit status and deleted flag.
pub async fn create_custom_bill(
    db: &DatabaseConnection,
    household_id: i64,
    name: &str,
    amount: f64,
    due_date: NaiveDate,
    status: &str,
    is_deleted: bool,
) -> Result<bill::Model> {
    bill::ActiveModel {
        household_id: Set(household_id),
        name: Set(name.to_string()),
        amount: Set(amount),
        due_date: Set(due_date),
        status: Set(status.to_string()),
        is_deleted: Set(is_deleted),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a pending maintenance task.
pub async fn create_test_maintenance_task(
    db: &DatabaseConnection,
    household_id: i64,
    title: &str,
    due_date: NaiveDate,
) -> Result<maintenance_task::Model> {
    create_custom_maintenance_task(db, household_id, title, due_date, "Pending").await
}

/// Creates a maintenance task with an explicit status.
pub async fn create_custom_maintenance_task(
    db: &DatabaseConnection,
    household_id: i64,
    title: &str,
    due_date: NaiveDate,
    status: &str,
) -> Result<maintenance_task::Model> {
    maintenance_task::ActiveModel {
        household_id: Set(household_id),
        title: Set(title.to_string()),
        due_date: Set(due_date),
        status: Set(status.to_string()),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an appointment at 09:00 on the given date.
pub async fn create_test_appointment(
    db: &DatabaseConnection,
    household_id: i64,
    provider_name: &str,
    appointment_date: NaiveDate,
) -> Result<appointment::Model> {
    appointment::ActiveModel {
        household_id: Set(household_id),
        provider_name: Set(provider_name.to_string()),
        appointment_date: Set(appointment_date),
        appointment_time: Set("09:00".to_string()),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a medication with the given refill count and active flag.
pub async fn create_test_medication(
    db: &DatabaseConnection,
    household_id: i64,
    name: &str,
    refills_remaining: i32,
    is_active: bool,
) -> Result<medication::Model> {
    medication::ActiveModel {
        household_id: Set(household_id),
        name: Set(name.to_string()),
        refills_remaining: Set(refills_remaining),
        is_active: Set(is_active),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an insurance policy renewing on the given date.
pub async fn create_test_policy(
    db: &DatabaseConnection,
    household_id: i64,
    provider: &str,
    policy_number: &str,
    renewal_date: NaiveDate,
) -> Result<insurance_policy::Model> {
    insurance_policy::ActiveModel {
        household_id: Set(household_id),
        provider: Set(provider.to_string()),
        policy_number: Set(policy_number.to_string()),
        renewal_date: Set(renewal_date),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a document, optionally with an expiry date.
pub async fn create_test_document(
    db: &DatabaseConnection,
    household_id: i64,
    title: &str,
    expiry_date: Option<NaiveDate>,
) -> Result<document::Model> {
    document::ActiveModel {
        household_id: Set(household_id),
        title: Set(title.to_string()),
        expiry_date: Set(expiry_date),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget limiting one transaction category.
pub async fn create_test_budget(
    db: &DatabaseConnection,
    household_id: i64,
    name: &str,
    category_id: i64,
    limit_amount: f64,
) -> Result<budget::Model> {
    budget::ActiveModel {
        household_id: Set(household_id),
        name: Set(name.to_string()),
        category_id: Set(category_id),
        limit_amount: Set(limit_amount),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget period covering the given date range (inclusive).
pub async fn create_test_budget_period(
    db: &DatabaseConnection,
    budget_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<budget_period::Model> {
    budget_period::ActiveModel {
        budget_id: Set(budget_id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a transaction on the given date, optionally categorized.
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    household_id: i64,
    category_id: Option<i64>,
    amount: f64,
    date: NaiveDate,
) -> Result<transaction::Model> {
    transaction::ActiveModel {
        household_id: Set(household_id),
        category_id: Set(category_id),
        amount: Set(amount),
        description: Set("Test transaction".to_string()),
        date: Set(date),
        is_deleted: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts a minimal alert row directly, for exercising the dedup guard.
pub async fn create_test_alert(
    db: &DatabaseConnection,
    household_id: i64,
    related_entity_type: &str,
    related_entity_id: i64,
    created_at: DateTime<Utc>,
) -> Result<alert::Model> {
    alert::ActiveModel {
        household_id: Set(household_id),
        alert_type: Set(AlertType::Reminder),
        category: Set(AlertCategory::Bills),
        severity: Set(AlertSeverity::Medium),
        priority: Set(AlertPriority::Medium),
        title: Set("Test Alert".to_string()),
        message: Set("Test alert message".to_string()),
        description: Set(None),
        related_entity_type: Set(Some(related_entity_type.to_string())),
        related_entity_id: Set(Some(related_entity_id)),
        related_entity_name: Set(Some("Test".to_string())),
        status: Set(AlertStatus::Active),
        is_read: Set(false),
        is_dismissed: Set(false),
        created_at: Set(created_at),
        is_recurring: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
