//! Budget spend-threshold alert rules.
//!
//! The one rule module keyed on a percentage rather than a date distance.
//! Spend is the sum of categorized transaction amounts inside the budget
//! period containing "today"; a budget with no period covering today is
//! skipped entirely. The three tiers are evaluated highest-first so a budget
//! produces at most one alert per cycle.

use crate::core::candidate::CandidateAlert;
use crate::core::{dedup, writer};
use crate::entities::alert::{AlertCategory, AlertPriority, AlertSeverity, AlertType};
use crate::entities::{Budget, BudgetPeriod, Transaction, budget, budget_period, transaction};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Tag identifying budgets in the alert correlation key.
pub const RELATED_ENTITY_TYPE: &str = "Budget";

/// Evaluates one budget's spend against the percentage tiers.
///
/// Budgets with a non-positive limit are treated as malformed and skipped.
#[must_use]
pub fn evaluate_budget(budget: &budget::Model, spend: f64) -> Option<CandidateAlert> {
    if budget.limit_amount <= 0.0 {
        return None;
    }

    let percentage_used = spend / budget.limit_amount * 100.0;

    // Highest tier wins; at most one alert per budget per cycle
    let (alert_type, severity, priority, title) = if percentage_used >= 100.0 {
        (
            AlertType::Error,
            AlertSeverity::Critical,
            AlertPriority::Urgent,
            "Budget Exceeded",
        )
    } else if percentage_used >= 90.0 {
        (
            AlertType::Error,
            AlertSeverity::High,
            AlertPriority::High,
            "Budget Limit Reached",
        )
    } else if percentage_used >= 80.0 {
        (
            AlertType::Warning,
            AlertSeverity::Medium,
            AlertPriority::Medium,
            "Budget Warning",
        )
    } else {
        return None;
    };

    Some(CandidateAlert {
        alert_type,
        category: AlertCategory::Budget,
        severity,
        priority,
        title: title.to_string(),
        message: format!(
            "{} is at {percentage_used:.0}% of its ${:.2} limit (${spend:.2} spent)",
            budget.name, budget.limit_amount
        ),
        description: None,
        related_entity_type: RELATED_ENTITY_TYPE.to_string(),
        related_entity_id: budget.id,
        related_entity_name: budget.name.clone(),
        action_url: Some(format!("/budgets/{}", budget.id)),
        action_label: Some("View Budget".to_string()),
    })
}

/// Generates budget alerts for one household and returns the count written.
pub async fn generate_budget_alerts(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let today = now.date_naive();

    let budgets = Budget::find()
        .filter(budget::Column::HouseholdId.eq(household_id))
        .filter(budget::Column::IsDeleted.eq(false))
        .all(db)
        .await?;

    let mut staged = Vec::new();
    for b in budgets {
        // Budgets only matter inside a period that covers today
        let Some(period) = BudgetPeriod::find()
            .filter(budget_period::Column::BudgetId.eq(b.id))
            .filter(budget_period::Column::StartDate.lte(today))
            .filter(budget_period::Column::EndDate.gte(today))
            .one(db)
            .await?
        else {
            continue;
        };

        let transactions = Transaction::find()
            .filter(transaction::Column::HouseholdId.eq(household_id))
            .filter(transaction::Column::IsDeleted.eq(false))
            .filter(transaction::Column::CategoryId.eq(b.category_id))
            .filter(transaction::Column::Date.gte(period.start_date))
            .filter(transaction::Column::Date.lte(period.end_date))
            .all(db)
            .await?;
        let spend: f64 = transactions.iter().map(|t| t.amount).sum();

        let Some(candidate) = evaluate_budget(&b, spend) else {
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
