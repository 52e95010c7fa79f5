//! Generation cycle driver.
//!
//! One cycle walks every active household and runs the rule modules in a
//! fixed order (Bills, Maintenance, Healthcare, Insurance, Documents, Budget,
//! then the Inventory no-op). A single "now" is captured per cycle and
//! threaded through every module so threshold decisions cannot straddle a
//! date rollover mid-household. Failures are contained at the household
//! boundary: one bad household is logged and counted, the cycle moves on.

use crate::core::{household, rules};
use crate::entities::Household;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};
use std::fmt::Write as _;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Alert counts per rule category for one household or one whole cycle.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounts {
    /// Alerts generated by the bills module
    pub bills: usize,
    /// Alerts generated by the maintenance module
    pub maintenance: usize,
    /// Alerts generated by the healthcare module
    pub healthcare: usize,
    /// Alerts generated by the insurance module
    pub insurance: usize,
    /// Alerts generated by the documents module
    pub documents: usize,
    /// Alerts generated by the budget module
    pub budget: usize,
    /// Alerts generated by the inventory module (always zero today)
    pub inventory: usize,
}

impl CategoryCounts {
    /// Total alerts across all categories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.bills
            + self.maintenance
            + self.healthcare
            + self.insurance
            + self.documents
            + self.budget
            + self.inventory
    }

    fn add(&mut self, other: &Self) {
        self.bills += other.bills;
        self.maintenance += other.maintenance;
        self.healthcare += other.healthcare;
        self.insurance += other.insurance;
        self.documents += other.documents;
        self.budget += other.budget;
        self.inventory += other.inventory;
    }
}

/// Outcome of one full generation cycle across all households.
#[derive(Debug, Clone, Default)]
pub struct CycleSummary {
    /// Households processed without error
    pub households_scanned: usize,
    /// Households whose processing failed and was skipped
    pub households_failed: usize,
    /// Aggregated per-category alert counts
    pub counts: CategoryCounts,
}

impl CycleSummary {
    /// Total alerts generated this cycle.
    #[must_use]
    pub const fn alerts_generated(&self) -> usize {
        self.counts.total()
    }
}

/// Runs all rule modules for one household in the fixed category order.
///
/// Validates the household is live first so a vanished or deactivated
/// household surfaces as an error rather than a silent empty pass.
pub async fn generate_alerts_for_household(
    db: &DatabaseConnection,
    household_id: i64,
    now: DateTime<Utc>,
) -> Result<CategoryCounts> {
    let live = Household::find_by_id(household_id)
        .one(db)
        .await?
        .is_some_and(|h| h.is_active && !h.is_deleted);
    if !live {
        return Err(Error::HouseholdNotFound { id: household_id });
    }

    Ok(CategoryCounts {
        bills: rules::bills::generate_bill_alerts(db, household_id, now).await?,
        maintenance: rules::maintenance::generate_maintenance_alerts(db, household_id, now).await?,
        healthcare: rules::healthcare::generate_healthcare_alerts(db, household_id, now).await?,
        insurance: rules::insurance::generate_insurance_alerts(db, household_id, now).await?,
        documents: rules::documents::generate_document_alerts(db, household_id, now).await?,
        budget: rules::budget::generate_budget_alerts(db, household_id, now).await?,
        inventory: rules::inventory::generate_inventory_alerts(db, household_id, now).await?,
    })
}

/// Processes an explicit list of households, isolating per-household failures.
///
/// The cancellation token is checked before each household; each
/// household/category batch commits independently, so stopping between
/// households never leaves a half-written batch.
pub async fn process_households(
    db: &DatabaseConnection,
    household_ids: &[i64],
    now: DateTime<Utc>,
    cancel: &CancellationToken,
) -> CycleSummary {
    let mut summary = CycleSummary::default();

    for &household_id in household_ids {
        if cancel.is_cancelled() {
            debug!("Generation cycle interrupted by shutdown.");
            break;
        }

        match generate_alerts_for_household(db, household_id, now).await {
            Ok(counts) => {
                debug!(
                    "Household {}: {} alert(s) generated",
                    household_id,
                    counts.total()
                );
                summary.households_scanned += 1;
                summary.counts.add(&counts);
            }
            Err(e) => {
                warn!("Alert generation failed for household {}: {}", household_id, e);
                summary.households_failed += 1;
            }
        }
    }

    summary
}

/// Runs one full generation cycle over every active household.
///
/// Errors only if the household list itself cannot be enumerated; everything
/// below that boundary is contained and reported in the summary.
pub async fn run_generation_cycle(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
    cancel: &CancellationToken,
) -> Result<CycleSummary> {
    let household_ids = household::active_household_ids(db).await?;
    Ok(process_households(db, &household_ids, now, cancel).await)
}

/// Formats a cycle summary into a single human-readable log line.
#[must_use]
pub fn format_cycle_summary(summary: &CycleSummary) -> String {
    let mut line = format!(
        "Generation cycle complete - {} household(s) scanned, {} failed, {} alert(s) generated",
        summary.households_scanned,
        summary.households_failed,
        summary.alerts_generated()
    );

    if summary.alerts_generated() > 0 {
        let c = &summary.counts;
        // write! to a String is infallible
        let _ = write!(
            line,
            " (bills: {}, maintenance: {}, healthcare: {}, insurance: {}, documents: {}, budget: {})",
            c.bills, c.maintenance, c.healthcare, c.insurance, c.documents, c.budget
        );
    }

    line
}
