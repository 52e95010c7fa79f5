//! Inventory alert rules - intentionally a no-op.
//!
//! The Inventory category exists in the alert taxonomy but no generation
//! logic has ever been defined for it; the module is kept so the cycle shape
//! stays uniform across categories.

use crate::errors::Result;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Generates inventory alerts. Always returns zero.
pub async fn generate_inventory_alerts(
    _db: &DatabaseConnection,
    _household_id: i64,
    _now: DateTime<Utc>,
) -> Result<usize> {
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_inventory_generates_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let household = create_test_household(&db, "Test").await?;

        let count = generate_inventory_alerts(&db, household.id, test_now()).await?;
        assert_eq!(count, 0);

        Ok(())
    }
}
