//! Household enumeration for the generation cycle.

use crate::entities::{Household, household};
use crate::errors::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Returns the ids of all households that are active and not soft-deleted.
///
/// The result is a materialized list; at household-app scale this is small.
pub async fn active_household_ids(db: &DatabaseConnection) -> Result<Vec<i64>> {
    let households = Household::find()
        .filter(household::Column::IsActive.eq(true))
        .filter(household::Column::IsDeleted.eq(false))
        .all(db)
        .await?;

    Ok(households.into_iter().map(|h| h.id).collect())
}
