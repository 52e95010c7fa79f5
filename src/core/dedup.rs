//! Same-day alert deduplication.
//!
//! At most one non-deleted alert may exist per (household, related entity
//! type, related entity id) per UTC calendar day. The guard is a point read
//! performed before each candidate is staged; it is not a database
//! constraint, so rule modules must process candidates sequentially.

use crate::entities::{Alert, alert};
use crate::errors::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Returns true if a non-deleted alert already exists for this entity tuple
/// with a `created_at` falling on `today` (UTC).
pub async fn alert_exists_today<C>(
    db: &C,
    household_id: i64,
    entity_type: &str,
    entity_id: i64,
    today: NaiveDate,
) -> Result<bool>
where
    C: ConnectionTrait,
{
    let day_start = today.and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::days(1);

    let count = Alert::find()
        .filter(alert::Column::HouseholdId.eq(household_id))
        .filter(alert::Column::RelatedEntityType.eq(entity_type))
        .filter(alert::Column::RelatedEntityId.eq(entity_id))
        .filter(alert::Column::DeletedAt.is_null())
        .filter(alert::Column::CreatedAt.gte(day_start))
        .filter(alert::Column::CreatedAt.lt(day_end))
        .count(db)
        .await?;

    Ok(count > 0)
}
