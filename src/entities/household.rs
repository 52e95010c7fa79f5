//! Household entity - The tenant unit that scopes every domain record.
//!
//! All domain records and alerts belong to exactly one household. The alert
//! engine only ever processes households that are active and not soft-deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Household database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "households")]
pub struct Model {
    /// Unique identifier for the household
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the household
    pub name: String,
    /// Whether the household is currently active
    pub is_active: bool,
    /// Soft delete flag - if true, household is hidden but data is preserved
    pub is_deleted: bool,
}

/// Defines relationships between Household and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One household has many alerts
    #[sea_orm(has_many = "super::alert::Entity")]
    Alerts,
    /// One household has many bills
    #[sea_orm(has_many = "super::bill::Entity")]
    Bills,
}

impl Related<super::alert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alerts.def()
    }
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
