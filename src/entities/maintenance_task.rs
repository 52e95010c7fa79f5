//! Maintenance task entity - Scheduled home upkeep items.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maintenance task database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_tasks")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this task belongs to
    pub household_id: i64,
    /// Short description of the work (e.g. "Replace HVAC filter")
    pub title: String,
    /// Date the task is due
    pub due_date: Date,
    /// Task status: `"Pending"`, `"InProgress"` or `"Completed"`
    pub status: String,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between this entity and others
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each record belongs to one household
    #[sea_orm(
        belongs_to = "super::household::Entity",
        from = "Column::HouseholdId",
        to = "super::household::Column::Id"
    )]
    Household,
}

impl Related<super::household::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
