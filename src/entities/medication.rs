//! Medication entity - Active prescriptions with a refill counter.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Medication database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medications")]
pub struct Model {
    /// Unique identifier for the medication
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this medication belongs to
    pub household_id: i64,
    /// Medication name
    pub name: String,
    /// Pharmacy refills remaining on the prescription
    pub refills_remaining: i32,
    /// Whether the prescription is currently active
    pub is_active: bool,
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
