//! Appointment entity - Healthcare visits scheduled with a provider.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Appointment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    /// Unique identifier for the appointment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this appointment belongs to
    pub household_id: i64,
    /// Display name of the provider (e.g. "Dr. Alvarez")
    pub provider_name: String,
    /// Date of the visit
    pub appointment_date: Date,
    /// Time of the visit as a display string (e.g. "14:30")
    pub appointment_time: String,
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
