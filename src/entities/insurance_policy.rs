//! Insurance policy entity - Policies with an annual renewal date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Insurance policy database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurance_policies")]
pub struct Model {
    /// Unique identifier for the policy
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this policy belongs to
    pub household_id: i64,
    /// Insurer name (e.g. "State Farm")
    pub provider: String,
    /// Policy number as issued
    pub policy_number: String,
    /// Date the policy renews or lapses
    pub renewal_date: Date,
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
