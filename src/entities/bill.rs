//! Bill entity - Recurring and one-off payables tracked per household.
//!
//! A bill stays "open" until its status is set to `"Paid"` by the CRUD layer;
//! the alert engine only looks at open, non-deleted bills.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    /// Unique identifier for the bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this bill belongs to
    pub household_id: i64,
    /// Display name (e.g. "Electric", "Internet")
    pub name: String,
    /// Amount owed in dollars
    pub amount: f64,
    /// Date payment is due
    pub due_date: Date,
    /// Payment status: `"Pending"` or `"Paid"`
    pub status: String,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Bill and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each bill belongs to one household
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
