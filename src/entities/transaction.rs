//! Transaction entity - Represents all financial transactions in the system.
//!
//! Each transaction records an amount, an optional category and the date it
//! occurred. The budget rule module sums categorized transaction amounts
//! within a budget period to derive percentage-of-limit spend.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this transaction belongs to
    pub household_id: i64,
    /// Spending category, if categorized
    pub category_id: Option<i64>,
    /// Transaction amount in dollars
    pub amount: f64,
    /// Human-readable description of the transaction
    pub description: String,
    /// Date the transaction occurred
    pub date: Date,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one household
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
