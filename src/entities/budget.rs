//! Budget entity - A spending limit for one transaction category.
//!
//! Each budget has one or more periods (`budget_period` rows) defining the
//! date ranges the limit applies to. Spend within the period containing
//! "today" is compared against `limit_amount` by the budget rule module.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this budget belongs to
    pub household_id: i64,
    /// Display name (e.g. "Groceries")
    pub name: String,
    /// Transaction category this budget limits
    pub category_id: i64,
    /// Spending limit in dollars per period
    pub limit_amount: f64,
    /// Soft delete flag
    pub is_deleted: bool,
}

/// Defines relationships between Budget and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each budget belongs to one household
    #[sea_orm(
        belongs_to = "super::household::Entity",
        from = "Column::HouseholdId",
        to = "super::household::Column::Id"
    )]
    Household,
    /// One budget has many periods
    #[sea_orm(has_many = "super::budget_period::Entity")]
    Periods,
}

impl Related<super::household::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl Related<super::budget_period::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Periods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
