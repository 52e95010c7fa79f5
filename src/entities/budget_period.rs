//! Budget period entity - A start/end date range a budget's limit covers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget period database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_periods")]
pub struct Model {
    /// Unique identifier for the period
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Budget this period belongs to
    pub budget_id: i64,
    /// First day of the period (inclusive)
    pub start_date: Date,
    /// Last day of the period (inclusive)
    pub end_date: Date,
}

/// Defines relationships between this entity and others
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each period belongs to one budget
    #[sea_orm(
        belongs_to = "super::budget::Entity",
        from = "Column::BudgetId",
        to = "super::budget::Column::Id"
    )]
    Budget,
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
