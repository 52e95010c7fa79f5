//! Document entity - Stored records that may carry an expiry date.
//!
//! Only documents with an expiry date set participate in alert generation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Unique identifier for the document
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this document belongs to
    pub household_id: i64,
    /// Document title (e.g. "Passport - Jane")
    pub title: String,
    /// Optional expiry date; None for documents that never lapse
    pub expiry_date: Option<Date>,
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
