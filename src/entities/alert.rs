//! Alert entity - The one table owned by the generation engine.
//!
//! Alerts are created exclusively by the rule modules in their initial state
//! (Active, unread, not dismissed); every later state transition belongs to
//! the surrounding CRUD layer. The correlation triple
//! (`related_entity_type`, `related_entity_id`, creation date) forms the
//! natural key used for same-day deduplication.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Alert classification: what kind of notification this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertType {
    /// A friendly heads-up about an upcoming event
    #[sea_orm(string_value = "Reminder")]
    Reminder,
    /// Something needs attention soon
    #[sea_orm(string_value = "Warning")]
    Warning,
    /// Something is already wrong (overdue, exceeded)
    #[sea_orm(string_value = "Error")]
    Error,
    /// Neutral informational notice
    #[sea_orm(string_value = "Info")]
    Info,
    /// Positive confirmation notice
    #[sea_orm(string_value = "Success")]
    Success,
}

/// Domain category the alert originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertCategory {
    /// Bill due dates
    #[sea_orm(string_value = "Bills")]
    Bills,
    /// Home maintenance tasks
    #[sea_orm(string_value = "Maintenance")]
    Maintenance,
    /// Appointments and medication refills
    #[sea_orm(string_value = "Healthcare")]
    Healthcare,
    /// Insurance policy renewals
    #[sea_orm(string_value = "Insurance")]
    Insurance,
    /// Document expiries
    #[sea_orm(string_value = "Documents")]
    Documents,
    /// Inventory levels (no generation logic yet)
    #[sea_orm(string_value = "Inventory")]
    Inventory,
    /// Budget spend thresholds
    #[sea_orm(string_value = "Budget")]
    Budget,
    /// General financial notices
    #[sea_orm(string_value = "Financial")]
    Financial,
    /// System-originated notices
    #[sea_orm(string_value = "System")]
    System,
}

/// How serious the alert condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertSeverity {
    /// Informational
    #[sea_orm(string_value = "Low")]
    Low,
    /// Worth looking at
    #[sea_orm(string_value = "Medium")]
    Medium,
    /// Needs attention soon
    #[sea_orm(string_value = "High")]
    High,
    /// Needs attention now
    #[sea_orm(string_value = "Critical")]
    Critical,
}

/// Integer priority tier surfaced to clients for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AlertPriority {
    /// Tier 1
    #[sea_orm(num_value = 1)]
    Low,
    /// Tier 2
    #[sea_orm(num_value = 2)]
    Medium,
    /// Tier 3
    #[sea_orm(num_value = 3)]
    High,
    /// Tier 4
    #[sea_orm(num_value = 4)]
    Urgent,
}

/// Alert lifecycle state. The engine only ever writes `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AlertStatus {
    /// Freshly created, not yet seen
    #[sea_orm(string_value = "Active")]
    Active,
    /// Seen by a household member
    #[sea_orm(string_value = "Read")]
    Read,
    /// Explicitly dismissed (terminal)
    #[sea_orm(string_value = "Dismissed")]
    Dismissed,
    /// Lapsed past its expiry (terminal)
    #[sea_orm(string_value = "Expired")]
    Expired,
    /// Moved out of the inbox (terminal)
    #[sea_orm(string_value = "Archived")]
    Archived,
}

/// Alert database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    /// Unique identifier for the alert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Household this alert belongs to; alerts never cross households
    pub household_id: i64,
    /// Kind of notification
    pub alert_type: AlertType,
    /// Originating domain category
    pub category: AlertCategory,
    /// Seriousness of the condition
    pub severity: AlertSeverity,
    /// Client-facing priority tier
    pub priority: AlertPriority,
    /// Short headline
    pub title: String,
    /// Human-readable summary
    pub message: String,
    /// Optional long-form detail
    pub description: Option<String>,
    /// Kind of the source record (e.g. "Bill", "Medication")
    pub related_entity_type: Option<String>,
    /// Id of the source record
    pub related_entity_id: Option<i64>,
    /// Denormalized display name of the source record
    pub related_entity_name: Option<String>,
    /// Lifecycle state
    pub status: AlertStatus,
    /// Kept in sync with status by the CRUD layer
    pub is_read: bool,
    /// Kept in sync with status by the CRUD layer
    pub is_dismissed: bool,
    /// When the alert was created
    pub created_at: DateTimeUtc,
    /// When the alert was first read
    pub read_at: Option<DateTimeUtc>,
    /// When the alert was dismissed
    pub dismissed_at: Option<DateTimeUtc>,
    /// Optional automatic expiry instant
    pub expires_at: Option<DateTimeUtc>,
    /// Deep link hint for a client
    pub action_url: Option<String>,
    /// Label to show on the action link
    pub action_label: Option<String>,
    /// Recurrence flag (schema only; nothing drives recurrence)
    pub is_recurring: bool,
    /// Recurrence rule (schema only)
    pub recurrence_rule: Option<String>,
    /// Next computed occurrence (schema only)
    pub next_occurrence: Option<DateTimeUtc>,
    /// Soft delete timestamp; deleted alerts are invisible to all queries
    pub deleted_at: Option<DateTimeUtc>,
}

/// Defines relationships between Alert and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each alert belongs to one household
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
