//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod alert;
pub mod appointment;
pub mod bill;
pub mod budget;
pub mod budget_period;
pub mod document;
pub mod household;
pub mod insurance_policy;
pub mod maintenance_task;
pub mod medication;
pub mod transaction;

// Re-export specific types to avoid conflicts
pub use alert::{Column as AlertColumn, Entity as Alert, Model as AlertModel};
pub use appointment::{Column as AppointmentColumn, Entity as Appointment, Model as AppointmentModel};
pub use bill::{Column as BillColumn, Entity as Bill, Model as BillModel};
pub use budget::{Column as BudgetColumn, Entity as Budget, Model as BudgetModel};
pub use budget_period::{
    Column as BudgetPeriodColumn, Entity as BudgetPeriod, Model as BudgetPeriodModel,
};
pub use document::{Column as DocumentColumn, Entity as Document, Model as DocumentModel};
pub use household::{Column as HouseholdColumn, Entity as Household, Model as HouseholdModel};
pub use insurance_policy::{
    Column as InsurancePolicyColumn, Entity as InsurancePolicy, Model as InsurancePolicyModel,
};
pub use maintenance_task::{
    Column as MaintenanceTaskColumn, Entity as MaintenanceTask, Model as MaintenanceTaskModel,
};
pub use medication::{Column as MedicationColumn, Entity as Medication, Model as MedicationModel};
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
};
