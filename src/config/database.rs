//! Database configuration module for `TheButler`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    Alert, Appointment, Bill, Budget, BudgetPeriod, Document, Household, InsurancePolicy,
    MaintenanceTask, Medication, Transaction,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/thebutler.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// Statements carry `IF NOT EXISTS` so startup is idempotent against an existing store.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        schema.create_table_from_entity(Household),
        schema.create_table_from_entity(Bill),
        schema.create_table_from_entity(MaintenanceTask),
        schema.create_table_from_entity(Appointment),
        schema.create_table_from_entity(Medication),
        schema.create_table_from_entity(InsurancePolicy),
        schema.create_table_from_entity(Document),
        schema.create_table_from_entity(Budget),
        schema.create_table_from_entity(BudgetPeriod),
        schema.create_table_from_entity(Transaction),
        schema.create_table_from_entity(Alert),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(builder.build(&table)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{alert, bill, household};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<household::Model> = Household::find().limit(1).all(&db).await?;
        let _: Vec<bill::Model> = Bill::find().limit(1).all(&db).await?;
        let _: Vec<alert::Model> = Alert::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<alert::Model> = Alert::find().limit(1).all(&db).await?;
        Ok(())
    }
}
