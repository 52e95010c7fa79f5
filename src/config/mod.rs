/// Database configuration and connection management
pub mod database;

/// Alert engine settings loaded from config.toml
pub mod settings;
