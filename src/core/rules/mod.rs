//! Per-category alert rules.
//!
//! Each module follows one shape: fetch the category's still-open records for
//! a household, evaluate each into `Option<CandidateAlert>` against a fixed
//! threshold table, suppress same-day duplicates, and commit the survivors as
//! one batch. Thresholds are exact-day triggers, not ranges; a record between
//! thresholds produces nothing this cycle and is simply re-evaluated on the
//! next one.

pub mod bills;
pub mod budget;
pub mod documents;
pub mod healthcare;
pub mod insurance;
pub mod inventory;
pub mod maintenance;
