//! Core business logic - the alert generation engine.
//!
//! The engine is a scheduled loop ([`scheduler`]) that runs a generation
//! cycle ([`engine`]) over every active household ([`household`]). Each cycle
//! runs the per-category rule modules ([`rules`]) which evaluate live domain
//! records into candidate alerts ([`candidate`]), suppress same-day
//! duplicates ([`dedup`]) and persist the survivors ([`writer`]).

pub mod candidate;
pub mod dedup;
pub mod engine;
pub mod household;
pub mod rules;
pub mod scheduler;
pub mod writer;
