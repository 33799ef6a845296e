//! In-memory entity fixtures with consistent default values.
//!
//! Fixture functions build entity models without touching the database. Use
//! them for unit tests that exercise conversions or mock repository output.

pub mod gallery;
pub mod notification;
