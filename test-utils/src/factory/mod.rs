//! Factory functions for inserting test records into the database.
//!
//! Unlike the `fixture` module, which builds in-memory entity models, factory
//! functions perform real inserts against the test database so that repository
//! queries have rows to operate on.

pub mod gallery;
pub mod notification;
