//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each collection. Repositories use SeaORM entity models internally and
//! return parameter models to maintain separation between the data layer and
//! business logic layer. Each repository receives the shared connection pool
//! by reference at construction.

pub mod gallery;
pub mod notification;

#[cfg(test)]
mod test;
