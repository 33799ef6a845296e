//! Classboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the classboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection and setup
//! - **TestError**: Error types that can occur during test setup
//! - **factory / fixture**: Helpers for inserting test records and building in-memory models
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Gallery;
//!
//! #[tokio::test]
//! async fn test_gallery_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Gallery)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
