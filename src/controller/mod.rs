//! HTTP request handlers.
//!
//! Controllers translate HTTP requests into service calls and service results
//! into JSON responses. The public endpoints require no authentication.

pub mod health;
pub mod public;
