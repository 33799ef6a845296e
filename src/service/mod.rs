//! Service layer orchestrating between controllers and repositories.
//!
//! Services own the result variants the controllers branch on, such as the
//! gallery collaborator's availability and the found/not-found distinction
//! for slug lookups. How those variants are presented on the wire is the
//! controller's decision.

pub mod gallery;
pub mod notification;
