//! API data transfer objects and domain parameter types.
//!
//! DTOs define the JSON wire shapes of the public endpoints; param types are
//! the domain models used between the data and controller layers. Entity
//! models are converted to params at the repository boundary and transformed
//! to DTOs at the controller boundary, so database types never leak into
//! handlers.

pub mod api;
pub mod gallery;
pub mod notification;
