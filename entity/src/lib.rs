pub mod gallery;
pub mod notification;

pub mod prelude;
