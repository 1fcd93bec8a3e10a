//! User domain entity.

pub mod model;

pub use model::User;
