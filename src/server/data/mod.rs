//! Data access layer repositories.
//!
//! Repositories provide a thin abstraction over SeaORM queries, one per table. They return
//! `Option` for missing rows and leave the decision of what a missing row means to services.

pub mod catalog;
pub mod favorite;
pub mod user;
