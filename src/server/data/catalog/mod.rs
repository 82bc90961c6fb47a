//! Read-only repositories for the catalog tables.

pub mod people;
pub mod planet;
pub mod starship;
