//! Test fixture modules for database record creation.
//!
//! - `catalog` - People, planet & starship records
//! - `user` - User records
//! - `favorite` - Favorite records linking users to catalog entities
//! - `factory` - In-memory models matching what the fixtures insert

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
