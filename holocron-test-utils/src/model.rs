//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep tests consistent.

pub type UserModel = entity::user::Model;

pub type PeopleModel = entity::people::Model;

pub type PlanetModel = entity::planet::Model;

pub type StarshipModel = entity::starship::Model;

pub type FavoriteModel = entity::favorite::Model;
