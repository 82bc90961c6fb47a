//! `SeaORM` Entity definitions for the holocron schema

pub mod prelude;

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod starship;
pub mod user;
