//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. They resolve users and catalog entities,
//! enforce the favorite toggle rules, and convert database models into API DTOs. Services never
//! retry and never log; errors are returned to the caller as typed [`Error`](crate::server::error::Error)s.

pub mod catalog;
pub mod favorite;
pub mod user;
