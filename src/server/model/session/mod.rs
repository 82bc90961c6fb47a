//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions. The session is the
//! boundary's source of the acting user's identity.

pub mod user;
