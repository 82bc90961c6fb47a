//! Server application models and type definitions.
//!
//! This module contains application state, the typed references
//! used to address catalog entities, and session data structures.

pub mod app;
pub mod catalog;
pub mod session;
