//! Utility functions for controller request handling.
//!
//! Resolves the user acting on a request from the session, falling back to the bootstrap user.

pub mod get_user;
