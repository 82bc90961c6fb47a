//! Server application core modules.
//!
//! This module contains the server side of Holocron: HTTP routing, configuration, database
//! repositories, the catalog and favorites services, and error handling. Catalog data is
//! read-only; favorites are the only records mutated through the API.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
