//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state, session and extractors built by hand, verifying
//! status codes, response bodies and how the acting user is resolved.

mod catalog;
mod favorite;

use holocron_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
