//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, then their responses are checked
//! for status code, redirect target and JSON body. The `router` tests send raw requests
//! through the assembled router to cover paths, methods and extractor rejections.

mod auth;
mod billing;
mod cron;
mod health;
mod marketplace;
mod router;

use coparent_test_utils::prelude::*;

use crate::util::{body_json, location, TestContextExt};
