//! Tests for authentication controller endpoints: login redirect, OAuth2 callback, logout
//! and the signed-in user.

mod callback;
mod login;
mod logout;
mod user;

use super::*;
