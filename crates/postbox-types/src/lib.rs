//! Shared types for the postbox contact-form backend.
//!
//! `api` holds the wire types for the HTTP layer; `models` holds the
//! validated domain model the store layer works with.

pub mod api;
pub mod models;
