//! Networking for the admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps JSON request/response calls behind a `Transport` so the same
//! client logic runs against `gloo-net` in the browser and a fake in tests.
//! `types` holds the wire shapes of the booking/trip endpoints.

pub mod api;
pub mod types;
