//! Small helpers shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting, validation, and id generation are pure. `storage`, `browser`,
//! and `connectivity` wrap browser APIs and degrade to no-ops (or in-memory
//! stand-ins) outside the hydrate build.

pub mod browser;
pub mod connectivity;
pub mod debounce;
pub mod format;
pub mod ident;
pub mod query;
pub mod storage;
pub mod validate;
