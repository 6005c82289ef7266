//! Transient UI state models.
//!
//! DESIGN
//! ======
//! Each helper owns a small model that the `dom` layer reads from and writes
//! back to the page, so the rules (ordering, visibility, dismissal timing)
//! are testable without a browser.

pub mod notify;
pub mod page;
pub mod table;
