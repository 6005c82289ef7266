//! # cabdesk
//!
//! WASM utility layer for the cab management admin pages.
//!
//! The pages are rendered on the server; this crate adds the small amount of
//! client behavior they need: auto-dismissing alerts, guarding form submits,
//! JSON calls to the admin endpoints, table sort/filter/CSV export, and thin
//! wrappers over storage, clipboard, and print.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state`, `net`, `util`, `sched`, and `config` are plain Rust and compile
//! (and test) natively. Everything that touches the live DOM lives in `dom`
//! and is only built with the `hydrate` feature.

pub mod config;
pub mod net;
pub mod sched;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install console logging, read page config, and boot.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = config::UiConfig::from_page();
    log::set_max_level(config.log_level().to_level_filter());
    dom::page::boot_when_ready(config);
}
