//! Client-side session and preference state core.
//!
//! The view layer of the app shell (screens, forms, lists) consumes
//! this crate through a handful of read/mutate operations:
//!
//! - [`store`] — observable state container primitives
//! - [`session`] — authentication session slice
//! - [`prefs`] — persisted theme preference slice, hydration, write-through
//! - [`storage`] — durable key-value adapter behind the preference slice
//! - [`guard`] — navigation guard redirecting invalid sessions to login
//! - [`api`] — the network caller feeding the session slice

pub mod api;
pub mod guard;
pub mod prefs;
pub mod session;
pub mod storage;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
