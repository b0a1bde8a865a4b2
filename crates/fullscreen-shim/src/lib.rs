//! Vendor-neutral Fullscreen API facade.
//!
//! Browser engines shipped the Fullscreen API under four naming
//! conventions (unprefixed, `moz`, `ms`, `webkit`) before standardization.
//! This crate presents one function surface over all four, selecting a
//! variant by runtime capability probing rather than engine
//! identification. The host environment is injected through the
//! [`HostElement`] and [`HostDocument`] traits; nothing is cached, every
//! call re-reads live host state.

mod facade;

pub use facade::{
    exit_fullscreen, fullscreen_element, fullscreen_enabled, is_fullscreen, on_change, on_error,
    request_fullscreen, toggle_fullscreen,
};
pub use fullscreen_host::{EventKind, HostDocument, HostElement, Listener, Vendor};
