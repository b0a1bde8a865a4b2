//! Host capability surface for the fullscreen facade.
//!
//! Models the pieces of a rendering environment the facade touches: the
//! four vendor naming conventions, the element/document capability traits,
//! and in-memory fake hosts for tests.

pub mod events;
pub mod fake;
mod host;
mod vendor;

pub use events::EventKind;
pub use host::{HostDocument, HostElement, Listener};
pub use vendor::{UnknownVendor, Vendor};
