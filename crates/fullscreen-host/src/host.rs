//! Capability provider traits
//!
//! The facade never talks to a rendering environment directly; it probes
//! and delegates through these traits, so real hosts and fakes are
//! interchangeable.

use std::rc::Rc;

use crate::Vendor;

/// Shared listener handle. Hosts run a single-threaded event loop, so
/// `Rc` is the right sharing primitive.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// An element in the host's rendering tree that may expose a
/// request-fullscreen method under some vendor convention.
pub trait HostElement {
    /// Whether the element exposes `vendor`'s request-fullscreen method.
    fn supports_request(&self, vendor: Vendor) -> bool;

    /// Invoke `vendor`'s request-fullscreen method. The transition itself
    /// completes asynchronously on the host side, if at all, subject to
    /// permission and gesture policies the host owns.
    fn request_fullscreen(&mut self, vendor: Vendor);
}

/// The host's global document context.
pub trait HostDocument {
    /// Handle to a host element, as reported by the fullscreen-element
    /// property.
    type Element;

    /// Notification payload delivered to listeners. Opaque to the facade;
    /// it is passed through unexamined.
    type Event;

    /// Whether the document exposes `vendor`'s exit-fullscreen method.
    fn supports_exit(&self, vendor: Vendor) -> bool;

    /// Invoke `vendor`'s exit-fullscreen method.
    fn exit_fullscreen(&mut self, vendor: Vendor);

    /// Value of `vendor`'s fullscreen-element property. `None` when the
    /// property is absent or reports no active element.
    fn fullscreen_element(&self, vendor: Vendor) -> Option<Self::Element>;

    /// Value of `vendor`'s fullscreen-enabled property, `None` when the
    /// property is absent.
    fn fullscreen_enabled(&self, vendor: Vendor) -> Option<bool>;

    /// Register `listener` under a concrete host event name. Registration
    /// is append-only; the surface offers no removal, and ordering
    /// relative to listeners registered elsewhere is unspecified.
    fn add_event_listener(&mut self, name: &'static str, listener: Listener<Self::Event>);
}
