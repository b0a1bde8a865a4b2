//! In-memory fake hosts
//!
//! Expose any subset of the four vendor variants and record every
//! delegated call, so facade behavior can be pinned down without a real
//! rendering environment.

use std::collections::HashMap;

use tracing::trace;

use crate::{HostDocument, HostElement, Listener, Vendor};

/// Element handle reported by [`FakeDocument`].
pub type ElementId = u32;

/// Fake element with a selectable set of request-fullscreen variants.
#[derive(Debug, Default)]
pub struct FakeElement {
    exposed: [bool; 4],
    calls: Vec<Vendor>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose `vendor`'s request-fullscreen method.
    pub fn expose_request(mut self, vendor: Vendor) -> Self {
        self.exposed[vendor.index()] = true;
        self
    }

    /// Vendors whose request method was invoked, in call order.
    pub fn request_calls(&self) -> &[Vendor] {
        &self.calls
    }
}

impl HostElement for FakeElement {
    fn supports_request(&self, vendor: Vendor) -> bool {
        self.exposed[vendor.index()]
    }

    fn request_fullscreen(&mut self, vendor: Vendor) {
        self.calls.push(vendor);
    }
}

/// Notification payload carried by [`FakeDocument`] events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeEvent {
    /// Concrete host event name that fired.
    pub name: String,
}

/// Fake document: per-vendor exit/element/enabled exposure plus a
/// listener table keyed by concrete event name.
#[derive(Default)]
pub struct FakeDocument {
    exit_exposed: [bool; 4],
    exit_calls: Vec<Vendor>,
    elements: [Option<ElementId>; 4],
    enabled: [Option<bool>; 4],
    listeners: HashMap<&'static str, Vec<Listener<FakeEvent>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose `vendor`'s exit-fullscreen method.
    pub fn expose_exit(mut self, vendor: Vendor) -> Self {
        self.exit_exposed[vendor.index()] = true;
        self
    }

    /// Expose `vendor`'s fullscreen-enabled property with `value`.
    pub fn expose_enabled(mut self, vendor: Vendor, value: bool) -> Self {
        self.enabled[vendor.index()] = Some(value);
        self
    }

    /// Model a host-side transition: `vendor`'s element property now
    /// reports `element`.
    pub fn set_fullscreen_element(&mut self, vendor: Vendor, element: ElementId) {
        self.elements[vendor.index()] = Some(element);
    }

    /// Model a host-side exit: `vendor`'s element property reports nothing.
    pub fn clear_fullscreen_element(&mut self, vendor: Vendor) {
        self.elements[vendor.index()] = None;
    }

    /// Vendors whose exit method was invoked, in call order.
    pub fn exit_calls(&self) -> &[Vendor] {
        &self.exit_calls
    }

    /// Number of listeners registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }

    /// Fire the event named `name`, invoking each listener registered
    /// under exactly that name.
    pub fn dispatch(&self, name: &str) {
        let event = FakeEvent { name: name.to_string() };
        let Some(listeners) = self.listeners.get(name) else {
            return;
        };
        trace!(event = name, count = listeners.len(), "dispatching fake host event");
        for listener in listeners {
            listener(&event);
        }
    }
}

impl HostDocument for FakeDocument {
    type Element = ElementId;
    type Event = FakeEvent;

    fn supports_exit(&self, vendor: Vendor) -> bool {
        self.exit_exposed[vendor.index()]
    }

    fn exit_fullscreen(&mut self, vendor: Vendor) {
        self.exit_calls.push(vendor);
    }

    fn fullscreen_element(&self, vendor: Vendor) -> Option<ElementId> {
        self.elements[vendor.index()]
    }

    fn fullscreen_enabled(&self, vendor: Vendor) -> Option<bool> {
        self.enabled[vendor.index()]
    }

    fn add_event_listener(&mut self, name: &'static str, listener: Listener<FakeEvent>) {
        self.listeners.entry(name).or_default().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_element_records_calls() {
        let mut element = FakeElement::new().expose_request(Vendor::Webkit);

        assert!(!element.supports_request(Vendor::Native));
        assert!(element.supports_request(Vendor::Webkit));

        element.request_fullscreen(Vendor::Webkit);
        assert_eq!(element.request_calls(), &[Vendor::Webkit]);
    }

    #[test]
    fn test_dispatch_only_matching_name() {
        let mut document = FakeDocument::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        document.add_event_listener(
            "fullscreenchange",
            Rc::new(move |event: &FakeEvent| sink.borrow_mut().push(event.name.clone())),
        );

        document.dispatch("mozfullscreenchange");
        assert!(seen.borrow().is_empty());

        document.dispatch("fullscreenchange");
        assert_eq!(*seen.borrow(), vec!["fullscreenchange".to_string()]);
    }

    #[test]
    fn test_element_property_transitions() {
        let mut document = FakeDocument::new();
        assert_eq!(document.fullscreen_element(Vendor::Moz), None);

        document.set_fullscreen_element(Vendor::Moz, 7);
        assert_eq!(document.fullscreen_element(Vendor::Moz), Some(7));
        assert_eq!(document.fullscreen_element(Vendor::Native), None);

        document.clear_fullscreen_element(Vendor::Moz);
        assert_eq!(document.fullscreen_element(Vendor::Moz), None);
    }
}
