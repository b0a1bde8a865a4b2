//! The vendor-neutral operations.
//!
//! Each one walks [`Vendor::PROBE_ORDER`] and makes at most one delegated
//! host call. Failure means "no variant exposed" and is reported as
//! `false` or `None`, never as a panic or error value; asynchronous
//! denial on the host side is only visible through [`on_error`].

use std::rc::Rc;

use tracing::trace;

use fullscreen_host::{EventKind, HostDocument, HostElement, Listener, Vendor};

/// Ask the host to display `element` fullscreen.
///
/// Invokes the first request-fullscreen variant the element exposes and
/// returns `true`. Returns `false` with no side effects when no variant
/// is available. The transition itself completes asynchronously on the
/// host side, subject to its permission and gesture policies.
pub fn request_fullscreen<E: HostElement>(element: &mut E) -> bool {
    for vendor in Vendor::PROBE_ORDER {
        if element.supports_request(vendor) {
            trace!(%vendor, method = vendor.request_method(), "delegating fullscreen request");
            element.request_fullscreen(vendor);
            return true;
        }
    }
    trace!("no request-fullscreen variant exposed");
    false
}

/// Ask the host to leave fullscreen mode.
///
/// Same probe-and-delegate pattern as [`request_fullscreen`], against the
/// document's exit capability.
pub fn exit_fullscreen<D: HostDocument>(document: &mut D) -> bool {
    for vendor in Vendor::PROBE_ORDER {
        if document.supports_exit(vendor) {
            trace!(%vendor, method = vendor.exit_method(), "delegating fullscreen exit");
            document.exit_fullscreen(vendor);
            return true;
        }
    }
    trace!("no exit-fullscreen variant exposed");
    false
}

/// The element currently displayed fullscreen, if any.
///
/// Walks the vendor element properties in probe order and returns the
/// first one holding an element. `None` means no variant is exposed or
/// none reports an active element.
pub fn fullscreen_element<D: HostDocument>(document: &D) -> Option<D::Element> {
    Vendor::PROBE_ORDER
        .into_iter()
        .find_map(|vendor| document.fullscreen_element(vendor))
}

/// Whether fullscreen mode is currently active.
pub fn is_fullscreen<D: HostDocument>(document: &D) -> bool {
    fullscreen_element(document).is_some()
}

/// Whether the host allows fullscreen at all.
///
/// A vendor whose enabled property is absent or reports `false` does not
/// mask a later vendor reporting `true`.
pub fn fullscreen_enabled<D: HostDocument>(document: &D) -> bool {
    Vendor::PROBE_ORDER
        .into_iter()
        .any(|vendor| document.fullscreen_enabled(vendor) == Some(true))
}

/// Exit fullscreen when active, request it for `element` otherwise.
///
/// Success of the underlying call is not propagated.
pub fn toggle_fullscreen<D, E>(document: &mut D, element: &mut E)
where
    D: HostDocument,
    E: HostElement,
{
    if is_fullscreen(document) {
        exit_fullscreen(document);
    } else {
        request_fullscreen(element);
    }
}

/// Invoke `callback` whenever the host's fullscreen state changes.
///
/// The callback is registered under all four vendor event names; a host
/// implements one convention at a time, so it fires once per real
/// transition. Registrations last for the life of the document.
pub fn on_change<D, F>(document: &mut D, callback: F)
where
    D: HostDocument,
    F: Fn(&D::Event) + 'static,
{
    register_all(document, EventKind::Change, callback);
}

/// Invoke `callback` when a fullscreen request fails on the host side.
///
/// The payload is host-owned and passed through unexamined.
pub fn on_error<D, F>(document: &mut D, callback: F)
where
    D: HostDocument,
    F: Fn(&D::Event) + 'static,
{
    register_all(document, EventKind::Error, callback);
}

/// Register one callback under every concrete name mapped to `kind`.
fn register_all<D, F>(document: &mut D, kind: EventKind, callback: F)
where
    D: HostDocument,
    F: Fn(&D::Event) + 'static,
{
    let shared: Listener<D::Event> = Rc::new(callback);
    for vendor in Vendor::PROBE_ORDER {
        document.add_event_listener(kind.host_name(vendor), Rc::clone(&shared));
    }
}
