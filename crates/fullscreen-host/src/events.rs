//! Logical fullscreen notifications
//!
//! A host fires change and error events under its own vendor's event name.
//! This module maps each logical kind to its four concrete names.

use crate::Vendor;

/// Notification kinds emitted by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Fullscreen mode was entered or left.
    Change,
    /// A fullscreen request failed on the host side.
    Error,
}

impl EventKind {
    /// Concrete host event name under `vendor`'s convention.
    ///
    /// The `ms` variant uses a capitalized name unlike the other three.
    pub fn host_name(self, vendor: Vendor) -> &'static str {
        match (self, vendor) {
            (EventKind::Change, Vendor::Native) => "fullscreenchange",
            (EventKind::Change, Vendor::Moz) => "mozfullscreenchange",
            (EventKind::Change, Vendor::Ms) => "MSFullscreenChange",
            (EventKind::Change, Vendor::Webkit) => "webkitfullscreenchange",
            (EventKind::Error, Vendor::Native) => "fullscreenerror",
            (EventKind::Error, Vendor::Moz) => "mozfullscreenerror",
            (EventKind::Error, Vendor::Ms) => "MSFullscreenError",
            (EventKind::Error, Vendor::Webkit) => "webkitfullscreenerror",
        }
    }

    /// All four concrete names for this kind, in probe order.
    pub fn host_names(self) -> [&'static str; 4] {
        Vendor::PROBE_ORDER.map(|vendor| self.host_name(vendor))
    }

    /// Reverse lookup: which kind and vendor a concrete event name belongs
    /// to. Lets a listener tell which variant actually fired.
    pub fn parse(name: &str) -> Option<(EventKind, Vendor)> {
        for kind in [EventKind::Change, EventKind::Error] {
            for vendor in Vendor::PROBE_ORDER {
                if kind.host_name(vendor) == name {
                    return Some((kind, vendor));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_casing() {
        assert_eq!(EventKind::Change.host_name(Vendor::Ms), "MSFullscreenChange");
        assert_eq!(EventKind::Error.host_name(Vendor::Ms), "MSFullscreenError");
    }

    #[test]
    fn test_host_names_in_probe_order() {
        assert_eq!(
            EventKind::Change.host_names(),
            [
                "fullscreenchange",
                "mozfullscreenchange",
                "MSFullscreenChange",
                "webkitfullscreenchange",
            ]
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for kind in [EventKind::Change, EventKind::Error] {
            for vendor in Vendor::PROBE_ORDER {
                assert_eq!(EventKind::parse(kind.host_name(vendor)), Some((kind, vendor)));
            }
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(EventKind::parse("fullscreenChange"), None);
        assert_eq!(EventKind::parse("resize"), None);
    }
}
