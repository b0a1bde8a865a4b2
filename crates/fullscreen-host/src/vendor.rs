//! Vendor variant table
//!
//! The four naming conventions under which browser engines exposed the
//! Fullscreen API before standardization, and the concrete host names each
//! one uses.

use std::fmt;
use std::str::FromStr;

/// A vendor naming convention for the Fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Unprefixed, standardized names.
    Native,
    /// Gecko `moz` prefix.
    Moz,
    /// Trident/EdgeHTML `ms` prefix.
    Ms,
    /// WebKit/Blink `webkit` prefix.
    Webkit,
}

impl Vendor {
    /// Fixed probe priority. Every operation walks this order and uses the
    /// first variant the host answers for.
    pub const PROBE_ORDER: [Vendor; 4] = [Vendor::Native, Vendor::Moz, Vendor::Ms, Vendor::Webkit];

    /// Index into per-vendor tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Vendor::Native => 0,
            Vendor::Moz => 1,
            Vendor::Ms => 2,
            Vendor::Webkit => 3,
        }
    }

    /// Prefix as it appears in host property names (empty for `Native`).
    pub fn prefix(self) -> &'static str {
        match self {
            Vendor::Native => "",
            Vendor::Moz => "moz",
            Vendor::Ms => "ms",
            Vendor::Webkit => "webkit",
        }
    }

    /// Host name of the element's request-fullscreen method.
    ///
    /// The `moz` variant capitalizes `Screen`; the others do not.
    pub fn request_method(self) -> &'static str {
        match self {
            Vendor::Native => "requestFullscreen",
            Vendor::Moz => "mozRequestFullScreen",
            Vendor::Ms => "msRequestFullscreen",
            Vendor::Webkit => "webkitRequestFullscreen",
        }
    }

    /// Host name of the document's exit-fullscreen method.
    ///
    /// `moz` calls this "cancel" rather than "exit".
    pub fn exit_method(self) -> &'static str {
        match self {
            Vendor::Native => "exitFullscreen",
            Vendor::Moz => "mozCancelFullScreen",
            Vendor::Ms => "msExitFullscreen",
            Vendor::Webkit => "webkitExitFullscreen",
        }
    }

    /// Host name of the document's fullscreen-element property.
    pub fn element_property(self) -> &'static str {
        match self {
            Vendor::Native => "fullscreenElement",
            Vendor::Moz => "mozFullScreenElement",
            Vendor::Ms => "msFullscreenElement",
            Vendor::Webkit => "webkitFullscreenElement",
        }
    }

    /// Host name of the document's fullscreen-enabled property.
    pub fn enabled_property(self) -> &'static str {
        match self {
            Vendor::Native => "fullscreenEnabled",
            Vendor::Moz => "mozFullScreenEnabled",
            Vendor::Ms => "msFullscreenEnabled",
            Vendor::Webkit => "webkitFullscreenEnabled",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Native => write!(f, "native"),
            other => write!(f, "{}", other.prefix()),
        }
    }
}

/// Error parsing a vendor name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vendor prefix: {0:?}")]
pub struct UnknownVendor(pub String);

impl FromStr for Vendor {
    type Err = UnknownVendor;

    /// Accepts the display names; the empty string also maps to `Native`,
    /// mirroring its empty property prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" | "" => Ok(Vendor::Native),
            "moz" => Ok(Vendor::Moz),
            "ms" => Ok(Vendor::Ms),
            "webkit" => Ok(Vendor::Webkit),
            other => Err(UnknownVendor(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_order_prefers_native() {
        assert_eq!(Vendor::PROBE_ORDER[0], Vendor::Native);
        assert_eq!(Vendor::PROBE_ORDER.len(), 4);
    }

    #[test]
    fn test_name_tables() {
        assert_eq!(Vendor::Native.request_method(), "requestFullscreen");
        assert_eq!(Vendor::Moz.request_method(), "mozRequestFullScreen");
        assert_eq!(Vendor::Moz.exit_method(), "mozCancelFullScreen");
        assert_eq!(Vendor::Ms.element_property(), "msFullscreenElement");
        assert_eq!(Vendor::Webkit.enabled_property(), "webkitFullscreenEnabled");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for vendor in Vendor::PROBE_ORDER {
            assert_eq!(vendor.to_string().parse::<Vendor>().unwrap(), vendor);
        }
        assert_eq!("".parse::<Vendor>().unwrap(), Vendor::Native);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "opera".parse::<Vendor>().unwrap_err();
        assert_eq!(err, UnknownVendor("opera".to_string()));
    }
}
