//! RGBA color value type.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An RGBA color with 8-bit channels and a fractional alpha.
///
/// Out-of-range values are rejected at construction, never clamped:
/// channel values outside 0..=255 cannot be represented by `u8`, and the
/// alpha must lie in `[0.0, 1.0]`. Deserialization routes through
/// [`RgbaColor::new`], so an out-of-range alpha in a JSON payload fails
/// deserialization instead of producing a silently adjusted color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRgba")]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Wire shape for [`RgbaColor`]; validated on conversion.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawRgba {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl TryFrom<RawRgba> for RgbaColor {
    type Error = CoreError;

    fn try_from(raw: RawRgba) -> Result<Self, Self::Error> {
        RgbaColor::new(raw.r, raw.g, raw.b, raw.a)
    }
}

impl RgbaColor {
    /// Construct a color, rejecting an alpha outside `[0.0, 1.0]`.
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&a) {
            return Err(CoreError::Validation(format!(
                "Alpha must be between 0.0 and 1.0, got {a}"
            )));
        }
        Ok(Self { r, g, b, a })
    }

    /// Construct a fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS `rgba(...)` string form, consumed directly by chart clients.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
