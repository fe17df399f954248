use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Lab, Rgb};
use crate::error::{Error, Result};

/// Gamma-encoded sRGB with components in a nominal [0, 1] range.
///
/// This is the device-facing representation: bytes and hex strings come
/// in and out here, everything else in the crate works in linear light.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Srgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Srgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Srgb { r, g, b }
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Srgb {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// 8-bit channel values, clamped to the displayable range.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(Error::InvalidHexColor(hex.to_string()));
        }
        let channel =
            |s: &str| u8::from_str_radix(s, 16).map_err(|_| Error::InvalidHexColor(hex.to_string()));

        match digits.len() {
            6 => Ok(Self::from_bytes(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => Ok(Self::from_bytes(
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            _ => Err(Error::InvalidHexColor(hex.to_string())),
        }
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The components as a fresh `[r, g, b]` array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear-light RGB via the sRGB transfer function.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(linearize(self.r), linearize(self.g), linearize(self.b))
    }

    /// Convenience chain through linear RGB and XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_rgb().to_xyz().to_lab()
    }
}

#[inline]
fn linearize(c: f32) -> f32 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Srgb::from_hex("#ff8040").unwrap();
        assert_eq!(color.to_bytes(), [255, 128, 64]);
        assert_eq!(color.to_hex(), "#ff8040");
    }

    #[test]
    fn parses_shorthand_and_missing_prefix() {
        assert_eq!(Srgb::from_hex("#f00").unwrap().to_bytes(), [255, 0, 0]);
        assert_eq!(Srgb::from_hex("336699").unwrap().to_bytes(), [51, 102, 153]);
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "#12345", "#gg0000", "#12345678", "#ffà"] {
            assert!(matches!(
                Srgb::from_hex(input),
                Err(Error::InvalidHexColor(_))
            ));
        }
    }

    #[test]
    fn to_bytes_clamps_out_of_range_components() {
        assert_eq!(Srgb::new(1.2, -0.1, 0.5).to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn linearize_round_trips_through_encode() {
        let original = Srgb::from_bytes(200, 100, 30);
        let back = original.to_rgb().to_srgb();
        assert!((back.r() - original.r()).abs() < 1e-5);
        assert!((back.g() - original.g()).abs() < 1e-5);
        assert!((back.b() - original.b()).abs() < 1e-5);
    }
}
