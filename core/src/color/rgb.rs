use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Srgb, Xyz};

/// Linear-light RGB with components in a nominal [0, 1] range.
///
/// Components are unclamped; values outside [0, 1] represent colors
/// outside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    r: f32,
    g: f32,
    b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
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

    /// The components as a fresh `[r, g, b]` array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// CIE XYZ via the sRGB D65 matrix.
    pub fn to_xyz(&self) -> Xyz {
        let x = self.r * 0.4124564 + self.g * 0.3575761 + self.b * 0.1804375;
        let y = self.r * 0.2126729 + self.g * 0.7151522 + self.b * 0.0721750;
        let z = self.r * 0.0193339 + self.g * 0.119_192 + self.b * 0.9503041;
        Xyz::new(x, y, z)
    }

    /// Gamma-encoded sRGB.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            gamma_encode(self.r),
            gamma_encode(self.g),
            gamma_encode(self.b),
        )
    }
}

#[inline]
fn gamma_encode(c: f32) -> f32 {
    if c > 0.0031308 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_map_to_matrix_columns() {
        let red = Rgb::new(1.0, 0.0, 0.0).to_xyz();
        assert!((red.x() - 0.4124564).abs() < 1e-6);
        assert!((red.y() - 0.2126729).abs() < 1e-6);
        assert!((red.z() - 0.0193339).abs() < 1e-6);
    }

    #[test]
    fn xyz_matrix_round_trips() {
        let original = Rgb::new(0.25, 0.5, 0.75);
        let back = original.to_xyz().to_rgb();
        assert!((back.r() - original.r()).abs() < 1e-4);
        assert!((back.g() - original.g()).abs() < 1e-4);
        assert!((back.b() - original.b()).abs() < 1e-4);
    }

    #[test]
    fn gamma_encode_uses_linear_segment_near_black() {
        let dark = Rgb::new(0.001, 0.0, 0.0).to_srgb();
        assert!((dark.r() - 0.01292).abs() < 1e-6);
        assert_eq!(dark.g(), 0.0);
    }
}
