use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Lab, Rgb, EPSILON, LINEAR_SLOPE};

/// CIE XYZ tristimulus values, scaled so the reference white has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    x: f32,
    y: f32,
    z: f32,
}

impl Xyz {
    /// D65 standard illuminant white point, 2 degree observer.
    pub const D65: Xyz = Xyz {
        x: 0.95047,
        y: 1.0,
        z: 1.08883,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Xyz { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// The components as a fresh `[x, y, z]` array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Forward XYZ -> LAB transform against the D65 reference white,
    /// producing components in this crate's [0, 1] scale.
    pub fn to_lab(&self) -> Lab {
        let fx = pivot(self.x / Self::D65.x);
        let fy = pivot(self.y / Self::D65.y);
        let fz = pivot(self.z / Self::D65.z);

        Lab::new(
            (116.0 * fy - 16.0) / 100.0,
            5.0 * (fx - fy),
            2.0 * (fy - fz),
        )
    }

    /// Linear-light RGB via the sRGB D65 matrix. Components are left
    /// unclamped so out-of-gamut colors stay representable.
    pub fn to_rgb(&self) -> Rgb {
        let r = self.x * 3.2404542 - self.y * 1.5371385 - self.z * 0.4985314;
        let g = self.x * -0.969266 + self.y * 1.8760108 + self.z * 0.0415560;
        let b = self.x * 0.0556434 - self.y * 0.2040259 + self.z * 1.0572252;
        Rgb::new(r, g, b)
    }
}

#[inline]
fn pivot(n: f32) -> f32 {
    if n > EPSILON {
        n.cbrt()
    } else {
        LINEAR_SLOPE * n + 16.0 / 116.0
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xyz({}, {}, {})", self.x, self.y, self.z)
    }
}
