use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ChromaPoint, Rgb, Srgb, Xyz, EPSILON, LINEAR_SLOPE};

/// Color in CIE LAB space.
///
/// All three components are stored in a nominal [0, 1] range: standard L*
/// divided by 100, standard a*/b* divided by 100. The components are kept
/// verbatim; nothing clamps out-of-range inputs, they simply flow through
/// the math. Behavior with NaN or infinite components is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    l: f32,
    a: f32,
    b: f32,
}

impl Lab {
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Lab { l, a, b }
    }

    /// Lightness.
    #[inline]
    pub fn l(&self) -> f32 {
        self.l
    }

    /// Green-red chrominance.
    #[inline]
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Blue-yellow chrominance.
    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// CIE94 color difference with the default graphic-arts weights
    /// (kL = kC = kH = 1, K1 = 0.045, K2 = 0.015).
    /// https://en.wikipedia.org/wiki/Color_difference#CIE94
    ///
    /// The chroma scale factors are computed from `self` only, as in the
    /// reference formula, so the metric is not symmetric in general.
    pub fn distance_to(&self, other: &Lab) -> f32 {
        let k1: f32 = 0.045;
        let k2: f32 = 0.015;

        let delta_l = self.l - other.l;

        let c1 = (self.a * self.a + self.b * self.b).sqrt();
        let c2 = (other.a * other.a + other.b * other.b).sqrt();
        let delta_c = c1 - c2;

        let delta_a = self.a - other.a;
        let delta_b = self.b - other.b;

        // Round-off can push the radicand a hair below zero when the two
        // chromas are nearly equal; clamp instead of letting sqrt go NaN.
        let delta_h_sq = delta_a * delta_a + delta_b * delta_b - delta_c * delta_c;
        let delta_h = if delta_h_sq > 0.0 {
            delta_h_sq.sqrt()
        } else {
            0.0
        };

        let s_c = 1.0 + k1 * c1;
        let s_h = 1.0 + k2 * c1;

        let term_c = delta_c / s_c;
        let term_h = delta_h / s_h;

        (delta_l * delta_l + term_c * term_c + term_h * term_h)
            .max(0.0)
            .sqrt()
    }

    /// The components as a fresh `[l, a, b]` array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }

    /// Inverse LAB -> XYZ transform against the D65 reference white.
    ///
    /// The divisors 5 and 2 (instead of the textbook 500 and 200) match
    /// the [0, 1] component scale used throughout this crate.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l * 100.0 + 16.0) / 116.0;
        let fx = self.a / 5.0 + fy;
        let fz = fy - self.b / 2.0;

        Xyz::new(
            Xyz::D65.x() * inv_pivot(fx),
            Xyz::D65.y() * inv_pivot(fy),
            Xyz::D65.z() * inv_pivot(fz),
        )
    }

    pub fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    pub fn to_srgb(&self) -> Srgb {
        self.to_xyz().to_rgb().to_srgb()
    }
}

// Inverse of the forward pivot in `Xyz::to_lab`: cube above the CIE
// threshold, linear segment below to keep the transform well-conditioned
// near black.
#[inline]
fn inv_pivot(f: f32) -> f32 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (f - 16.0 / 116.0) / LINEAR_SLOPE
    }
}

impl ChromaPoint for Lab {
    fn chroma_a(&self) -> f32 {
        self.a
    }

    fn chroma_b(&self) -> f32 {
        self.b
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let color = Lab::new(0.2, 0.4, 0.6);
        assert_eq!(color.distance_to(&color), 0.0);
    }

    #[test]
    fn distance_is_non_negative_for_collinear_chroma() {
        // Scaled copies keep the hue term analytically zero, which is
        // exactly where round-off drives the radicand slightly negative.
        let base = Lab::new(0.5, 0.3, 0.7);
        let scaled = Lab::new(0.5, 0.3 * 1.000_000_1, 0.7 * 1.000_000_1);
        let d = base.distance_to(&scaled);
        assert!(!d.is_nan());
        assert!(d >= 0.0);
    }

    #[test]
    fn distance_is_asymmetric_for_differing_chroma() {
        let low_chroma = Lab::new(0.5, 0.3, 0.0);
        let high_chroma = Lab::new(0.7, 0.0, 0.6);
        let forward = low_chroma.distance_to(&high_chroma);
        let backward = high_chroma.distance_to(&low_chroma);
        assert!((forward - 0.695_988_5).abs() < 1e-4);
        assert!((backward - 0.692_052_3).abs() < 1e-4);
        assert!(forward != backward);
    }

    #[test]
    fn gray_distance_is_chroma() {
        assert_eq!(Lab::new(0.5, 0.0, 0.0).distance_to_gray(), 0.0);
        assert_eq!(Lab::new(0.5, 1.0, 0.0).distance_to_gray(), 1.0);
        assert!((Lab::new(0.1, 0.3, 0.4).distance_to_gray() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn to_array_is_an_independent_copy() {
        let color = Lab::new(0.1, 0.2, 0.3);
        let mut array = color.to_array();
        assert_eq!(array, [0.1, 0.2, 0.3]);
        array[0] = 9.0;
        assert_eq!(color.l(), 0.1);
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn to_xyz_matches_reference_values() {
        let xyz = Lab::new(0.5, 0.55, 0.55).to_xyz();
        assert!((xyz.x() - 0.297_496_3).abs() < 1e-4);
        assert!((xyz.y() - 0.184_186_5).abs() < 1e-4);
        assert!((xyz.z() - 0.027_659_8).abs() < 1e-4);
    }

    #[test]
    fn xyz_round_trip_recovers_components() {
        for color in [
            Lab::new(0.5, 0.5, 0.5),
            // Near-black exercises the linear branch of the transform.
            Lab::new(0.0, 0.5, 0.5),
        ] {
            let back = color.to_xyz().to_lab();
            assert!((back.l() - color.l()).abs() < 1e-4);
            assert!((back.a() - color.a()).abs() < 1e-4);
            assert!((back.b() - color.b()).abs() < 1e-4);
        }
    }
}
