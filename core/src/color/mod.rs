mod lab;
mod rgb;
mod srgb;
mod xyz;

pub use lab::Lab;
pub use rgb::Rgb;
pub use srgb::Srgb;
pub use xyz::Xyz;

// --- Constants for the piecewise LAB linearization ---
// EPSILON is the CIE threshold (6/29)^3; LINEAR_SLOPE the reciprocal slope
// of the linear segment near black.
pub(crate) const EPSILON: f32 = 0.008856451;
pub(crate) const LINEAR_SLOPE: f32 = 7.787037;

/// Chrominance-only view of a color: just the `a` (green-red) and `b`
/// (blue-yellow) components, for callers that compare saturation without
/// caring about lightness.
pub trait ChromaPoint {
    fn chroma_a(&self) -> f32;
    fn chroma_b(&self) -> f32;

    /// Euclidean distance from the neutral (a = 0, b = 0) axis.
    fn distance_to_gray(&self) -> f32 {
        let a = self.chroma_a();
        let b = self.chroma_b();
        (a * a + b * b).sqrt()
    }
}
