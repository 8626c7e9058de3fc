//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Rounds to the nearest whole device pixel.
    pub fn round_to_px(&self, density: f32) -> i32 {
        self.to_px(density).round() as i32
    }
}
