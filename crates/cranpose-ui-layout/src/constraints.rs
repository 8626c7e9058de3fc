//! Layout constraints system

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Exact `width`, height free to wrap content up to `max_height`.
    ///
    /// A non-positive `max_height` leaves the height unbounded.
    pub fn fill_width_wrap_height(width: f32, max_height: f32) -> Self {
        let max_height = if max_height > 0.0 {
            max_height
        } else {
            f32::INFINITY
        };
        Self {
            min_width: width,
            max_width: width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Returns true if both width and height are tight (min == max).
    pub fn is_tight(&self) -> bool {
        self.has_tight_width() && self.min_height == self.max_height
    }

    /// Returns true if the width is tight (min == max).
    #[inline]
    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    /// Returns true if the height is bounded (max_height is finite).
    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
