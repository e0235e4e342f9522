//! Fixed-Point Plane Vector
//!
//! Positions on the horizontal (x, z) floor plane.
//! Height is constant per entity kind and never enters gameplay math.

use std::fmt;
use std::ops::{Add, Sub};
use serde::{Serialize, Deserialize};

use super::fixed::{Fixed, FIXED_ONE, fixed_clamp, fixed_square_wide};

/// Point or displacement on the floor plane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    /// X component (Q16.16), positive to the right
    pub x: Fixed,
    /// Z component (Q16.16), positive towards the camera
    pub z: Fixed,
}

impl FixedVec2 {
    /// Origin
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new vector from fixed-point components.
    #[inline]
    pub const fn new(x: Fixed, z: Fixed) -> Self {
        Self { x, z }
    }

    /// Squared distance to another point, widened to i64.
    ///
    /// Compare against `fixed_square_wide(radius)` instead of taking a root.
    #[inline]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x.wrapping_sub(other.x);
        let dz = self.z.wrapping_sub(other.z);
        fixed_square_wide(dx) + fixed_square_wide(dz)
    }

    /// True when `other` lies strictly closer than `radius`.
    #[inline]
    pub fn is_within(self, other: Self, radius: Fixed) -> bool {
        self.distance_squared(other) < fixed_square_wide(radius)
    }

    /// Clamp both components independently into `[-bound, bound]`.
    #[inline]
    pub fn clamp_square(self, bound: Fixed) -> Self {
        Self {
            x: fixed_clamp(self.x, -bound, bound),
            z: fixed_clamp(self.z, -bound, bound),
        }
    }

    /// Check whether both components lie within `[-bound, bound]`.
    #[inline]
    pub fn is_in_square(self, bound: Fixed) -> bool {
        self.x >= -bound && self.x <= bound && self.z >= -bound && self.z <= bound
    }

    /// Convert to float tuple for rendering.
    #[inline]
    pub fn to_floats(self) -> (f32, f32) {
        (
            self.x as f32 / FIXED_ONE as f32,
            self.z as f32 / FIXED_ONE as f32,
        )
    }
}

impl Add for FixedVec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_add(rhs.x),
            z: self.z.wrapping_add(rhs.z),
        }
    }
}

impl Sub for FixedVec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_sub(rhs.x),
            z: self.z.wrapping_sub(rhs.z),
        }
    }
}

impl fmt::Debug for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fz) = self.to_floats();
        write!(f, "Vec2({:.3}, {:.3})", fx, fz)
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fx, fz) = self.to_floats();
        write!(f, "({:.3}, {:.3})", fx, fz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{to_fixed, ARENA_BOUND};

    #[test]
    fn test_vec2_add_sub() {
        let a = FixedVec2::new(to_fixed(3.0), to_fixed(4.0));
        let b = FixedVec2::new(to_fixed(1.0), to_fixed(2.0));
        assert_eq!(a + b, FixedVec2::new(to_fixed(4.0), to_fixed(6.0)));
        assert_eq!(a - b, FixedVec2::new(to_fixed(2.0), to_fixed(2.0)));
    }

    #[test]
    fn test_vec2_distance() {
        let a = FixedVec2::ZERO;
        let b = FixedVec2::new(to_fixed(3.0), to_fixed(4.0));
        assert_eq!(a.distance_squared(b), 25i64 << 32);
    }

    #[test]
    fn test_is_within_is_strict() {
        let a = FixedVec2::ZERO;
        let on_edge = FixedVec2::new(FIXED_ONE, 0);
        let inside = FixedVec2::new(FIXED_ONE - 1, 0);

        assert!(!a.is_within(on_edge, FIXED_ONE));
        assert!(a.is_within(inside, FIXED_ONE));
    }

    #[test]
    fn test_is_within_has_no_rounding_slack() {
        // Truly ~1.000000009 away; per-axis truncation would call it inside
        let just_outside = FixedVec2::new(1578, 65517);
        assert!(!FixedVec2::ZERO.is_within(just_outside, FIXED_ONE));

        let just_inside = FixedVec2::new(1578, 65516);
        assert!(FixedVec2::ZERO.is_within(just_inside, FIXED_ONE));
    }

    #[test]
    fn test_clamp_square() {
        let inside = FixedVec2::new(to_fixed(10.0), to_fixed(-20.0));
        assert_eq!(inside.clamp_square(ARENA_BOUND), inside);

        let outside = FixedVec2::new(to_fixed(100.0), to_fixed(-100.0));
        let clamped = outside.clamp_square(ARENA_BOUND);
        assert_eq!(clamped, FixedVec2::new(ARENA_BOUND, -ARENA_BOUND));
        assert!(clamped.is_in_square(ARENA_BOUND));
    }
}
