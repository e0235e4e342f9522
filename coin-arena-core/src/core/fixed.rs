//! Q16.16 Fixed-Point Arithmetic
//!
//! Deterministic fixed-point math for the game loop.
//! Positions, speeds and radii are integers; floats appear only at the
//! configuration and presentation edges.
//!
//! ## Format: Q16.16
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bit Layout: Q16.16 (32-bit signed integer)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  [S][IIIIIIIIIIIIIIII][FFFFFFFFFFFFFFFF]                    │
//! │   │  └──── 16 bits ────┘└──── 16 bits ────┘                 │
//! │   └─ Sign bit                                               │
//! │                                                             │
//! │  Range: -32768.0 to +32767.99998 (approx)                   │
//! │  Precision: 1/65536 ≈ 0.000015 units                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

/// Q16.16 fixed-point number stored as i32.
/// 16 bits integer, 16 bits fractional.
pub type Fixed = i32;

/// Number of fractional bits (16)
pub const FIXED_SCALE: i32 = 16;

/// 1.0 in fixed-point (65536)
pub const FIXED_ONE: Fixed = 1 << FIXED_SCALE; // 65536

/// 0.5 in fixed-point (32768)
pub const FIXED_HALF: Fixed = FIXED_ONE >> 1; // 32768

// =============================================================================
// GAME CONSTANTS
// =============================================================================

/// Arena half-extent: 24.0 = 24 * 65536 = 1572864
pub const ARENA_BOUND: Fixed = 1572864;

/// Half-extent of the square obstacles and coins are scattered over: 10.0
pub const SPAWN_HALF_EXTENT: Fixed = 655360;

/// Avatar displacement per tick per held direction: 0.15 (floor)
pub const AVATAR_SPEED: Fixed = 9830;

/// Avatar/obstacle rejection distance: 1.0
pub const COLLISION_RADIUS: Fixed = FIXED_ONE;

/// Avatar/coin pickup distance: 1.0
pub const COLLECTION_RADIUS: Fixed = FIXED_ONE;

/// Coin spin per tick in radians: 0.05 (floor)
pub const COIN_SPIN_STEP: Fixed = 3276;

/// Full turn in radians: 2π (floor)
pub const FIXED_TAU: Fixed = 411774;

/// 1/√2, used when diagonal movement is normalized (round)
pub const FIXED_FRAC_1_SQRT_2: Fixed = 46341;

/// Avatar root height above the floor: 0.5
pub const AVATAR_HEIGHT: Fixed = FIXED_HALF;

/// Coin centre height: 0.5
pub const COIN_HEIGHT: Fixed = FIXED_HALF;

/// Obstacle centre height: 1.0
pub const OBSTACLE_HEIGHT: Fixed = FIXED_ONE;

// =============================================================================
// CORE OPERATIONS
// =============================================================================

/// Convert a float to fixed-point.
///
/// # Warning
/// Only use at compile-time or when loading configuration. Never in the tick.
///
/// # Example
/// ```
/// use coin_arena::core::fixed::{to_fixed, FIXED_ONE};
/// const MY_VALUE: i32 = to_fixed(2.5);
/// assert_eq!(MY_VALUE, FIXED_ONE * 2 + FIXED_ONE / 2);
/// ```
#[inline]
pub const fn to_fixed(f: f64) -> Fixed {
    (f * (FIXED_ONE as f64)) as Fixed
}

/// Convert fixed-point to float for display/rendering.
#[inline]
pub fn to_float(f: Fixed) -> f32 {
    f as f32 / FIXED_ONE as f32
}

/// Multiply two fixed-point numbers.
///
/// Uses an i64 intermediate, then truncates (arithmetic shift).
#[inline]
pub fn fixed_mul(a: Fixed, b: Fixed) -> Fixed {
    let wide = (a as i64) * (b as i64);
    (wide >> FIXED_SCALE) as Fixed
}

/// Exact square of a fixed-point number, widened to i64.
///
/// The result has 32 fractional bits and no rounding, so distance
/// comparisons built on it are exact.
#[inline]
pub fn fixed_square_wide(a: Fixed) -> i64 {
    let a = a as i64;
    a * a
}

/// Clamp a fixed-point number to a range.
#[inline]
pub fn fixed_clamp(value: Fixed, min: Fixed, max: Fixed) -> Fixed {
    value.max(min).min(max)
}

/// Wrap an angle into `[0, FIXED_TAU)`.
#[inline]
pub fn wrap_angle(angle: Fixed) -> Fixed {
    angle.rem_euclid(FIXED_TAU)
}

// =============================================================================
// TESTS
// =============================================================================
