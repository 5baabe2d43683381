// crates/engine_shared/src/math.rs
//! Plain value types: vectors, colors and sizes.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D vector used for positions, offsets and displacements.
///
/// Component-wise `+ - * /` come from glam. Dividing by a zero component
/// yields inf/NaN; callers guard against it.
pub type Vector2 = glam::Vec2;

// ==================================================================================
// ColorRgba
// ==================================================================================

/// 8-bit RGBA color. All arithmetic saturates per channel, it never wraps.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from wide integers, clamping each channel into `[0, 255]`.
    pub fn from_clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b), clamp_channel(a))
    }

    fn zip_with(self, rhs: Self, op: impl Fn(u8, u8) -> u8) -> Self {
        Self::new(op(self.r, rhs.r), op(self.g, rhs.g), op(self.b, rhs.b), op(self.a, rhs.a))
    }

    fn map(self, op: impl Fn(u8) -> u8) -> Self {
        Self::new(op(self.r), op(self.g), op(self.b), op(self.a))
    }
}

impl Default for ColorRgba {
    fn default() -> Self {
        Self::WHITE
    }
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// `x / 0` saturates to the channel ceiling instead of trapping; `0 / 0` stays 0.
fn saturating_div(a: u8, b: u8) -> u8 {
    match a.checked_div(b) {
        Some(v) => v,
        None if a == 0 => 0,
        None => u8::MAX,
    }
}

impl Add for ColorRgba {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, u8::saturating_add)
    }
}

impl Sub for ColorRgba {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, u8::saturating_sub)
    }
}

impl Mul for ColorRgba {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, u8::saturating_mul)
    }
}

impl Div for ColorRgba {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, saturating_div)
    }
}

impl Mul<f32> for ColorRgba {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        // `as u8` on a float saturates (and maps NaN to 0).
        self.map(|c| (c as f32 * factor).round() as u8)
    }
}

impl AddAssign for ColorRgba {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ColorRgba {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for ColorRgba {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for ColorRgba {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl fmt::Display for ColorRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ==================================================================================
// Size
// ==================================================================================

/// Width/height pair. Negative or zero sizes are allowed; callers decide what
/// a mirrored or degenerate size means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Multiply both dimensions by the same factor.
    pub fn scale(&mut self, factor: f32) {
        self.width *= factor;
        self.height *= factor;
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    pub fn as_vec2(self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    pub fn half(self) -> Vector2 {
        self.as_vec2() / 2.0
    }
}

impl From<Vector2> for Size {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Size {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul for Size {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.width * rhs.width, self.height * rhs.height)
    }
}

impl Div for Size {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.width / rhs.width, self.height / rhs.height)
    }
}

impl Mul<f32> for Size {
    type Output = Self;
    fn mul(self, factor: f32) -> Self {
        self.scaled(factor)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Size {
    fn mul_assign(&mut self, factor: f32) {
        self.scale(factor);
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_add_saturates_at_255() {
        let c = ColorRgba::new(200, 10, 255, 128) + ColorRgba::new(100, 10, 1, 200);
        assert_eq!(c, ColorRgba::new(255, 20, 255, 255));
    }

    #[test]
    fn color_sub_saturates_at_zero() {
        let mut c = ColorRgba::new(10, 100, 0, 255);
        c -= ColorRgba::new(20, 50, 1, 0);
        assert_eq!(c, ColorRgba::new(0, 50, 0, 255));
    }

    #[test]
    fn color_add_sub_stay_in_range_for_all_channel_pairs() {
        // Every channel pair, one channel at a time; u8 makes the range check
        // about saturation, not representation.
        for a in (0u8..=255).step_by(5) {
            for b in (0u8..=255).step_by(5) {
                let sum = ColorRgba::new(a, 0, 0, 0) + ColorRgba::new(b, 0, 0, 0);
                let diff = ColorRgba::new(a, 0, 0, 0) - ColorRgba::new(b, 0, 0, 0);
                assert_eq!(sum.r as i32, (a as i32 + b as i32).min(255));
                assert_eq!(diff.r as i32, (a as i32 - b as i32).max(0));
            }
        }
    }

    #[test]
    fn color_mul_and_div_saturate() {
        let c = ColorRgba::new(20, 2, 0, 255) * ColorRgba::new(20, 3, 9, 1);
        assert_eq!(c, ColorRgba::new(255, 6, 0, 255));

        let d = ColorRgba::new(10, 0, 9, 255) / ColorRgba::new(0, 0, 3, 255);
        assert_eq!(d, ColorRgba::new(255, 0, 3, 1));
    }

    #[test]
    fn color_scalar_multiply_clamps() {
        assert_eq!(ColorRgba::new(100, 200, 0, 255) * 2.0, ColorRgba::new(200, 255, 0, 255));
        assert_eq!(ColorRgba::new(100, 200, 0, 255) * -1.0, ColorRgba::TRANSPARENT);
    }

    #[test]
    fn from_clamped_clamps_wide_values() {
        assert_eq!(ColorRgba::from_clamped(-5, 300, 7, 255), ColorRgba::new(0, 255, 7, 255));
    }

    #[test]
    fn size_scale_allows_negative_factor() {
        let mut s = Size::new(4.0, 2.0);
        s.scale(-0.5);
        assert_eq!(s, Size::new(-2.0, -1.0));
        s *= 0.0;
        assert_eq!(s.width, 0.0);
    }

    #[test]
    fn size_half_is_center() {
        assert_eq!(Size::new(800.0, 600.0).half(), Vector2::new(400.0, 300.0));
    }
}
