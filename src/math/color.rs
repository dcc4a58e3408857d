use crate::math::misc::approximately_equal;

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default)]
pub struct RGBColor([f32; 3]);

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor([r, g, b])
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.0[0]
    }
    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn channels(&self) -> [f32; 3] {
        self.0
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(channels: [f32; 3]) -> RGBColor {
        RGBColor(channels)
    }
}

impl PartialEq for RGBColor {
    fn eq(&self, other: &RGBColor) -> bool {
        approximately_equal(self.r(), other.r())
            && approximately_equal(self.g(), other.g())
            && approximately_equal(self.b(), other.b())
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r() + other.r(), self.g() + other.g(), self.b() + other.b())
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Sub for RGBColor {
    type Output = RGBColor;
    fn sub(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r() - other.r(), self.g() - other.g(), self.b() - other.b())
    }
}

impl SubAssign for RGBColor {
    fn sub_assign(&mut self, other: RGBColor) {
        *self = *self - other;
    }
}

// hadamard product, used for blending
impl Mul for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r() * other.r(), self.g() * other.g(), self.b() * other.b())
    }
}

impl MulAssign for RGBColor {
    fn mul_assign(&mut self, other: RGBColor) {
        *self = *self * other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor(self.0.map(|c| c * other))
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl MulAssign<f32> for RGBColor {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters() {
        let color = RGBColor::new(-0.5, 0.4, 1.7);
        assert_eq!(color.r(), -0.5);
        assert_eq!(color.g(), 0.4);
        assert_eq!(color.b(), 1.7);
    }

    #[test]
    fn test_addition_and_subtraction() {
        let c1 = RGBColor::new(1.5, 0.75, 0.5);
        let c2 = RGBColor::new(0.5, 0.25, 0.25);
        assert_eq!(c1 + c2, RGBColor::new(2.0, 1.0, 0.75));
        assert_eq!(c1 - c2, RGBColor::new(1.0, 0.5, 0.25));

        let mut c = c1;
        c += c2;
        c -= c2;
        assert_eq!(c, c1);
    }

    #[test]
    fn test_scaling() {
        let c = RGBColor::new(0.25, 0.5, 0.75);
        assert_eq!(c * 2.0, RGBColor::new(0.5, 1.0, 1.5));
        assert_eq!(2.0 * c, RGBColor::new(0.5, 1.0, 1.5));
        let mut c = c;
        c *= 4.0;
        assert_eq!(c, RGBColor::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_hadamard_product() {
        let c1 = RGBColor::new(1.0, 0.5, 0.25);
        let c2 = RGBColor::new(0.5, 1.0, 0.5);
        assert_eq!(c1 * c2, RGBColor::new(0.5, 0.5, 0.125));
        assert_eq!(RGBColor::WHITE * c1, c1);
        assert_eq!(RGBColor::BLACK * c1, RGBColor::BLACK);
    }

    #[test]
    fn test_approximate_equality() {
        assert_ne!(RGBColor::new(0.5, 0.5, 0.5), RGBColor::new(0.5, 0.5, 0.5001));
    }
}
