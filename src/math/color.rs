use super::{approx_eq, ApproxEq};

use std::ops::{Add, Mul, Sub};

/// Linear rgb triple. Channels are not clamped until the image is exported.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

// hadamard product
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f64 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for RGBColor {
    type Output = RGBColor;
    fn sub(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl From<f64> for RGBColor {
    fn from(s: f64) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(c: [f64; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl ApproxEq for RGBColor {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}
