use super::{MathError, Matrix4x4, Point3, Ray, Vec3};

use std::ops::{Div, Mul};

/// A matrix paired with its inverse, so that objects can move rays into their local space without
/// inverting on every intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    pub forward: Matrix4x4,
    pub reverse: Matrix4x4,
}

impl Transform3 {
    pub fn try_new(forward: Matrix4x4) -> Result<Self, MathError> {
        Ok(Transform3 {
            forward,
            reverse: forward.try_inverse()?,
        })
    }

    /// Panics if `forward` is singular.
    pub fn new(forward: Matrix4x4) -> Self {
        Transform3 {
            forward,
            reverse: forward.inverse(),
        }
    }

    pub fn identity() -> Self {
        Transform3 {
            forward: Matrix4x4::identity(),
            reverse: Matrix4x4::identity(),
        }
    }

    pub fn new_from_raw(forward: Matrix4x4, reverse: Matrix4x4) -> Self {
        Transform3 { forward, reverse }
    }

    pub fn inverse(&self) -> Self {
        Transform3::new_from_raw(self.reverse, self.forward)
    }

    /// Maps a local space normal to world space through the inverse transpose, which stays
    /// perpendicular to the surface under non-uniform scaling.
    pub fn normal_to_world(&self, local_normal: Vec3) -> Vec3 {
        (self.reverse.transpose() * local_normal).normalized()
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Transform3::identity()
    }
}

impl From<Matrix4x4> for Transform3 {
    fn from(forward: Matrix4x4) -> Self {
        Transform3::new(forward)
    }
}

impl Mul<Vec3> for Transform3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.forward * rhs
    }
}

impl Mul<Point3> for Transform3 {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Self::Output {
        self.forward * rhs
    }
}

// self * rhs applies rhs first.
impl Mul<Transform3> for Transform3 {
    type Output = Transform3;
    fn mul(self, rhs: Transform3) -> Self::Output {
        Transform3::new_from_raw(self.forward * rhs.forward, rhs.reverse * self.reverse)
    }
}

impl Div<Vec3> for Transform3 {
    type Output = Vec3;
    fn div(self, rhs: Vec3) -> Self::Output {
        self.reverse * rhs
    }
}

impl Div<Point3> for Transform3 {
    type Output = Point3;
    fn div(self, rhs: Point3) -> Self::Output {
        self.reverse * rhs
    }
}

impl Div<Ray> for Transform3 {
    type Output = Ray;
    fn div(self, rhs: Ray) -> Self::Output {
        rhs.transform(&self.reverse)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::ApproxEq;

    #[test]
    fn test_forward_and_reverse() {
        let transform = Transform3::new(Matrix4x4::translation(5.0, -3.0, 2.0));
        let p = Point3::new(-3.0, 4.0, 5.0);
        assert!((transform * p).approx_eq(&Point3::new(2.0, 1.0, 7.0)));
        assert!((transform / p).approx_eq(&Point3::new(-8.0, 7.0, 3.0)));
        assert!((transform / (transform * p)).approx_eq(&p));
    }

    #[test]
    fn test_try_new_rejects_singular() {
        assert!(Transform3::try_new(Matrix4x4::scaling(1.0, 0.0, 1.0)).is_err());
        assert!(Transform3::try_new(Matrix4x4::scaling(1.0, 2.0, 1.0)).is_ok());
    }

    #[test]
    fn test_composition_applies_rhs_first() {
        let scale = Transform3::new(Matrix4x4::scaling(2.0, 2.0, 2.0));
        let shift = Transform3::new(Matrix4x4::translation(1.0, 0.0, 0.0));
        let combined = shift * scale;
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!((combined * p).approx_eq(&Point3::new(3.0, 2.0, 2.0)));
        assert!((combined / (combined * p)).approx_eq(&p));
    }

    #[test]
    fn test_normal_to_world_under_nonuniform_scale() {
        let transform = Transform3::new(Matrix4x4::scaling(1.0, 0.5, 1.0));
        let half = 2f64.sqrt() / 2.0;
        let n = transform.normal_to_world(Vec3::new(0.0, half, -half));
        assert!((n.norm() - 1.0).abs() < 1e-9);
        assert!(n.approx_eq(&Vec3::new(0.0, 0.89443, -0.44721)));
    }
}
