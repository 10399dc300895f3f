use super::{Matrix4x4, Point3, Vec3};

/// A half line. Directions are not required to be normalized: shapes intersect rays that have been
/// scaled into their local space, and t values stay valid in world space because of that.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn position(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    pub fn transform(&self, m: &Matrix4x4) -> Self {
        Ray {
            origin: *m * self.origin,
            direction: *m * self.direction,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::ApproxEq;

    #[test]
    fn test_position() {
        let r = Ray::new(Point3::new(2.0, 3.0, 4.0), Vec3::X);
        assert!(r.position(0.0).approx_eq(&Point3::new(2.0, 3.0, 4.0)));
        assert!(r.position(1.0).approx_eq(&Point3::new(3.0, 3.0, 4.0)));
        assert!(r.position(-1.0).approx_eq(&Point3::new(1.0, 3.0, 4.0)));
        assert!(r.position(2.5).approx_eq(&Point3::new(4.5, 3.0, 4.0)));
    }

    #[test]
    fn test_transform() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::Y);
        let r2 = r.transform(&Matrix4x4::translation(3.0, 4.0, 5.0));
        assert!(r2.origin.approx_eq(&Point3::new(4.0, 6.0, 8.0)));
        assert!(r2.direction.approx_eq(&Vec3::Y));

        let r3 = r.transform(&Matrix4x4::scaling(2.0, 3.0, 4.0));
        assert!(r3.origin.approx_eq(&Point3::new(2.0, 6.0, 12.0)));
        assert!(r3.direction.approx_eq(&Vec3::new(0.0, 3.0, 0.0)));
    }
}
