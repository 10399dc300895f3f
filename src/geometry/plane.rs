use crate::hittable::{Hittable, Roots};
use crate::math::*;

use smallvec::smallvec;

/// The infinite xz plane through the local origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane;

impl Hittable for Plane {
    fn local_intersect(&self, r: &Ray) -> Roots {
        if r.direction.y.abs() < EPSILON {
            // parallel or coplanar
            return Roots::new();
        }
        smallvec![-r.origin.y / r.direction.y]
    }

    fn local_normal(&self, _local_point: Point3) -> Vec3 {
        Vec3::Y
    }
}
