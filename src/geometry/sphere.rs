use crate::hittable::{Hittable, Roots};
use crate::math::*;

use smallvec::smallvec;

/// Unit sphere centered on the local origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sphere;

impl Hittable for Sphere {
    fn local_intersect(&self, r: &Ray) -> Roots {
        let sphere_to_ray = r.origin - Point3::ORIGIN;
        let a = r.direction * r.direction;
        let b = 2.0 * (r.direction * sphere_to_ray);
        let c = sphere_to_ray * sphere_to_ray - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Roots::new();
        }
        let discriminant_sqrt = discriminant.sqrt();
        smallvec![
            (-b - discriminant_sqrt) / (2.0 * a),
            (-b + discriminant_sqrt) / (2.0 * a),
        ]
    }

    fn local_normal(&self, local_point: Point3) -> Vec3 {
        // normalized once, after mapping back to world space
        local_point - Point3::ORIGIN
    }
}
