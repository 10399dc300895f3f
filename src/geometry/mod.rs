mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::hittable::{Hittable, Roots};
use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}

impl Hittable for Primitive {
    fn local_intersect(&self, r: &Ray) -> Roots {
        match self {
            Primitive::Sphere(sphere) => sphere.local_intersect(r),
            Primitive::Plane(plane) => plane.local_intersect(r),
        }
    }
    fn local_normal(&self, local_point: Point3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.local_normal(local_point),
            Primitive::Plane(plane) => plane.local_normal(local_point),
        }
    }
}

/// A primitive placed in the world with its own material.
///
/// Shapes are compared by address, not by value: two intersections refer to the same shape only
/// if they borrow the same `Shape`. The refractive index bookkeeping in
/// [`crate::hittable::Intersection::prepare_computations`] relies on this.
#[derive(Clone, Debug)]
pub struct Shape {
    pub primitive: Primitive,
    // world <- local
    pub transform: Transform3,
    pub material: Material,
}

impl Shape {
    pub fn new(primitive: impl Into<Primitive>) -> Self {
        Shape {
            primitive: primitive.into(),
            transform: Transform3::identity(),
            material: Material::default(),
        }
    }

    pub fn sphere() -> Self {
        Shape::new(Sphere)
    }

    pub fn plane() -> Self {
        Shape::new(Plane)
    }

    pub fn glass_sphere() -> Self {
        Shape::sphere().with_material(Material::glass())
    }

    /// Panics if the transform is a singular matrix.
    pub fn with_transform(mut self, transform: impl Into<Transform3>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn set_transform(&mut self, transform: impl Into<Transform3>) {
        self.transform = transform.into();
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Every root along `ray`, in no particular order. t values are in world units because the
    /// local ray keeps its (possibly scaled) direction.
    pub fn intersect(&self, ray: &Ray) -> Roots {
        let local_ray = self.transform / *ray;
        self.primitive.local_intersect(&local_ray)
    }

    pub fn normal_at(&self, world_point: Point3) -> Vec3 {
        let local_point = self.transform / world_point;
        let local_normal = self.primitive.local_normal(local_point);
        self.transform.normal_to_world(local_normal)
    }

    pub fn is_same(&self, other: &Shape) -> bool {
        std::ptr::eq(self, other)
    }
}
