use crate::geometry::Shape;
use crate::materials::VACUUM_INDEX;
use crate::math::*;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use std::ops::Index;

/// t values produced by a single shape. Spheres and planes never produce more than two.
pub type Roots = SmallVec<[f64; 2]>;

/// Geometry in its own local space. Shapes move rays and points into local space before calling
/// these and move the normal back out afterwards.
pub trait Hittable {
    fn local_intersect(&self, r: &Ray) -> Roots;
    fn local_normal(&self, local_point: Point3) -> Vec3;
}

#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub shape: &'a Shape,
}

impl<'a> PartialEq for Intersection<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && self.shape.is_same(other.shape)
    }
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, shape: &'a Shape) -> Self {
        Intersection { t, shape }
    }

    /// Shading context for this intersection. `xs` must be the full, sorted list this
    /// intersection was borrowed from: n1 and n2 depend on every surface the ray crossed before it.
    pub fn prepare_computations(&self, ray: &Ray, xs: &Intersections<'a>) -> Computations<'a> {
        let point = ray.position(self.t);
        let eyev = -ray.direction;
        let mut normalv = self.shape.normal_at(point);
        let inside = normalv * eyev < 0.0;
        if inside {
            normalv = -normalv;
        }
        let reflectv = ray.direction.reflect(normalv);
        let (n1, n2) = xs.refractive_indices(self);

        Computations {
            t: self.t,
            shape: self.shape,
            point,
            eyev,
            normalv,
            inside,
            over_point: point + normalv * EPSILON,
            under_point: point - normalv * EPSILON,
            reflectv,
            n1,
            n2,
        }
    }
}

/// Intersections along one ray, kept sorted by t. Ties keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a>(Vec<Intersection<'a>>);

impl<'a> Intersections<'a> {
    pub fn new() -> Self {
        Intersections(Vec::new())
    }

    pub fn push(&mut self, intersection: Intersection<'a>) {
        self.0.push(intersection);
        // stable, so equal t values stay in insertion order
        self.0.sort_by_key(|i| OrderedFloat(i.t));
    }

    /// Intersect `shape` with `ray` and record every root.
    pub fn intersect(&mut self, ray: &Ray, shape: &'a Shape) {
        for t in shape.intersect(ray) {
            self.push(Intersection::new(t, shape));
        }
    }

    /// The nearest intersection at or in front of the ray origin.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.0.iter().find(|i| i.t >= 0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intersection<'a>> {
        self.0.iter()
    }

    /// Refractive indices on the near (n1) and far (n2) side of `target`.
    ///
    /// Walks the sorted list keeping the shapes the ray is currently inside. Meeting a shape that is
    /// already in the list means the ray leaves it; otherwise the ray enters it. `target` is matched
    /// by address, so it must borrow an entry of this list.
    fn refractive_indices(&self, target: &Intersection<'a>) -> (f64, f64) {
        let mut containers: SmallVec<[&Shape; 8]> = SmallVec::new();

        for i in self.0.iter() {
            let is_target = std::ptr::eq(i, target);
            let n1 = innermost_index(&containers);

            match containers.iter().position(|s| s.is_same(i.shape)) {
                Some(position) => {
                    containers.remove(position);
                }
                None => containers.push(i.shape),
            }

            if is_target {
                return (n1, innermost_index(&containers));
            }
        }
        // target isn't part of this list, treat both sides as vacuum
        (VACUUM_INDEX, VACUUM_INDEX)
    }
}

fn innermost_index(containers: &[&Shape]) -> f64 {
    containers
        .last()
        .map_or(VACUUM_INDEX, |shape| shape.material.refractive_index)
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;
    fn index(&self, index: usize) -> &Intersection<'a> {
        &self.0[index]
    }
}

impl<'a> FromIterator<Intersection<'a>> for Intersections<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        let mut xs = Intersections::new();
        for i in iter {
            xs.push(i);
        }
        xs
    }
}

impl<'a> IntoIterator for Intersections<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Everything the shader needs about one hit.
#[derive(Copy, Clone, Debug)]
pub struct Computations<'a> {
    pub t: f64,
    pub shape: &'a Shape,
    pub point: Point3,
    pub eyev: Vec3,
    // always faces the eye, see `inside`
    pub normalv: Vec3,
    pub inside: bool,
    // nudged along +normal, origin for shadow and reflection rays
    pub over_point: Point3,
    // nudged along -normal, origin for refraction rays
    pub under_point: Point3,
    pub reflectv: Vec3,
    pub n1: f64,
    pub n2: f64,
}

impl<'a> Computations<'a> {
    /// Schlick's approximation of the fraction of light reflected at this boundary.
    pub fn schlick(&self) -> f64 {
        let mut cos = self.eyev * self.normalv;
        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                // total internal reflection
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }
        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}
