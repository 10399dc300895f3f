mod light;

pub use light::PointLight;

use crate::geometry::Shape;
use crate::hittable::{Computations, Intersections};
use crate::materials::Material;
use crate::math::*;

/// Recursion budget for reflection and refraction rays when none is given.
pub const DEFAULT_RECURSION_DEPTH: u32 = 4;

/// A light and the shapes it illuminates. Shape order is the tie-break order for intersections at
/// equal t.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub light: Option<PointLight>,
    pub shapes: Vec<Shape>,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }

    /// Two concentric spheres lit from the upper left.
    pub fn default_world() -> Self {
        let outer = Shape::sphere().with_material(Material {
            color: RGBColor::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        });
        let inner = Shape::sphere().with_transform(Matrix4x4::scaling(0.5, 0.5, 0.5));
        World {
            light: Some(PointLight::new(
                Point3::new(-10.0, 10.0, -10.0),
                RGBColor::WHITE,
            )),
            shapes: vec![outer, inner],
        }
    }

    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = Some(light);
        self
    }

    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Every intersection of `ray` with every shape, sorted by t.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs = Intersections::new();
        for shape in self.shapes.iter() {
            xs.intersect(ray, shape);
        }
        xs
    }

    /// Whether something lies between `point` and the light. Without a light everything is dark, so
    /// every point counts as shadowed.
    pub fn is_shadowed(&self, point: Point3) -> bool {
        let light = match &self.light {
            Some(light) => light,
            None => return true,
        };
        let to_light = light.position - point;
        let distance = to_light.norm();
        let ray = Ray::new(point, to_light.normalized());
        match self.intersect(&ray).hit() {
            Some(hit) => hit.t < distance,
            None => false,
        }
    }

    pub fn shade_hit(&self, comps: &Computations<'_>, remaining: u32) -> RGBColor {
        let material = &comps.shape.material;
        let surface = match &self.light {
            Some(light) => light.lighting(
                material,
                comps.shape,
                comps.over_point,
                comps.eyev,
                comps.normalv,
                self.is_shadowed(comps.over_point),
            ),
            None => RGBColor::BLACK,
        };
        let reflected = self.reflected_color(comps, remaining);
        let refracted = self.refracted_color(comps, remaining);

        // only surfaces that both mirror and transmit get the fresnel weighting
        if material.is_reflective() && material.is_transparent() {
            let reflectance = comps.schlick();
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    pub fn reflected_color(&self, comps: &Computations<'_>, remaining: u32) -> RGBColor {
        let material = &comps.shape.material;
        if remaining == 0 || !material.is_reflective() {
            return RGBColor::BLACK;
        }
        let reflect_ray = Ray::new(comps.over_point, comps.reflectv);
        self.color_at(&reflect_ray, remaining - 1) * material.reflective
    }

    pub fn refracted_color(&self, comps: &Computations<'_>, remaining: u32) -> RGBColor {
        let material = &comps.shape.material;
        if remaining == 0 || !material.is_transparent() {
            return RGBColor::BLACK;
        }

        // snell's law
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev * comps.normalv;
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            // total internal reflection
            return RGBColor::BLACK;
        }
        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);
        self.color_at(&refract_ray, remaining - 1) * material.transparency
    }

    /// Color seen along `ray`, black when nothing is hit. `remaining` bounds how many more
    /// reflection or refraction bounces may follow.
    pub fn color_at(&self, ray: &Ray, remaining: u32) -> RGBColor {
        let xs = self.intersect(ray);
        match xs.hit() {
            Some(hit) => {
                let comps = hit.prepare_computations(ray, &xs);
                self.shade_hit(&comps, remaining)
            }
            None => RGBColor::BLACK,
        }
    }
}
