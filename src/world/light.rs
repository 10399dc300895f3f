use crate::geometry::Shape;
use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub intensity: RGBColor,
}

impl PointLight {
    pub const fn new(position: Point3, intensity: RGBColor) -> Self {
        PointLight {
            position,
            intensity,
        }
    }

    /// Phong shading of `point` on `shape`. The result is not clamped.
    pub fn lighting(
        &self,
        material: &Material,
        shape: &Shape,
        point: Point3,
        eyev: Vec3,
        normalv: Vec3,
        in_shadow: bool,
    ) -> RGBColor {
        let effective_color = material.color_at(shape, point) * self.intensity;
        let ambient = effective_color * material.ambient;
        if in_shadow {
            return ambient;
        }

        let lightv = (self.position - point).normalized();
        let light_dot_normal = lightv * normalv;
        if light_dot_normal < 0.0 {
            // light is on the other side of the surface
            return ambient;
        }

        let diffuse = effective_color * (material.diffuse * light_dot_normal);
        let reflect_dot_eye = (-lightv).reflect(normalv) * eyev;
        let specular = if reflect_dot_eye < 0.0 {
            RGBColor::BLACK
        } else {
            self.intensity * (material.specular * reflect_dot_eye.powf(material.shininess))
        };
        ambient + diffuse + specular
    }
}
