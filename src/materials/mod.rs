use crate::geometry::Shape;
use crate::math::*;

mod pattern;

pub use pattern::{
    Checker, ColorPattern, Gradient, Pattern, PatternEnum, Ring, Stripe, TestPattern,
};

pub const VACUUM_INDEX: f64 = 1.0;
pub const GLASS_INDEX: f64 = 1.5;

/// Phong shading coefficients plus the mirror and glass terms used by the recursive shader.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: RGBColor,
    // overrides color when set
    pub pattern: Option<Pattern>,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: RGBColor::WHITE,
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: VACUUM_INDEX,
        }
    }
}

impl Material {
    pub fn glass() -> Self {
        Material {
            transparency: 1.0,
            refractive_index: GLASS_INDEX,
            ..Default::default()
        }
    }

    /// Surface color before lighting, resolved through the pattern if there is one.
    pub fn color_at(&self, shape: &Shape, world_point: Point3) -> RGBColor {
        match &self.pattern {
            Some(pattern) => pattern.pattern_at_shape(shape, world_point),
            None => self.color,
        }
    }

    pub fn is_reflective(&self) -> bool {
        !approx_eq(self.reflective, 0.0)
    }

    pub fn is_transparent(&self) -> bool {
        !approx_eq(self.transparency, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.color, RGBColor::WHITE);
        assert!(m.pattern.is_none());
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.0);
        assert_eq!(m.reflective, 0.0);
        assert_eq!(m.transparency, 0.0);
        assert_eq!(m.refractive_index, 1.0);
        assert!(!m.is_reflective());
        assert!(!m.is_transparent());
    }

    #[test]
    fn test_glass() {
        let m = Material::glass();
        assert_eq!(m.transparency, 1.0);
        assert_eq!(m.refractive_index, 1.5);
        assert!(m.is_transparent());
    }

    #[test]
    fn test_color_at_prefers_pattern() {
        let shape = Shape::sphere();
        let mut m = Material::default();
        m.color = RGBColor::new(0.2, 0.3, 0.4);
        assert_eq!(m.color_at(&shape, Point3::new(0.5, 0.0, 0.0)), m.color);

        m.pattern = Some(Pattern::stripe(RGBColor::WHITE, RGBColor::BLACK));
        assert_eq!(m.color_at(&shape, Point3::new(0.9, 0.0, 0.0)), RGBColor::WHITE);
        assert_eq!(m.color_at(&shape, Point3::new(1.1, 0.0, 0.0)), RGBColor::BLACK);
    }
}
