use crate::geometry::Shape;
use crate::math::*;

pub trait ColorPattern {
    /// Color at a point already in pattern space.
    fn pattern_at(&self, point: Point3) -> RGBColor;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stripe {
    pub a: RGBColor,
    pub b: RGBColor,
}

impl ColorPattern for Stripe {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        if (point.x.floor() as i64).rem_euclid(2) == 0 {
            self.a
        } else {
            self.b
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    pub a: RGBColor,
    pub b: RGBColor,
}

impl ColorPattern for Gradient {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        let fraction = point.x - point.x.floor();
        self.a + (self.b - self.a) * fraction
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ring {
    pub a: RGBColor,
    pub b: RGBColor,
}

impl ColorPattern for Ring {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        let distance = (point.x * point.x + point.z * point.z).sqrt();
        if (distance.floor() as i64).rem_euclid(2) == 0 {
            self.a
        } else {
            self.b
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Checker {
    pub a: RGBColor,
    pub b: RGBColor,
}

impl ColorPattern for Checker {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        let sum = point.x.floor() + point.y.floor() + point.z.floor();
        if (sum as i64).rem_euclid(2) == 0 {
            self.a
        } else {
            self.b
        }
    }
}

/// Echoes the pattern space coordinates back as a color. Only useful for checking transforms.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TestPattern;

impl ColorPattern for TestPattern {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        RGBColor::new(point.x, point.y, point.z)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PatternEnum {
    Stripe(Stripe),
    Gradient(Gradient),
    Ring(Ring),
    Checker(Checker),
    Test(TestPattern),
}

impl From<Stripe> for PatternEnum {
    fn from(value: Stripe) -> Self {
        PatternEnum::Stripe(value)
    }
}

impl From<Gradient> for PatternEnum {
    fn from(value: Gradient) -> Self {
        PatternEnum::Gradient(value)
    }
}

impl From<Ring> for PatternEnum {
    fn from(value: Ring) -> Self {
        PatternEnum::Ring(value)
    }
}

impl From<Checker> for PatternEnum {
    fn from(value: Checker) -> Self {
        PatternEnum::Checker(value)
    }
}

impl From<TestPattern> for PatternEnum {
    fn from(value: TestPattern) -> Self {
        PatternEnum::Test(value)
    }
}

impl ColorPattern for PatternEnum {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        match self {
            PatternEnum::Stripe(inner) => inner.pattern_at(point),
            PatternEnum::Gradient(inner) => inner.pattern_at(point),
            PatternEnum::Ring(inner) => inner.pattern_at(point),
            PatternEnum::Checker(inner) => inner.pattern_at(point),
            PatternEnum::Test(inner) => inner.pattern_at(point),
        }
    }
}

/// A pattern together with its own placement relative to the shape it is painted on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pattern {
    pub kind: PatternEnum,
    pub transform: Transform3,
}

impl Pattern {
    pub fn new(kind: impl Into<PatternEnum>) -> Self {
        Pattern {
            kind: kind.into(),
            transform: Transform3::identity(),
        }
    }

    pub fn stripe(a: RGBColor, b: RGBColor) -> Self {
        Pattern::new(Stripe { a, b })
    }

    pub fn gradient(a: RGBColor, b: RGBColor) -> Self {
        Pattern::new(Gradient { a, b })
    }

    pub fn ring(a: RGBColor, b: RGBColor) -> Self {
        Pattern::new(Ring { a, b })
    }

    pub fn checker(a: RGBColor, b: RGBColor) -> Self {
        Pattern::new(Checker { a, b })
    }

    pub fn test_pattern() -> Self {
        Pattern::new(TestPattern)
    }

    pub fn with_transform(mut self, transform: impl Into<Transform3>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn set_transform(&mut self, transform: impl Into<Transform3>) {
        self.transform = transform.into();
    }

    /// World point -> shape space -> pattern space, so shape and pattern can be placed independently.
    pub fn pattern_at_shape(&self, shape: &Shape, world_point: Point3) -> RGBColor {
        let object_point = shape.transform / world_point;
        let pattern_point = self.transform / object_point;
        self.kind.pattern_at(pattern_point)
    }
}

impl ColorPattern for Pattern {
    fn pattern_at(&self, point: Point3) -> RGBColor {
        self.kind.pattern_at(point)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BLACK: RGBColor = RGBColor::BLACK;
    const WHITE: RGBColor = RGBColor::WHITE;

    fn at(pattern: &Pattern, x: f64, y: f64, z: f64) -> RGBColor {
        pattern.pattern_at(Point3::new(x, y, z))
    }

    #[test]
    fn test_default_transform_is_identity() {
        let mut pattern = Pattern::test_pattern();
        assert_eq!(pattern.transform.forward, Matrix4x4::identity());
        pattern.set_transform(Matrix4x4::translation(1.0, 2.0, 3.0));
        assert_eq!(pattern.transform.forward, Matrix4x4::translation(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_pattern_with_object_transform() {
        let shape = Shape::sphere().with_transform(Matrix4x4::scaling(2.0, 2.0, 2.0));
        let c = Pattern::test_pattern().pattern_at_shape(&shape, Point3::new(2.0, 3.0, 4.0));
        assert!(c.approx_eq(&RGBColor::new(1.0, 1.5, 2.0)));
    }

    #[test]
    fn test_pattern_with_pattern_transform() {
        let shape = Shape::sphere();
        let pattern = Pattern::test_pattern().with_transform(Matrix4x4::scaling(2.0, 2.0, 2.0));
        let c = pattern.pattern_at_shape(&shape, Point3::new(2.0, 3.0, 4.0));
        assert!(c.approx_eq(&RGBColor::new(1.0, 1.5, 2.0)));
    }

    #[test]
    fn test_pattern_with_both_transforms() {
        let shape = Shape::sphere().with_transform(Matrix4x4::scaling(2.0, 2.0, 2.0));
        let pattern =
            Pattern::test_pattern().with_transform(Matrix4x4::translation(0.5, 1.0, 1.5));
        let c = pattern.pattern_at_shape(&shape, Point3::new(2.5, 3.0, 3.5));
        assert!(c.approx_eq(&RGBColor::new(0.75, 0.5, 0.25)));
    }

    #[test]
    fn test_stripe_composes_inverse_transforms() {
        let shape_m = Matrix4x4::rotation_y(0.7) * Matrix4x4::scaling(1.5, 1.0, 0.5);
        let pattern_m = Matrix4x4::translation(0.25, 0.0, 0.0) * Matrix4x4::scaling(0.3, 1.0, 1.0);
        let shape = Shape::sphere().with_transform(shape_m);
        let pattern = Pattern::stripe(WHITE, BLACK).with_transform(pattern_m);
        for i in 0..20 {
            let p = Point3::new(-2.0 + 0.21 * i as f64, 0.3, 0.1 * i as f64);
            let expected = pattern.pattern_at(pattern_m.inverse() * (shape_m.inverse() * p));
            assert_eq!(pattern.pattern_at_shape(&shape, p), expected);
        }
    }

    #[test]
    fn test_stripe() {
        let pattern = Pattern::stripe(WHITE, BLACK);
        // constant in y and z
        assert_eq!(at(&pattern, 0.0, 0.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 0.0, 1.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 0.0, 2.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 0.0, 0.0, 1.0), WHITE);
        assert_eq!(at(&pattern, 0.0, 0.0, 2.0), WHITE);
        // alternates in x
        assert_eq!(at(&pattern, 0.9, 0.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 1.0, 0.0, 0.0), BLACK);
        assert_eq!(at(&pattern, -0.1, 0.0, 0.0), BLACK);
        assert_eq!(at(&pattern, -1.0, 0.0, 0.0), BLACK);
        assert_eq!(at(&pattern, -1.1, 0.0, 0.0), WHITE);
    }

    #[test]
    fn test_gradient() {
        let pattern = Pattern::gradient(WHITE, BLACK);
        assert!(at(&pattern, 0.0, 0.0, 0.0).approx_eq(&WHITE));
        assert!(at(&pattern, 0.25, 0.0, 0.0).approx_eq(&RGBColor::from(0.75)));
        assert!(at(&pattern, 0.5, 0.0, 0.0).approx_eq(&RGBColor::from(0.5)));
        assert!(at(&pattern, 0.75, 0.0, 0.0).approx_eq(&RGBColor::from(0.25)));
    }

    #[test]
    fn test_ring() {
        let pattern = Pattern::ring(WHITE, BLACK);
        assert_eq!(at(&pattern, 0.0, 0.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 1.0, 0.0, 0.0), BLACK);
        assert_eq!(at(&pattern, 0.0, 0.0, 1.0), BLACK);
        assert_eq!(at(&pattern, 0.708, 0.0, 0.708), BLACK);
    }

    #[test]
    fn test_checker() {
        let pattern = Pattern::checker(WHITE, BLACK);
        assert_eq!(at(&pattern, 0.0, 0.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 0.99, 0.0, 0.0), WHITE);
        assert_eq!(at(&pattern, 1.01, 0.0, 0.0), BLACK);
        assert_eq!(at(&pattern, 0.0, 0.99, 0.0), WHITE);
        assert_eq!(at(&pattern, 0.0, 1.01, 0.0), BLACK);
        assert_eq!(at(&pattern, 0.0, 0.0, 0.99), WHITE);
        assert_eq!(at(&pattern, 0.0, 0.0, 1.01), BLACK);
        assert_eq!(at(&pattern, -0.5, 0.0, 0.0), BLACK);
    }
}
