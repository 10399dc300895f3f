pub use crate::camera::Camera;
pub use crate::geometry::{Plane, Primitive, Shape, Sphere};
pub use crate::hittable::{Computations, Hittable, Intersection, Intersections};
pub use crate::materials::{ColorPattern, Material, Pattern};
pub use crate::math::*;
pub use crate::renderer::{Canvas, Vec2D};
pub use crate::world::{PointLight, World, DEFAULT_RECURSION_DEPTH};
