mod color;
mod matrix;
mod misc;
mod point;
mod ray;
mod transform;
mod vec;

pub use color::RGBColor;
pub use matrix::Matrix4x4;
pub use misc::*;
pub use point::Point3;
pub use ray::Ray;
pub use transform::Transform3;
pub use vec::Vec3;

pub use std::f64::consts::PI;
pub use std::f64::INFINITY;
