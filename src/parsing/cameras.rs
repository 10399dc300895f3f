use super::material::ColorData;
use crate::camera::Camera;
use crate::math::*;
use crate::world::PointLight;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

pub type Point3Data = [f64; 3];
pub type Vec3Data = [f64; 3];

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CameraData {
    pub hsize: usize,
    pub vsize: usize,
    // degrees
    pub field_of_view: f64,
    pub from: Point3Data,
    pub to: Point3Data,
    pub up: Vec3Data,
}

pub fn parse_camera(data: CameraData) -> anyhow::Result<Camera> {
    if data.hsize == 0 || data.vsize == 0 {
        bail!("camera has a zero sized image {}x{}", data.hsize, data.vsize);
    }
    if !(data.field_of_view > 0.0 && data.field_of_view < 180.0) {
        bail!(
            "camera field of view must be between 0 and 180 degrees, got {}",
            data.field_of_view
        );
    }
    let from = Point3::from(data.from);
    let to = Point3::from(data.to);
    let up = Vec3::from(data.up);
    let forward = (to - from)
        .try_normalized()
        .context("camera `from` and `to` are the same point")?;
    let up = up.try_normalized().context("camera `up` is a zero vector")?;
    if forward.cross(up).norm() < EPSILON {
        bail!("camera `up` is parallel to the viewing direction");
    }
    let view = Transform3::try_new(Matrix4x4::view_transform(from, to, up))
        .context("camera view transform is singular")?;
    Ok(Camera::new(data.hsize, data.vsize, data.field_of_view.to_radians()).with_transform(view))
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct LightData {
    pub position: Point3Data,
    pub intensity: ColorData,
}

impl From<LightData> for PointLight {
    fn from(data: LightData) -> Self {
        PointLight::new(Point3::from(data.position), RGBColor::from(data.intensity))
    }
}
