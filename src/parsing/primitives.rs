use crate::geometry::Shape;
use crate::materials::Material;
use crate::math::*;

use std::collections::HashMap;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

/// One step of a transform list. Rotations are in degrees.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TransformData {
    Translate {
        x: f64,
        y: f64,
        z: f64,
    },
    Scale {
        x: f64,
        y: f64,
        z: f64,
    },
    RotateX {
        degrees: f64,
    },
    RotateY {
        degrees: f64,
    },
    RotateZ {
        degrees: f64,
    },
    Shear {
        xy: f64,
        xz: f64,
        yx: f64,
        yz: f64,
        zx: f64,
        zy: f64,
    },
}

impl From<TransformData> for Matrix4x4 {
    fn from(data: TransformData) -> Self {
        match data {
            TransformData::Translate { x, y, z } => Matrix4x4::translation(x, y, z),
            TransformData::Scale { x, y, z } => Matrix4x4::scaling(x, y, z),
            TransformData::RotateX { degrees } => Matrix4x4::rotation_x(degrees.to_radians()),
            TransformData::RotateY { degrees } => Matrix4x4::rotation_y(degrees.to_radians()),
            TransformData::RotateZ { degrees } => Matrix4x4::rotation_z(degrees.to_radians()),
            TransformData::Shear {
                xy,
                xz,
                yx,
                yz,
                zx,
                zy,
            } => Matrix4x4::shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Compose a transform list. The first entry is applied to the object first.
pub fn parse_transform(data: &[TransformData]) -> anyhow::Result<Transform3> {
    let matrix = data
        .iter()
        .fold(Matrix4x4::identity(), |acc, step| Matrix4x4::from(*step) * acc);
    Ok(Transform3::try_new(matrix)?)
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveData {
    Sphere,
    Plane,
    GlassSphere,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShapeData {
    #[serde(rename = "type")]
    pub kind: PrimitiveData,
    pub material: Option<String>,
    pub transform: Option<Vec<TransformData>>,
}

pub fn parse_shape(data: ShapeData, materials: &HashMap<String, Material>) -> anyhow::Result<Shape> {
    let mut shape = match data.kind {
        PrimitiveData::Sphere => Shape::sphere(),
        PrimitiveData::Plane => Shape::plane(),
        PrimitiveData::GlassSphere => Shape::glass_sphere(),
    };
    if let Some(name) = &data.material {
        let material = materials
            .get(name)
            .ok_or_else(|| anyhow!("unknown material {}", name))?;
        shape.material = *material;
    }
    if let Some(transform) = &data.transform {
        shape.transform = parse_transform(transform).context("singular shape transform")?;
    }
    Ok(shape)
}
