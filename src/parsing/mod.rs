pub mod cameras;
pub mod config;
pub mod material;
pub mod primitives;

use cameras::{parse_camera, CameraData, LightData};
use material::MaterialData;
use primitives::{parse_shape, ShapeData};

use crate::camera::Camera;
use crate::materials::Material;
use crate::world::World;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Either an inline table of materials or the path of a TOML file holding one.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum MaybeMaterialLib {
    Literal(HashMap<String, MaterialData>),
    Path(String),
}

impl MaybeMaterialLib {
    pub fn resolve(self) -> anyhow::Result<HashMap<String, MaterialData>> {
        match self {
            Self::Literal(data) => Ok(data),
            Self::Path(path) => load_arbitrary(PathBuf::from(path)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SceneData {
    pub camera: CameraData,
    pub light: Option<LightData>,
    pub materials: Option<MaybeMaterialLib>,
    #[serde(default)]
    pub shapes: Vec<ShapeData>,
}

pub fn load_arbitrary<T>(filepath: PathBuf) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(&filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", read_count);

    let data: T =
        toml::from_str(&input).with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

fn parse_materials(data: MaybeMaterialLib) -> anyhow::Result<HashMap<String, Material>> {
    let mut materials_map = HashMap::new();
    for (name, data) in data.resolve()? {
        let parsed = data
            .resolve()
            .with_context(|| format!("failed to parse material {}", name))?;
        if materials_map.insert(name.clone(), parsed).is_none() {
            info!("inserted new material {}", &name);
        } else {
            warn!("replaced material {}", &name);
        }
    }
    Ok(materials_map)
}

/// Build the world and camera described by `scene`.
pub fn parse_scene(scene: SceneData) -> anyhow::Result<(World, Camera)> {
    let camera = parse_camera(scene.camera).context("failed to parse camera")?;

    let materials = match scene.materials {
        Some(lib) => parse_materials(lib)?,
        None => {
            info!("no materials found, continuing");
            HashMap::new()
        }
    };

    let mut world = World::new();
    match scene.light {
        Some(light) => world.light = Some(light.into()),
        None => warn!("scene has no light, every surface will render black"),
    }
    for (index, shape) in scene.shapes.into_iter().enumerate() {
        let kind = shape.kind;
        let shape = parse_shape(shape, &materials)
            .with_context(|| format!("failed to parse shape {} ({:?})", index, kind))?;
        world.add_shape(shape);
    }
    info!(
        "parsed {} shapes and {} materials",
        world.shapes.len(),
        materials.len()
    );
    Ok((world, camera))
}

pub fn construct_scene(scene_file: impl AsRef<Path>) -> anyhow::Result<(World, Camera)> {
    let scene_file = scene_file.as_ref();
    let scene: SceneData = load_arbitrary(scene_file.to_path_buf())?;
    parse_scene(scene).with_context(|| format!("invalid scene {}", scene_file.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::*;
    use crate::world::DEFAULT_RECURSION_DEPTH;

    #[test]
    fn test_construct_default_scene() {
        let (world, camera) = construct_scene("data/scenes/default.toml").unwrap();
        assert!(world.light.is_some());
        assert_eq!(world.shapes.len(), 2);
        assert_eq!((camera.hsize, camera.vsize), (11, 11));

        let image = camera.render(&world);
        let pixel = image.at(5, 5);
        assert!((pixel.r - 0.38066).abs() < 1e-4);
        assert!((pixel.g - 0.47583).abs() < 1e-4);
        assert!((pixel.b - 0.2855).abs() < 1e-4);
    }

    #[test]
    fn test_construct_every_checked_in_scene() {
        for scene in [
            "data/scenes/default.toml",
            "data/scenes/reflect_refract.toml",
            "data/scenes/patterns.toml",
        ] {
            let (world, camera) = construct_scene(scene).unwrap();
            assert!(!world.shapes.is_empty(), "{}", scene);
            let ray = camera.ray_for_pixel(camera.hsize / 2, camera.vsize / 2);
            assert!(world.color_at(&ray, DEFAULT_RECURSION_DEPTH).is_finite());
        }
    }

    #[test]
    fn test_material_library_from_path() {
        let (world, _) = construct_scene("data/scenes/patterns.toml").unwrap();
        assert!(world.shapes.iter().any(|s| s.material.pattern.is_some()));
    }

    #[test]
    fn test_missing_scene_is_an_error() {
        assert!(construct_scene("data/scenes/does_not_exist.toml").is_err());
    }

    #[test]
    fn test_unknown_material_is_an_error() {
        let scene: SceneData = toml::from_str(
            r#"
            camera = { hsize = 10, vsize = 10, field_of_view = 60.0, from = [0.0, 0.0, -5.0], to = [0.0, 0.0, 0.0], up = [0.0, 1.0, 0.0] }
            shapes = [{ type = "Sphere", material = "nope" }]
            "#,
        )
        .unwrap();
        assert!(parse_scene(scene).is_err());
    }

    #[test]
    fn test_scene_without_light() {
        let scene: SceneData = toml::from_str(
            r#"
            camera = { hsize = 10, vsize = 10, field_of_view = 60.0, from = [0.0, 0.0, -5.0], to = [0.0, 0.0, 0.0], up = [0.0, 1.0, 0.0] }

            [[shapes]]
            type = "Plane"

            [[shapes]]
            type = "GlassSphere"
            transform = [{ type = "Translate", x = 0.0, y = 1.0, z = 0.0 }]
            "#,
        )
        .unwrap();
        let (world, _) = parse_scene(scene).unwrap();
        assert!(world.light.is_none());
        assert_eq!(world.shapes.len(), 2);
        let ray = Ray::new(Point3::new(0.0, 1.0, -5.0), Vec3::Z);
        assert_eq!(world.color_at(&ray, DEFAULT_RECURSION_DEPTH), RGBColor::BLACK);
    }
}
