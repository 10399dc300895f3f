use super::primitives::{parse_transform, TransformData};
use crate::materials::{Material, Pattern};
use crate::math::*;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub type ColorData = [f64; 3];

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TwoColorPatternData {
    pub a: ColorData,
    pub b: ColorData,
    pub transform: Option<Vec<TransformData>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TestPatternData {
    pub transform: Option<Vec<TransformData>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum PatternData {
    Stripe(TwoColorPatternData),
    Gradient(TwoColorPatternData),
    Ring(TwoColorPatternData),
    Checker(TwoColorPatternData),
    Test(TestPatternData),
}

pub fn parse_pattern(data: PatternData) -> anyhow::Result<Pattern> {
    let (pattern, transform) = match data {
        PatternData::Stripe(d) => (Pattern::stripe(d.a.into(), d.b.into()), d.transform),
        PatternData::Gradient(d) => (Pattern::gradient(d.a.into(), d.b.into()), d.transform),
        PatternData::Ring(d) => (Pattern::ring(d.a.into(), d.b.into()), d.transform),
        PatternData::Checker(d) => (Pattern::checker(d.a.into(), d.b.into()), d.transform),
        PatternData::Test(d) => (Pattern::test_pattern(), d.transform),
    };
    match transform {
        Some(transform) => Ok(pattern
            .with_transform(parse_transform(&transform).context("singular pattern transform")?)),
        None => Ok(pattern),
    }
}

/// Every field is optional and falls back to `Material::default()`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MaterialData {
    pub color: Option<ColorData>,
    pub pattern: Option<PatternData>,
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub specular: Option<f64>,
    pub shininess: Option<f64>,
    pub reflective: Option<f64>,
    pub transparency: Option<f64>,
    pub refractive_index: Option<f64>,
}

impl MaterialData {
    pub fn resolve(self) -> anyhow::Result<Material> {
        let default = Material::default();
        let pattern = self.pattern.map(parse_pattern).transpose()?;
        Ok(Material {
            color: self.color.map(RGBColor::from).unwrap_or(default.color),
            pattern,
            ambient: self.ambient.unwrap_or(default.ambient),
            diffuse: self.diffuse.unwrap_or(default.diffuse),
            specular: self.specular.unwrap_or(default.specular),
            shininess: self.shininess.unwrap_or(default.shininess),
            reflective: self.reflective.unwrap_or(default.reflective),
            transparency: self.transparency.unwrap_or(default.transparency),
            refractive_index: self.refractive_index.unwrap_or(default.refractive_index),
        })
    }
}
