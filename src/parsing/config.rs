use crate::world::DEFAULT_RECURSION_DEPTH;

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    PPM,
    PNG,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PPM => "ppm",
            OutputFormat::PNG => "png",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub output_directory: Option<String>,
    // overrides the camera's own size when set
    pub resolution: Option<Resolution>,
    pub threads: Option<u16>,
    pub max_depth: Option<u32>,
    pub formats: Option<Vec<OutputFormat>>,
}

impl RenderSettings {
    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("render")
    }

    pub fn output_directory(&self) -> &str {
        self.output_directory.as_deref().unwrap_or("output")
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(DEFAULT_RECURSION_DEPTH)
    }

    pub fn formats(&self) -> Vec<OutputFormat> {
        self.formats
            .clone()
            .unwrap_or_else(|| vec![OutputFormat::PPM, OutputFormat::PNG])
    }

    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        PathBuf::from(self.output_directory())
            .join(format!("{}.{}", self.filename(), format.extension()))
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub render_settings: Vec<RenderSettings>,
}

impl TOMLConfig {
    pub fn max_threads(&self) -> Option<u16> {
        self.render_settings.iter().filter_map(|s| s.threads).max()
    }
}

pub fn get_settings(filepath: &str) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read config file {}", filepath))?;
    let num_cpus = num_cpus::get();
    let mut settings: TOMLConfig = toml::from_str(&input)
        .with_context(|| format!("failed to parse config file {}", filepath))?;
    for (index, render_settings) in settings.render_settings.iter_mut().enumerate() {
        if render_settings.threads.is_none() {
            render_settings.threads = Some(num_cpus as u16);
        }
        if let Some(Resolution { width, height }) = render_settings.resolution {
            if width == 0 || height == 0 {
                bail!(
                    "render_settings[{}] in {} has a zero sized resolution {}x{}",
                    index,
                    filepath,
                    width,
                    height
                );
            }
        }
    }
    Ok(settings)
}
