mod naive;
mod output;
mod vec2d;

pub use naive::NaiveRenderer;
pub use output::{save_png, save_ppm, to_ppm, PPM_MAX_VALUE};
pub use vec2d::{Canvas, Vec2D};

use crate::camera::Camera;
use crate::parsing::config::{OutputFormat, RenderSettings};
use crate::world::World;

use std::fs;

use anyhow::Context;
use tracing::info;

/// Write `canvas` in every format `render_settings` asks for, creating the output directory if
/// needed.
pub fn output_canvas(render_settings: &RenderSettings, canvas: &Canvas) -> anyhow::Result<()> {
    let directory = render_settings.output_directory();
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create output directory {}", directory))?;
    for format in render_settings.formats() {
        let path = render_settings.output_path(format);
        info!("saving {}", path.display());
        match format {
            OutputFormat::PPM => save_ppm(canvas, &path)?,
            OutputFormat::PNG => save_png(canvas, &path)?,
        }
    }
    Ok(())
}

pub trait Renderer {
    fn render(
        &self,
        world: &World,
        camera: &Camera,
        render_settings: &[RenderSettings],
    ) -> anyhow::Result<()>;
}
