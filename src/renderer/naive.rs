use super::{output_canvas, Canvas, Renderer};

use crate::camera::Camera;
use crate::parsing::config::RenderSettings;
use crate::world::World;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pbr::ProgressBar;
use tracing::{info, warn};

/// Renders every pixel once through the camera's rayon fan out, with a progress bar on the terminal.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// The scene camera, resized when the settings ask for a different resolution.
    pub fn camera_for(camera: &Camera, settings: &RenderSettings) -> Camera {
        match settings.resolution {
            Some(resolution) => Camera::new(resolution.width, resolution.height, camera.field_of_view)
                .with_transform(camera.transform),
            None => *camera,
        }
    }

    pub fn render_canvas(world: &World, camera: &Camera, settings: &RenderSettings) -> Canvas {
        let (width, height) = (camera.hsize, camera.vsize);
        let max_depth = settings.max_depth();
        info!(
            "starting render with canvas resolution {}x{}, recursion depth {}",
            width, height, max_depth
        );
        if world.light.is_none() {
            warn!("the world has no light, every surface will render black");
        }

        let now = Instant::now();
        let total_pixels = width * height;
        let mut pb = ProgressBar::new(total_pixels as u64);

        let pixel_count = Arc::new(AtomicUsize::new(0));
        let clone1 = pixel_count.clone();
        let thread = thread::spawn(move || {
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                pb.add(pixels_to_increment as u64);
                local_index += pixels_to_increment;

                thread::sleep(Duration::from_millis(250));
            }
            pb.finish();
        });

        let clone2 = pixel_count.clone();
        let canvas = camera.render_with_callback(world, max_depth, || {
            clone2.fetch_add(1, Ordering::Relaxed);
        });

        if let Err(panic) = thread.join() {
            warn!("progress bar incrementing thread threw an error {:?}", panic);
        }
        let elapsed = (now.elapsed().as_millis() as f64) / 1000.0;
        info!(
            "took {}s, {:.0} primary rays/s",
            elapsed,
            total_pixels as f64 / elapsed.max(0.001)
        );
        canvas
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        world: &World,
        camera: &Camera,
        render_settings: &[RenderSettings],
    ) -> anyhow::Result<()> {
        for settings in render_settings.iter() {
            let camera = NaiveRenderer::camera_for(camera, settings);
            let canvas = NaiveRenderer::render_canvas(world, &camera, settings);
            output_canvas(settings, &canvas)?;
        }
        Ok(())
    }
}
