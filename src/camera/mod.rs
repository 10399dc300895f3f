use crate::math::*;
use crate::renderer::Canvas;
use crate::world::{World, DEFAULT_RECURSION_DEPTH};

use rayon::prelude::*;

/// Pinhole camera looking down -z of its own space, with the image plane one unit in front of it.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub hsize: usize,
    pub vsize: usize,
    // radians
    pub field_of_view: f64,
    // view transform, world -> camera
    pub transform: Transform3,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        Camera {
            hsize,
            vsize,
            field_of_view,
            transform: Transform3::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        }
    }

    pub fn with_transform(mut self, transform: impl Into<Transform3>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// World units covered by one pixel on the image plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray from the camera through the center of pixel (px, py). Pixel (0, 0) is the top left.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;
        // camera looks toward -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self.transform / Point3::new(world_x, world_y, -1.0);
        let origin = self.transform / Point3::ORIGIN;
        Ray::new(origin, (pixel - origin).normalized())
    }

    pub fn render(&self, world: &World) -> Canvas {
        self.render_with_depth(world, DEFAULT_RECURSION_DEPTH)
    }

    pub fn render_with_depth(&self, world: &World, remaining: u32) -> Canvas {
        self.render_with_callback(world, remaining, || {})
    }

    /// Render every pixel in parallel, calling `on_pixel` once each pixel is written.
    pub fn render_with_callback<F>(&self, world: &World, remaining: u32, on_pixel: F) -> Canvas
    where
        F: Fn() + Sync,
    {
        let mut canvas = Canvas::new(self.hsize, self.vsize, RGBColor::BLACK);
        let width = self.hsize;
        canvas
            .buffer
            .par_iter_mut()
            .enumerate()
            .for_each(|(pixel_index, pixel_ref)| {
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;
                let ray = self.ray_for_pixel(x, y);
                *pixel_ref = world.color_at(&ray, remaining);
                on_pixel();
            });
        canvas
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_construct_camera() {
        let c = Camera::new(160, 120, PI / 2.0);
        assert_eq!(c.hsize, 160);
        assert_eq!(c.vsize, 120);
        assert_eq!(c.field_of_view, PI / 2.0);
        assert_eq!(c.transform.forward, Matrix4x4::identity());
    }

    #[test]
    fn test_pixel_size() {
        let horizontal = Camera::new(200, 125, PI / 2.0);
        assert!(approx_eq(horizontal.pixel_size(), 0.01));
        assert!(approx_eq(horizontal.half_width(), 1.0));
        assert!(approx_eq(horizontal.half_height(), 0.625));
        let vertical = Camera::new(125, 200, PI / 2.0);
        assert!(approx_eq(vertical.pixel_size(), 0.01));
        assert!(approx_eq(vertical.half_width(), 0.625));
        assert!(approx_eq(vertical.half_height(), 1.0));
    }

    #[test]
    fn test_ray_through_center() {
        let c = Camera::new(201, 101, PI / 2.0);
        let r = c.ray_for_pixel(100, 50);
        assert!(r.origin.approx_eq(&Point3::ORIGIN));
        assert!(r.direction.approx_eq(&Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_ray_through_corner() {
        let c = Camera::new(201, 101, PI / 2.0);
        let r = c.ray_for_pixel(0, 0);
        assert!(r.origin.approx_eq(&Point3::ORIGIN));
        assert!(r
            .direction
            .approx_eq(&Vec3::new(0.66519, 0.33259, -0.66851)));
    }

    #[test]
    fn test_ray_with_transformed_camera() {
        let c = Camera::new(201, 101, PI / 2.0).with_transform(
            Matrix4x4::rotation_y(PI / 4.0) * Matrix4x4::translation(0.0, -2.0, 5.0),
        );
        let r = c.ray_for_pixel(100, 50);
        let k = 2f64.sqrt() / 2.0;
        assert!(r.origin.approx_eq(&Point3::new(0.0, 2.0, -5.0)));
        assert!(r.direction.approx_eq(&Vec3::new(k, 0.0, -k)));
    }

    #[test]
    fn test_render_default_world() {
        let w = World::default_world();
        let from = Point3::new(0.0, 0.0, -5.0);
        let to = Point3::ORIGIN;
        let up = Vec3::Y;
        let c = Camera::new(11, 11, PI / 2.0).with_transform(Matrix4x4::view_transform(from, to, up));
        let image = c.render(&w);
        let pixel = image.at(5, 5);
        assert!((pixel.r - 0.38066).abs() < 1e-4);
        assert!((pixel.g - 0.47583).abs() < 1e-4);
        assert!((pixel.b - 0.2855).abs() < 1e-4);
    }

    #[test]
    fn test_render_calls_back_once_per_pixel() {
        let w = World::default_world();
        let c = Camera::new(7, 5, PI / 3.0)
            .with_transform(Matrix4x4::view_transform(
                Point3::new(0.0, 0.0, -5.0),
                Point3::ORIGIN,
                Vec3::Y,
            ));
        let count = AtomicUsize::new(0);
        let image = c.render_with_callback(&w, 2, || {
            count.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(count.load(Ordering::Relaxed), 35);
        assert_eq!(image.total_pixels(), 35);
    }
}
