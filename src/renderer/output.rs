use super::Canvas;
use crate::math::RGBColor;

use std::fs;
use std::path::Path;

use anyhow::Context;

pub const PPM_MAX_VALUE: u8 = 255;
const PPM_LINE_WIDTH: usize = 70;

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * PPM_MAX_VALUE as f64).round() as u8
}

fn to_bytes(color: RGBColor) -> [u8; 3] {
    [to_byte(color.r), to_byte(color.g), to_byte(color.b)]
}

/// Plain (P3) PPM text. Every pixel row starts a new line and no line is longer than 70
/// characters.
pub fn to_ppm(canvas: &Canvas) -> String {
    let mut out = format!("P3\n{} {}\n{}\n", canvas.width, canvas.height, PPM_MAX_VALUE);
    let mut line = String::with_capacity(PPM_LINE_WIDTH);
    for row in canvas.rows() {
        for value in row.iter().flat_map(|c| to_bytes(*c)) {
            let token = value.to_string();
            if !line.is_empty() && line.len() + 1 + token.len() > PPM_LINE_WIDTH {
                out.push_str(&line);
                out.push('\n');
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&token);
        }
        if !line.is_empty() {
            out.push_str(&line);
            out.push('\n');
            line.clear();
        }
    }
    out
}

pub fn save_ppm(canvas: &Canvas, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    fs::write(path, to_ppm(canvas))
        .with_context(|| format!("failed to write ppm to {}", path.display()))
}

pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut img: image::RgbImage =
        image::ImageBuffer::new(canvas.width as u32, canvas.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(to_bytes(canvas.at(x as usize, y as usize)));
    }
    img.save(path)
        .with_context(|| format!("failed to write png to {}", path.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::renderer::Vec2D;

    #[test]
    fn test_ppm_header() {
        let c = Canvas::blank(5, 3);
        let ppm = to_ppm(&c);
        let header: Vec<&str> = ppm.lines().take(3).collect();
        assert_eq!(header, vec!["P3", "5 3", "255"]);
    }

    #[test]
    fn test_ppm_pixel_data_is_clamped() {
        let mut c = Canvas::blank(5, 3);
        c.write_at(0, 0, RGBColor::new(1.5, 0.0, 0.0));
        c.write_at(2, 1, RGBColor::new(0.0, 0.5, 0.0));
        c.write_at(4, 2, RGBColor::new(-0.5, 0.0, 1.0));
        let ppm = to_ppm(&c);
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
                "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0",
                "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255",
            ]
        );
    }

    #[test]
    fn test_ppm_long_lines_are_split() {
        let c = Vec2D::new(10, 2, RGBColor::new(1.0, 0.8, 0.6));
        let ppm = to_ppm(&c);
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
                "153 255 204 153 255 204 153 255 204 153 255 204 153",
                "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
                "153 255 204 153 255 204 153 255 204 153 255 204 153",
            ]
        );
        assert!(ppm.lines().all(|l| l.len() <= 70));
    }

    #[test]
    fn test_ppm_ends_with_newline() {
        let ppm = to_ppm(&Canvas::blank(5, 3));
        assert!(ppm.ends_with('\n'));
    }
}
