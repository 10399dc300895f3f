use crate::math::RGBColor;

/// Row-major 2D buffer. (0, 0) is the top left.
#[derive(Clone, Debug)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

pub type Canvas = Vec2D<RGBColor>;

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    /// Writes outside the buffer are dropped.
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        // chunks panics on a zero chunk size
        self.buffer.chunks(self.width.max(1))
    }
}

impl Canvas {
    pub fn blank(width: usize, height: usize) -> Canvas {
        Vec2D::new(width, height, RGBColor::BLACK)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blank_canvas() {
        let c = Canvas::blank(10, 20);
        assert_eq!(c.width, 10);
        assert_eq!(c.height, 20);
        assert_eq!(c.total_pixels(), 200);
        assert!(c.buffer.iter().all(|p| *p == RGBColor::BLACK));
    }

    #[test]
    fn test_write_and_read() {
        let mut c = Canvas::blank(10, 20);
        let red = RGBColor::new(1.0, 0.0, 0.0);
        c.write_at(2, 3, red);
        assert_eq!(c.at(2, 3), red);
        assert_eq!(c.at(3, 2), RGBColor::BLACK);
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut c = Canvas::blank(4, 3);
        c.write_at(4, 0, RGBColor::WHITE);
        c.write_at(0, 3, RGBColor::WHITE);
        assert!(c.buffer.iter().all(|p| *p == RGBColor::BLACK));
    }

    #[test]
    fn test_rows() {
        let mut c = Vec2D::new(3, 2, 0u8);
        c.write_at(1, 1, 7);
        let rows: Vec<&[u8]> = c.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 0][..], &[0, 7, 0][..]]);
    }
}
