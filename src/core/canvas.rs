use super::color::Color;
use super::rect::Rect;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Color),

    /// Single pixel at (x, y)
    Point { x: i32, y: i32, color: Color },

    /// Line from (x1, y1) to (x2, y2), both endpoints included
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Color },

    /// Filled rectangle
    FillRect { rect: Rect, color: Color },

    /// One pixel wide rectangle outline
    OutlineRect { rect: Rect, color: Color },
}

/// RGBA frame buffer with clipped drawing primitives
#[derive(Clone)]
pub struct Canvas {
    texels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, fully transparent
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            texels: vec![Color::TRANSPARENT; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Apply operation and return canvas - builder style
    pub fn with(mut self, op: DrawOp) -> Self {
        self.apply(&op);
        self
    }

    /// Execute single draw operation
    pub fn apply(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.texels.fill(color),
            DrawOp::Point { x, y, color } => self.set_pixel(x as i64, y as i64, color),
            DrawOp::Line { x1, y1, x2, y2, color } => {
                self.draw_line(x1 as i64, y1 as i64, x2 as i64, y2 as i64, color)
            }
            DrawOp::FillRect { rect, color } => self.fill_rect(rect, color),
            DrawOp::OutlineRect { rect, color } => self.outline_rect(rect, color),
        }
    }

    /// Set single pixel, ignoring coordinates outside the canvas
    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let idx = y as usize * self.width as usize + x as usize;
        self.texels[idx] = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(visible) = rect.intersect(&self.bounds()) else {
            return;
        };

        let stride = self.width as usize;
        for y in visible.y as usize..visible.bottom() as usize {
            let row = y * stride;
            self.texels[row + visible.x as usize..row + visible.right() as usize].fill(color);
        }
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }

        let (left, top) = (rect.x as i64, rect.y as i64);
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.draw_line(left, top, right, top, color);
        self.draw_line(left, bottom, right, bottom, color);
        self.draw_line(left, top, left, bottom, color);
        self.draw_line(right, top, right, bottom, color);
    }

    /// Draw line using Bresenham's algorithm, both endpoints inclusive
    ///
    /// The segment is clipped to the canvas first, so only visible pixels
    /// are stepped through.
    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
        let Some((x1, y1, x2, y2)) = self.clip_line(x1, y1, x2, y2) else {
            return;
        };
        let (mut x, mut y) = (x1, y1);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment against the canvas, `None` when no
    /// part of it is visible. Endpoints already inside come back unchanged.
    fn clip_line(&self, x1: i64, y1: i64, x2: i64, y2: i64) -> Option<(i64, i64, i64, i64)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let (ox, oy) = (x1 as f64, y1 as f64);
        let (dx, dy) = ((x2 - x1) as f64, (y2 - y1) as f64);

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-dx, ox), (dx, max_x - ox), (-dy, oy), (dy, max_y - oy)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| {
            (
                (ox + t * dx).round().clamp(0.0, max_x) as i64,
                (oy + t * dy).round().clamp(0.0, max_y) as i64,
            )
        };
        let (ax, ay) = at(t0);
        let (bx, by) = at(t1);
        Some((ax, ay, bx, by))
    }

    /// Copy `src` out of a `source_width` wide texel slice into `dst`,
    /// scaling with nearest-neighbour sampling and blending source-over.
    ///
    /// `src` must lie inside the source image. Destination pixels outside
    /// the canvas are discarded.
    pub fn blit(&mut self, source: &[Color], source_width: u32, src: Rect, dst: Rect) {
        if src.is_empty() || dst.is_empty() {
            return;
        }

        let Some(visible) = dst.intersect(&self.bounds()) else {
            return;
        };

        let stride = self.width as usize;
        for y in visible.y as i64..visible.bottom() {
            let v = (y - dst.y as i64) as u64 * src.height as u64 / dst.height as u64;
            let source_row = (src.y as u64 + v) as usize * source_width as usize;
            let row = y as usize * stride;

            for x in visible.x as i64..visible.right() {
                let u = (x - dst.x as i64) as u64 * src.width as u64 / dst.width as u64;
                let texel = source[source_row + (src.x as u64 + u) as usize];
                let idx = row + x as usize;
                self.texels[idx] = texel.over(self.texels[idx]);
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Color at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.texels[y as usize * self.width as usize + x as usize])
    }

    pub fn texels(&self) -> &[Color] {
        &self.texels
    }

    /// Get pixel buffer as tightly packed RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_creation() {
        let canvas = Canvas::new(100, 50);
        assert_eq!(canvas.dimensions(), (100, 50));
        assert_eq!(canvas.pixels().len(), 100 * 50 * 4);
        assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn canvas_clear() {
        let canvas = Canvas::new(10, 10).with(DrawOp::Clear(Color::rgb(0, 0, 30)));

        assert_eq!(&canvas.pixels()[0..4], &[0, 0, 30, 255]);
        assert_eq!(canvas.pixel(9, 9), Some(Color::rgb(0, 0, 30)));
    }

    #[test]
    fn canvas_point_out_of_bounds() {
        let canvas = Canvas::new(10, 10)
            .with(DrawOp::Point { x: -1, y: 3, color: Color::RED })
            .with(DrawOp::Point { x: 100, y: 100, color: Color::RED });

        assert!(canvas.texels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn canvas_fill_rect_clipped() {
        let canvas = Canvas::new(10, 10).with(DrawOp::FillRect {
            rect: Rect::new(-2, 8, 5, 5),
            color: Color::GREEN,
        });

        assert_eq!(canvas.pixel(0, 8), Some(Color::GREEN));
        assert_eq!(canvas.pixel(2, 9), Some(Color::GREEN));
        assert_eq!(canvas.pixel(3, 9), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(0, 7), Some(Color::TRANSPARENT));
    }

    #[test]
    fn canvas_outline_rect() {
        let canvas = Canvas::new(10, 10).with(DrawOp::OutlineRect {
            rect: Rect::new(2, 2, 4, 3),
            color: Color::BLUE,
        });

        assert_eq!(canvas.pixel(2, 2), Some(Color::BLUE));
        assert_eq!(canvas.pixel(5, 2), Some(Color::BLUE));
        assert_eq!(canvas.pixel(2, 4), Some(Color::BLUE));
        assert_eq!(canvas.pixel(5, 4), Some(Color::BLUE));
        // interior untouched
        assert_eq!(canvas.pixel(3, 3), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(6, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn canvas_line_endpoints() {
        let canvas = Canvas::new(50, 50).with(DrawOp::Line {
            x1: 10,
            y1: 10,
            x2: 20,
            y2: 20,
            color: Color::WHITE,
        });

        assert_eq!(canvas.pixel(10, 10), Some(Color::WHITE));
        assert_eq!(canvas.pixel(15, 15), Some(Color::WHITE));
        assert_eq!(canvas.pixel(20, 20), Some(Color::WHITE));
        assert_eq!(canvas.pixel(21, 21), Some(Color::TRANSPARENT));
    }

    #[test]
    fn canvas_line_past_edge() {
        let canvas = Canvas::new(8, 8).with(DrawOp::Line {
            x1: 0,
            y1: 4,
            x2: 8,
            y2: 4,
            color: Color::BLUE,
        });

        for x in 0..8 {
            assert_eq!(canvas.pixel(x, 4), Some(Color::BLUE));
        }
    }

    #[test]
    fn blit_unscaled_copies_region() {
        let source: Vec<Color> = (0..16).map(|i| Color::rgb(i as u8, 0, 0)).collect();
        let mut canvas = Canvas::new(4, 4);

        canvas.blit(&source, 4, Rect::new(2, 2, 2, 2), Rect::new(0, 0, 2, 2));

        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(10, 0, 0)));
        assert_eq!(canvas.pixel(1, 0), Some(Color::rgb(11, 0, 0)));
        assert_eq!(canvas.pixel(0, 1), Some(Color::rgb(14, 0, 0)));
        assert_eq!(canvas.pixel(1, 1), Some(Color::rgb(15, 0, 0)));
        assert_eq!(canvas.pixel(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn blit_scaled_nearest() {
        let source = vec![Color::RED, Color::BLUE];
        let mut canvas = Canvas::new(4, 2);

        canvas.blit(&source, 2, Rect::new(0, 0, 2, 1), canvas.bounds());

        assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 0), Some(Color::BLUE));
        assert_eq!(canvas.pixel(3, 1), Some(Color::BLUE));
    }

    #[test]
    fn blit_skips_transparent_texels() {
        let source = vec![Color::TRANSPARENT, Color::GREEN];
        let mut canvas = Canvas::new(2, 1).with(DrawOp::Clear(Color::WHITE));

        canvas.blit(&source, 2, Rect::new(0, 0, 2, 1), Rect::new(0, 0, 2, 1));

        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(1, 0), Some(Color::GREEN));
    }

    #[test]
    fn blit_partially_offscreen() {
        let source = vec![Color::RED; 9];
        let mut canvas = Canvas::new(4, 4);

        canvas.blit(&source, 3, Rect::new(0, 0, 3, 3), Rect::new(-1, 2, 3, 3));

        assert_eq!(canvas.pixel(0, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 3), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(0, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn line_with_extreme_endpoints_is_clipped() {
        let canvas = Canvas::new(8, 8).with(DrawOp::Line {
            x1: i32::MIN,
            y1: 3,
            x2: i32::MAX,
            y2: 3,
            color: Color::RED,
        });

        for x in 0..8 {
            assert_eq!(canvas.pixel(x, 3), Some(Color::RED));
        }
        assert_eq!(canvas.pixel(0, 2), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(0, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn diagonal_line_crossing_canvas() {
        let canvas = Canvas::new(10, 10).with(DrawOp::Line {
            x1: -1_000_000_000,
            y1: -1_000_000_000,
            x2: 1_000_000_000,
            y2: 1_000_000_000,
            color: Color::GREEN,
        });

        for i in 0..10 {
            assert_eq!(canvas.pixel(i, i), Some(Color::GREEN));
        }
        assert_eq!(canvas.pixel(1, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn line_missing_canvas_draws_nothing() {
        let canvas = Canvas::new(8, 8).with(DrawOp::Line {
            x1: i32::MIN,
            y1: -5,
            x2: i32::MAX,
            y2: -5,
            color: Color::RED,
        });

        assert!(canvas.texels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn outline_rect_near_i32_max() {
        let canvas = Canvas::new(10, 10).with(DrawOp::OutlineRect {
            rect: Rect::new(i32::MAX - 2, 0, 10, 10),
            color: Color::BLUE,
        });

        assert!(canvas.texels().iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn outline_rect_spanning_i32_range() {
        let canvas = Canvas::new(10, 10).with(DrawOp::OutlineRect {
            rect: Rect::new(i32::MIN, 2, u32::MAX, 4),
            color: Color::BLUE,
        });

        for x in 0..10 {
            assert_eq!(canvas.pixel(x, 2), Some(Color::BLUE));
            assert_eq!(canvas.pixel(x, 5), Some(Color::BLUE));
            assert_eq!(canvas.pixel(x, 3), Some(Color::TRANSPARENT));
        }
    }
}
