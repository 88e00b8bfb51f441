use egui::Color32;
use std::sync::Arc;

/// A full copy of the raster, shared cheaply between the canvas and the
/// undo history.
pub type Snapshot = Arc<[Color32]>;

/// The fixed-size pixel surface. Only stroke drawing and `fill` mutate it;
/// everything else reads.
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color32,
    pixels: Vec<Color32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// The pixel at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Stamps a filled disc centered at (cx, cy), clipped to the surface.
    pub fn stamp_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Color32) {
        let (w, h) = (self.width as i32, self.height as i32);
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let (nx, ny) = (cx + dx, cy + dy);
                if nx >= 0 && nx < w && ny >= 0 && ny < h {
                    self.pixels[ny as usize * self.width + nx as usize] = color;
                }
            }
        }
    }

    /// Draws one segment of a stroke by walking the line with Bresenham and
    /// stamping a disc of radius `size / 2` at every step. Stamping the
    /// endpoints keeps caps and joins round, so fast pointer movement leaves
    /// no gaps between segments.
    pub fn stroke_segment(&mut self, from: (i32, i32), to: (i32, i32), size: i32, color: Color32) {
        let radius = (size / 2).max(1);
        let (x0, y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;
        loop {
            self.stamp_disc(x, y, radius, color);
            if x == x1 && y == y1 {
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

    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.pixels.as_slice())
    }

    /// Repaints the whole surface from a snapshot taken earlier from this
    /// same canvas.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(snapshot.len(), self.pixels.len());
        self.pixels.copy_from_slice(snapshot);
    }

    /// Unmultiplied RGBA bytes in row-major order, for texture upload and
    /// image encoding.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b(), pixel.a()]);
        }
        bytes
    }
}
