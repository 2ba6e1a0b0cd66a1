use super::renderer::Rgb;

/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution.
/// Color is tracked per cell: the last shape drawn into a cell sets it.
pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
    colors: Vec<Vec<Option<Rgb>>>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            colors: vec![vec![None; width]; height],
        }
    }

    /// Clear all dots, resizing first if the terminal changed size
    pub fn reset(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
            return;
        }
        for row in &mut self.dots {
            row.fill(0);
        }
        for row in &mut self.colors {
            row.fill(None);
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize, color: Rgb) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.colors[cell_y][cell_x] = Some(color);
    }

    /// Signed variant for shapes that hang off the canvas
    fn plot(&mut self, pixel_x: i64, pixel_y: i64, color: Rgb) {
        if pixel_x >= 0 && pixel_y >= 0 {
            self.set_pixel(pixel_x as usize, pixel_y as usize, color);
        }
    }

    /// Fill pixels in [x0, x1) × [y0, y1)
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Rgb) {
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Fill the ellipse inscribed in [x0, x1) × [y0, y1), testing pixel centers
    pub fn fill_ellipse(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Rgb) {
        let rx = (x1 - x0) as f32 / 2.0;
        let ry = (y1 - y0) as f32 / 2.0;
        let cx = x0 as f32 + rx;
        let cy = y0 as f32 + ry;

        for py in y0..y1 {
            for px in x0..x1 {
                let nx = (px as f32 + 0.5 - cx) / rx;
                let ny = (py as f32 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    /// Bresenham line. Stippled lines leave every other pair of dots empty.
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgb, stippled: bool) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut step = 0u64;

        loop {
            if !stippled || step % 4 < 2 {
                self.plot(x, y, color);
            }
            if x == to.0 && y == to.1 {
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
            step += 1;
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn cell_color(&self, cell_x: usize, cell_y: usize) -> Option<Rgb> {
        self.colors
            .get(cell_y)
            .and_then(|row| row.get(cell_x))
            .copied()
            .flatten()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb(255, 255, 255);

    #[test]
    fn test_braille_canvas() {
        let mut canvas = BrailleCanvas::new(2, 2);

        // Set a single pixel
        canvas.set_pixel(0, 0, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1
        assert_eq!(canvas.cell_color(0, 0), Some(WHITE));

        // Fill a whole cell
        canvas.reset(2, 2);
        canvas.fill_rect(0, 0, 2, 4, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⠀');
        assert_eq!(canvas.cell_color(1, 0), None);
    }

    #[test]
    fn test_out_of_range_pixels_are_dropped() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(2, 0, WHITE);
        canvas.set_pixel(0, 4, WHITE);
        canvas.draw_line((-5, -5), (0, 0), WHITE, false);
        assert_eq!(canvas.to_char(0, 0), '⠁');
    }

    #[test]
    fn test_stippled_vertical_line() {
        let mut canvas = BrailleCanvas::new(1, 2);
        canvas.draw_line((0, 0), (0, 7), WHITE, true);
        // Dots 1,2 in the first cell and 1,2 in the second
        assert_eq!(canvas.to_char(0, 0), '⠃');
        assert_eq!(canvas.to_char(0, 1), '⠃');
    }

    #[test]
    fn test_ellipse_leaves_corners_empty() {
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.fill_ellipse(0, 0, 8, 8, WHITE);
        // Corner cell loses its outermost dot, the middle is solid
        assert_ne!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⣿');
    }

    #[test]
    fn test_reset_resizes() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(0, 0, WHITE);
        canvas.reset(3, 1);
        assert_eq!(canvas.pixel_width(), 6);
        assert_eq!(canvas.pixel_height(), 4);
        assert_eq!(canvas.to_char(0, 0), '⠀');
    }
}
