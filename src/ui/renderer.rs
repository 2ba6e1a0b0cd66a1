// Drawing surface used by the scene

use std::io;

use crate::config::DisplayConfig;
use crate::game::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rendered text, sized in field units so callers can center it
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    pub text: String,
    pub font_size: u16,
    pub color: Rgb,
    pub width: i32,
    pub height: i32,
}

/// Colors used by the scene, taken from the display config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
    pub game_over: Rgb,
}

impl From<&DisplayConfig> for Palette {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            foreground: display.foreground.into(),
            background: display.background.into(),
            game_over: display.game_over_color.into(),
        }
    }
}

/// A frame is built with the draw calls and shown by `present`.
/// Drawing never fails; only pushing the frame to the device can.
pub trait Renderer {
    fn clear(&mut self, color: Rgb);
    fn draw_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_ellipse(&mut self, rect: Rect, color: Rgb);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, anti_aliased: bool);
    fn draw_text(&mut self, text: &str, font_size: u16, color: Rgb) -> TextSurface;
    fn blit(&mut self, surface: &TextSurface, position: Point);
    fn present(&mut self) -> Result<(), io::Error>;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Clear(Rgb),
        Rect(Rect, Rgb),
        Ellipse(Rect, Rgb),
        Line(Point, Point, Rgb, bool),
        Text(String, u16, Rgb, Point),
        Present,
    }

    /// Records every call; text is half a font size wide per character
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub ops: Vec<DrawOp>,
    }

    impl RecordingRenderer {
        /// Operations of the most recently presented frame
        pub fn last_frame(&self) -> &[DrawOp] {
            let end = self
                .ops
                .iter()
                .rposition(|op| *op == DrawOp::Present)
                .unwrap_or(self.ops.len());
            let start = self.ops[..end]
                .iter()
                .rposition(|op| matches!(op, DrawOp::Clear(_)))
                .unwrap_or(0);
            &self.ops[start..end]
        }

        pub fn frames(&self) -> usize {
            self.ops.iter().filter(|op| **op == DrawOp::Present).count()
        }

        pub fn texts(&self) -> Vec<(String, Point)> {
            self.last_frame()
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Text(text, _, _, at) => Some((text.clone(), *at)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, color: Rgb) {
            self.ops.push(DrawOp::Clear(color));
        }

        fn draw_rect(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(DrawOp::Rect(rect, color));
        }

        fn draw_ellipse(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(DrawOp::Ellipse(rect, color));
        }

        fn draw_line(&mut self, from: Point, to: Point, color: Rgb, anti_aliased: bool) {
            self.ops.push(DrawOp::Line(from, to, color, anti_aliased));
        }

        fn draw_text(&mut self, text: &str, font_size: u16, color: Rgb) -> TextSurface {
            TextSurface {
                text: text.to_string(),
                font_size,
                color,
                width: text.chars().count() as i32 * i32::from(font_size) / 2,
                height: i32::from(font_size),
            }
        }

        fn blit(&mut self, surface: &TextSurface, position: Point) {
            self.ops.push(DrawOp::Text(
                surface.text.clone(),
                surface.font_size,
                surface.color,
                position,
            ));
        }

        fn present(&mut self) -> Result<(), io::Error> {
            self.ops.push(DrawOp::Present);
            Ok(())
        }
    }
}
