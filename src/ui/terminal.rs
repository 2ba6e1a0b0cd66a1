use std::io;

use ratatui::{
    backend::Backend,
    layout::Rect as Area,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Terminal,
};

use super::braille::BrailleCanvas;
use super::renderer::{Point, Renderer, Rgb, TextSurface};
use crate::game::state::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::Rect;

// Fonts at least this large are drawn bold
const BOLD_FONT_SIZE: u16 = 64;

/// Renders the field into a terminal through a Braille canvas
///
/// The 800×600 field is stretched over the whole terminal. Shapes are
/// rasterised into Braille dots; text is laid out in whole cells on top.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: BrailleCanvas,
    background: Rgb,
    texts: Vec<(TextSurface, Point)>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Result<Self, io::Error> {
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            canvas: BrailleCanvas::new(size.width as usize, size.height as usize),
            background: Rgb(0, 0, 0),
            texts: Vec::new(),
        })
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Field units covered by one terminal cell
    fn cell_size(&self) -> (f32, f32) {
        (
            FIELD_WIDTH as f32 / self.canvas.width().max(1) as f32,
            FIELD_HEIGHT as f32 / self.canvas.height().max(1) as f32,
        )
    }

    /// Dot bounds [x0, x1) × [y0, y1) covering `rect`, clipped to the canvas.
    /// Shapes always cover at least one dot so a small ball never vanishes.
    fn to_dots(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let (x0, x1) = dot_span(rect.left(), rect.right(), FIELD_WIDTH, self.canvas.pixel_width())?;
        let (y0, y1) = dot_span(rect.top(), rect.bottom(), FIELD_HEIGHT, self.canvas.pixel_height())?;
        Some((x0, y0, x1, y1))
    }

    fn point_to_dot(&self, point: Point) -> (i64, i64) {
        let to_dot = |value: i32, field: i32, dots: usize| {
            let dot = (i64::from(value) * dots as i64).div_euclid(i64::from(field));
            // The far edge of the field maps onto the last dot, not one past it
            dot.min(dots as i64 - 1)
        };
        (
            to_dot(point.x, FIELD_WIDTH, self.canvas.pixel_width()),
            to_dot(point.y, FIELD_HEIGHT, self.canvas.pixel_height()),
        )
    }
}

/// Scale the field interval [start, end) onto `dots` dots, rounding outward
fn dot_span(start: i32, end: i32, field: i32, dots: usize) -> Option<(usize, usize)> {
    let dots_i = dots as i64;
    let field = i64::from(field);
    let lo = (i64::from(start) * dots_i).div_euclid(field);
    let hi = -(-(i64::from(end) * dots_i)).div_euclid(field);
    let hi = hi.max(lo + 1);
    let lo = lo.clamp(0, dots_i) as usize;
    let hi = hi.clamp(0, dots_i) as usize;
    (lo < hi).then_some((lo, hi))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// One terminal row of the canvas, with runs of equal color merged into a span
fn canvas_line(canvas: &BrailleCanvas, row: usize, background: Color) -> Line<'static> {
    let style_for = |color: Option<Rgb>| {
        let style = Style::default().bg(background);
        match color {
            Some(color) => style.fg(to_color(color)),
            None => style,
        }
    };

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_color = None;
    for col in 0..canvas.width() {
        let color = canvas.cell_color(col, row);
        if color != run_color && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), style_for(run_color)));
        }
        run_color = color;
        run.push(canvas.to_char(col, row));
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, style_for(run_color)));
    }
    Line::from(spans)
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn clear(&mut self, color: Rgb) {
        // Pick up terminal resizes once per frame
        let (width, height) = match self.terminal.size() {
            Ok(size) => (size.width as usize, size.height as usize),
            Err(_) => (self.canvas.width(), self.canvas.height()),
        };
        self.canvas.reset(width, height);
        self.background = color;
        self.texts.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some((x0, y0, x1, y1)) = self.to_dots(rect) {
            self.canvas.fill_rect(x0, y0, x1, y1, color);
        }
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Rgb) {
        if let Some((x0, y0, x1, y1)) = self.to_dots(rect) {
            self.canvas.fill_ellipse(x0, y0, x1, y1, color);
        }
    }

    // Braille dots have no intensity, so anti-aliasing becomes a stipple
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, anti_aliased: bool) {
        if self.canvas.width() == 0 || self.canvas.height() == 0 {
            return;
        }
        let from = self.point_to_dot(from);
        let to = self.point_to_dot(to);
        self.canvas.draw_line(from, to, color, anti_aliased);
    }

    fn draw_text(&mut self, text: &str, font_size: u16, color: Rgb) -> TextSurface {
        let (cell_width, cell_height) = self.cell_size();
        TextSurface {
            text: text.to_string(),
            font_size,
            color,
            width: (text.chars().count() as f32 * cell_width).round() as i32,
            height: cell_height.round() as i32,
        }
    }

    fn blit(&mut self, surface: &TextSurface, position: Point) {
        self.texts.push((surface.clone(), position));
    }

    fn present(&mut self) -> Result<(), io::Error> {
        let (cell_width, cell_height) = self.cell_size();
        let canvas = &self.canvas;
        let texts = &self.texts;
        let background = to_color(self.background);

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(Style::default().bg(background)), area);

            for row in 0..canvas.height().min(area.height as usize) {
                let row_area = Area {
                    x: area.x,
                    y: area.y + row as u16,
                    width: area.width,
                    height: 1,
                };
                frame.render_widget(Paragraph::new(canvas_line(canvas, row, background)), row_area);
            }

            for (surface, position) in texts {
                let col = (position.x as f32 / cell_width).round().max(0.0) as u16;
                let row = (position.y as f32 / cell_height).round();
                if row < 0.0 || row >= area.height as f32 || col >= area.width {
                    continue;
                }
                let width = (surface.text.chars().count() as u16).min(area.width - col);

                let mut style = Style::default().fg(to_color(surface.color)).bg(background);
                if surface.font_size >= BOLD_FONT_SIZE {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let text_area = Area {
                    x: area.x + col,
                    y: area.y + row as u16,
                    width,
                    height: 1,
                };
                frame.render_widget(Paragraph::new(Span::styled(surface.text.clone(), style)), text_area);
            }
        })?;

        Ok(())
    }
}
