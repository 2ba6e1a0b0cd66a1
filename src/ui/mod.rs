pub mod braille;
pub mod render;
pub mod renderer;
pub mod terminal;

pub use render::render;
pub use renderer::{Palette, Point, Renderer, Rgb, TextSurface};
pub use terminal::TerminalRenderer;
