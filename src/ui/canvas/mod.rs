mod canvas;
mod terminal_canvas;

pub use canvas::{Bounds, Canvas, Color, Coord, Shape, Viewport};
pub use terminal_canvas::TerminalCanvas;
