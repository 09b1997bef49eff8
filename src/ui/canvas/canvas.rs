use anyhow::Result;

/// A position in the viewport's own coordinate system.
pub type Coord = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Blue,
}

/// Visible coordinate range, lower-left to upper-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// A titled drawing surface of `width × height` logical units showing
/// `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub bounds: Bounds,
}

impl Viewport {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

/// One primitive handed to a [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point { at: Coord, color: Color },
    Line { from: Coord, to: Coord, color: Color },
    Text { at: Coord, text: String, color: Color },
}

/// Drawing capability for the visualizations.
///
/// Callers [`open`](Canvas::open) a viewport, issue draw calls, then block in
/// [`wait_for_dismissal`](Canvas::wait_for_dismissal) until the user closes it.
/// The canvas owns the window lifecycle; callers only hand over data.
pub trait Canvas {
    fn open(&mut self, viewport: &Viewport) -> Result<()>;

    fn draw_point(&mut self, at: Coord, color: Color) -> Result<()>;

    fn draw_line(&mut self, from: Coord, to: Coord, color: Color) -> Result<()>;

    fn draw_text(&mut self, at: Coord, text: &str, color: Color) -> Result<()>;

    /// Shows everything drawn since `open` and blocks until dismissed.
    fn wait_for_dismissal(&mut self) -> Result<()>;
}
