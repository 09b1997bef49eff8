use anyhow::{Result, bail};

use crate::ui::canvas::{Canvas, Color, Coord, Shape, Viewport};

/// Keeps every call instead of drawing. `failing()` refuses to open, like a
/// terminal that cannot be taken over.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    opened: Vec<Viewport>,
    shapes: Vec<Shape>,
    dismissals: usize,
    fail_on_open: bool,
}

impl RecordingCanvas {
    pub fn failing() -> Self {
        Self {
            fail_on_open: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> &[Viewport] {
        &self.opened
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn dismissals(&self) -> usize {
        self.dismissals
    }
}

impl Canvas for RecordingCanvas {
    fn open(&mut self, viewport: &Viewport) -> Result<()> {
        if self.fail_on_open {
            bail!("no display available for {:?}", viewport.title);
        }
        self.opened.push(viewport.clone());
        Ok(())
    }

    fn draw_point(&mut self, at: Coord, color: Color) -> Result<()> {
        self.shapes.push(Shape::Point { at, color });
        Ok(())
    }

    fn draw_line(&mut self, from: Coord, to: Coord, color: Color) -> Result<()> {
        self.shapes.push(Shape::Line { from, to, color });
        Ok(())
    }

    fn draw_text(&mut self, at: Coord, text: &str, color: Color) -> Result<()> {
        self.shapes.push(Shape::Text {
            at,
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn wait_for_dismissal(&mut self) -> Result<()> {
        self.dismissals += 1;
        Ok(())
    }
}
