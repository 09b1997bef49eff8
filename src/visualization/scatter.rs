use anyhow::Result;

use crate::sampling::{CIRCLE_CENTER, CIRCLE_RADIUS, PointSource, SQUARE_SIDE, SamplePoint};
use crate::ui::canvas::{Bounds, Canvas, Color, Viewport};

const TITLE: &str = "Mapping Pi";
const WINDOW_SIZE: u32 = 650;
const BOUNDS: Bounds = Bounds::new(-0.2, -0.2, 4.0, 4.0);

const AXIS_LENGTH: f64 = 3.0;
const ARROW_SIZE: f64 = 0.08;
const TICK_STEP: f64 = 0.5;
const TICK_LENGTH: f64 = 0.05;
const CIRCLE_SEGMENTS: usize = 96;

const HEADING: &str = "Pi Approximation Visualization";
const KEY: [&str; 4] = [
    "* The area inside the circle is π",
    "* The red dots approximate π",
    "* The Circles radius is 1",
    "* Area of the square is 4",
];

/// One demonstration run of darts, kept for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    points: Vec<SamplePoint>,
}

impl ScatterScene {
    pub fn sample<S: PointSource + ?Sized>(source: &mut S, count: usize) -> Self {
        Self {
            points: (0..count).map(|_| source.next_point()).collect(),
        }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn hits(&self) -> usize {
        self.points.iter().filter(|p| p.is_inside()).count()
    }

    /// The estimate this single run would give, `NaN` for an empty scene.
    pub fn estimate(&self) -> f64 {
        if self.points.is_empty() {
            return f64::NAN;
        }
        4.0 * self.hits() as f64 / self.points.len() as f64
    }

    pub fn color_of(point: &SamplePoint) -> Color {
        if point.is_inside() {
            Color::Red
        } else {
            Color::Blue
        }
    }

    pub fn viewport() -> Viewport {
        Viewport {
            title: TITLE.into(),
            width: WINDOW_SIZE,
            height: WINDOW_SIZE,
            bounds: BOUNDS,
        }
    }

    /// Draws the darts and the board decoration, then waits for the user to
    /// close the canvas.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        canvas.open(&Self::viewport())?;

        for p in &self.points {
            canvas.draw_point((p.x, p.y), Self::color_of(p))?;
        }
        draw_ticks(canvas)?;
        draw_annotations(canvas)?;
        draw_board(canvas)?;
        draw_axes(canvas)?;

        canvas.wait_for_dismissal()
    }
}

/// Tick positions `0, 0.5, ..., 2.5`.
fn tick_positions() -> impl Iterator<Item = f64> {
    (0..)
        .map(|i| i as f64 * TICK_STEP)
        .take_while(|&v| v < AXIS_LENGTH)
}

fn draw_ticks<C: Canvas + ?Sized>(canvas: &mut C) -> Result<()> {
    for v in tick_positions() {
        canvas.draw_line((0.0, v), (-TICK_LENGTH, v), Color::Black)?;
        canvas.draw_line((v, 0.0), (v, -TICK_LENGTH), Color::Black)?;
        let label = format!("{v}");
        canvas.draw_text((v, -0.09), &label, Color::Black)?;
        canvas.draw_text((-0.12, v), &label, Color::Black)?;
    }
    Ok(())
}

fn draw_annotations<C: Canvas + ?Sized>(canvas: &mut C) -> Result<()> {
    canvas.draw_line((1.5, 3.8), (3.5, 3.8), Color::Black)?;
    canvas.draw_line((1.5, 3.2), (3.5, 3.2), Color::Black)?;
    canvas.draw_text((1.6, 3.5), HEADING, Color::Black)?;

    for (i, line) in KEY.iter().enumerate() {
        canvas.draw_text((2.3, 1.8 - 0.2 * i as f64), line, Color::Black)?;
    }
    Ok(())
}

fn draw_board<C: Canvas + ?Sized>(canvas: &mut C) -> Result<()> {
    let (cx, cy) = (CIRCLE_CENTER.x, CIRCLE_CENTER.y);
    let on_circle = |k: usize| {
        let theta = std::f64::consts::TAU * k as f64 / CIRCLE_SEGMENTS as f64;
        (cx + CIRCLE_RADIUS * theta.cos(), cy + CIRCLE_RADIUS * theta.sin())
    };
    for k in 0..CIRCLE_SEGMENTS {
        canvas.draw_line(on_circle(k), on_circle(k + 1), Color::Black)?;
    }

    canvas.draw_line((cx, cy), (cx, cy + CIRCLE_RADIUS), Color::Black)?;
    canvas.draw_line((0.0, SQUARE_SIDE), (SQUARE_SIDE, SQUARE_SIDE), Color::Black)?;
    canvas.draw_line((SQUARE_SIDE, 0.0), (SQUARE_SIDE, SQUARE_SIDE), Color::Black)?;
    Ok(())
}

fn draw_axes<C: Canvas + ?Sized>(canvas: &mut C) -> Result<()> {
    let tip = AXIS_LENGTH;
    let back = AXIS_LENGTH - ARROW_SIZE;
    let half = ARROW_SIZE / 2.0;

    canvas.draw_line((0.0, 0.0), (tip, 0.0), Color::Black)?;
    canvas.draw_line((tip, 0.0), (back, half), Color::Black)?;
    canvas.draw_line((tip, 0.0), (back, -half), Color::Black)?;

    canvas.draw_line((0.0, 0.0), (0.0, tip), Color::Black)?;
    canvas.draw_line((0.0, tip), (half, back), Color::Black)?;
    canvas.draw_line((0.0, tip), (-half, back), Color::Black)?;

    canvas.draw_text((tip + 0.1, 0.0), "x", Color::Black)?;
    canvas.draw_text((0.0, tip + 0.1), "y", Color::Black)?;
    Ok(())
}
