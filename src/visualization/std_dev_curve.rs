use anyhow::Result;

use crate::error::PiError;
use crate::report::format_thousands;
use crate::tasks::SweepReport;
use crate::ui::canvas::{Bounds, Canvas, Color, Coord, Viewport};

const TITLE: &str = "Standard Deviation";
const WINDOW_SIZE: u32 = 650;

/// Minimum plotted range: six decades of trials, three units of spread.
const MIN_X_MAX: f64 = 6.0;
const MIN_Y_MAX: f64 = 3.0;
const Y_TICK_STEP: f64 = 0.5;
const TICK_FRACTION: f64 = 0.015;

/// Standard deviation against `log10(trials)`, one point per trial count.
#[derive(Debug, Clone, PartialEq)]
pub struct StdDevCurve {
    points: Vec<Coord>,
}

impl StdDevCurve {
    pub fn from_report(report: &SweepReport) -> Result<Self, PiError> {
        Self::new(report.std_dev_curve())
    }

    pub fn new(points: Vec<Coord>) -> Result<Self, PiError> {
        if points.is_empty() {
            return Err(PiError::EmptySequence);
        }
        if let Some((x, y)) = points.iter().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(PiError::InvalidParameter(format!(
                "curve point ({x}, {y}) is not finite"
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Plot frame `[0, x_max] × [0, y_max]`, grown to whole units when the
    /// data does not fit the default six by three.
    pub fn frame(&self) -> Bounds {
        let (mut x_max, mut y_max) = (MIN_X_MAX, MIN_Y_MAX);
        for &(x, y) in &self.points {
            x_max = x_max.max(x.ceil());
            y_max = y_max.max(y.ceil());
        }
        Bounds::new(0.0, 0.0, x_max, y_max)
    }

    pub fn viewport(&self) -> Viewport {
        let f = self.frame();
        Viewport {
            title: TITLE.into(),
            width: WINDOW_SIZE,
            height: WINDOW_SIZE,
            bounds: Bounds::new(-0.15 * f.x_max, -0.12 * f.y_max, 1.05 * f.x_max, 1.12 * f.y_max),
        }
    }

    /// Plots the curve with its axes and labels, then waits for the user to
    /// close the canvas.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        let frame = self.frame();
        canvas.open(&self.viewport())?;

        self.draw_axes(canvas, frame)?;

        for pair in self.points.windows(2) {
            canvas.draw_line(pair[0], pair[1], Color::Blue)?;
        }
        for &p in &self.points {
            canvas.draw_point(p, Color::Red)?;
        }

        canvas.draw_text((0.3 * frame.x_max, 1.06 * frame.y_max), TITLE, Color::Black)?;
        canvas.wait_for_dismissal()
    }

    fn draw_axes<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: Bounds) -> Result<()> {
        let (x_max, y_max) = (frame.x_max, frame.y_max);
        let x_tick = TICK_FRACTION * y_max;
        let y_tick = TICK_FRACTION * x_max;

        canvas.draw_line((0.0, 0.0), (x_max, 0.0), Color::Black)?;
        canvas.draw_line((0.0, 0.0), (0.0, y_max), Color::Black)?;

        for decade in 0..=(x_max as u32) {
            let x = decade as f64;
            canvas.draw_line((x, 0.0), (x, -x_tick), Color::Black)?;
            let label = 10u64
                .checked_pow(decade)
                .map(format_thousands)
                .unwrap_or_else(|| format!("1e{decade}"));
            canvas.draw_text((x, -4.0 * x_tick), &label, Color::Black)?;
        }

        let steps = (y_max / Y_TICK_STEP).round() as u32;
        for i in 0..=steps {
            let y = i as f64 * Y_TICK_STEP;
            canvas.draw_line((0.0, y), (-y_tick, y), Color::Black)?;
            canvas.draw_text((-8.0 * y_tick, y), &format!("{y:.1}"), Color::Black)?;
        }

        canvas.draw_text((0.4 * x_max, -7.0 * x_tick), "Trials (log scale)", Color::Black)?;
        canvas.draw_text((0.02 * x_max, 1.02 * y_max), "Std Dev", Color::Black)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Summary;
    use crate::tasks::SweepRow;
    use crate::testing::RecordingCanvas;
    use crate::ui::canvas::Shape;

    fn report(rows: &[(u64, f64)]) -> SweepReport {
        let mut r = SweepReport::default();
        for &(trials, std_dev) in rows {
            r.push(SweepRow {
                trials,
                summary: Summary {
                    mean: 3.14,
                    std_dev,
                },
            });
        }
        r
    }

    fn sweep_like() -> SweepReport {
        report(&[
            (1, 1.64),
            (10, 0.52),
            (100, 0.16),
            (1_000, 0.052),
            (10_000, 0.016),
            (50_000, 0.0073),
            (100_000, 0.0052),
        ])
    }

    #[test]
    fn empty_report_is_rejected() {
        assert_eq!(
            StdDevCurve::from_report(&SweepReport::default()),
            Err(PiError::EmptySequence)
        );
    }

    #[test]
    fn non_finite_points_are_rejected() {
        assert!(matches!(
            StdDevCurve::new(vec![(0.0, f64::NAN)]),
            Err(PiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn default_frame_is_six_by_three() {
        let curve = StdDevCurve::from_report(&sweep_like()).unwrap();
        assert_eq!(curve.points().len(), 7);
        assert_eq!(curve.frame(), Bounds::new(0.0, 0.0, 6.0, 3.0));
    }

    #[test]
    fn frame_grows_to_fit_data() {
        let curve = StdDevCurve::new(vec![(7.2, 0.1), (0.0, 3.5)]).unwrap();
        assert_eq!(curve.frame(), Bounds::new(0.0, 0.0, 8.0, 4.0));
    }

    #[test]
    fn render_plots_every_pair_and_waits() {
        let curve = StdDevCurve::from_report(&sweep_like()).unwrap();
        let mut canvas = RecordingCanvas::default();
        curve.render(&mut canvas).unwrap();

        assert_eq!(canvas.opened().len(), 1);
        assert_eq!(canvas.opened()[0].title, "Standard Deviation");
        assert_eq!(canvas.dismissals(), 1);

        let plotted: Vec<Coord> = canvas
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Point { at, .. } => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(plotted, curve.points());

        let segments = canvas
            .shapes()
            .iter()
            .filter(|s| matches!(s, Shape::Line { color: Color::Blue, .. }))
            .count();
        assert_eq!(segments, 6);

        let texts = canvas.texts();
        for label in ["1", "10", "1,000", "100,000", "1,000,000", "0.0", "1.5", "3.0"] {
            assert!(texts.iter().any(|t| t == label), "missing tick label {label}");
        }
        assert!(texts.iter().any(|t| t == "Standard Deviation"));
    }

    #[test]
    fn everything_stays_inside_the_viewport() {
        let curve = StdDevCurve::from_report(&sweep_like()).unwrap();
        let mut canvas = RecordingCanvas::default();
        curve.render(&mut canvas).unwrap();
        let bounds = curve.viewport().bounds;

        for shape in canvas.shapes() {
            match shape {
                Shape::Point { at, .. } | Shape::Text { at, .. } => {
                    assert!(bounds.contains(*at), "{at:?} outside")
                }
                Shape::Line { from, to, .. } => {
                    assert!(bounds.contains(*from) && bounds.contains(*to))
                }
            }
        }
    }
}
