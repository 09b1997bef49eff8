use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color as TuiColor, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas as CanvasWidget, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::ui::canvas::{Canvas, Color, Coord, Shape, Viewport};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// [`Canvas`] rendered in the terminal's alternate screen with braille dots.
///
/// Draw calls are buffered; the terminal is only taken over while
/// [`wait_for_dismissal`](Canvas::wait_for_dismissal) blocks. A mouse click
/// inside the plot closes it, as do `Esc`, `q` and `Enter`.
#[derive(Debug, Default)]
pub struct TerminalCanvas {
    viewport: Option<Viewport>,
    shapes: Vec<Shape>,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, shape: Shape) -> Result<()> {
        if self.viewport.is_none() {
            return Err(anyhow!("canvas is not open"));
        }
        self.shapes.push(shape);
        Ok(())
    }
}

impl Canvas for TerminalCanvas {
    fn open(&mut self, viewport: &Viewport) -> Result<()> {
        self.viewport = Some(viewport.clone());
        self.shapes.clear();
        Ok(())
    }

    fn draw_point(&mut self, at: Coord, color: Color) -> Result<()> {
        self.push(Shape::Point { at, color })
    }

    fn draw_line(&mut self, from: Coord, to: Coord, color: Color) -> Result<()> {
        self.push(Shape::Line { from, to, color })
    }

    fn draw_text(&mut self, at: Coord, text: &str, color: Color) -> Result<()> {
        self.push(Shape::Text {
            at,
            text: text.to_string(),
            color,
        })
    }

    fn wait_for_dismissal(&mut self) -> Result<()> {
        let viewport = self
            .viewport
            .take()
            .ok_or_else(|| anyhow!("canvas is not open"))?;
        let shapes = std::mem::take(&mut self.shapes);
        debug!(title = %viewport.title, shapes = shapes.len(), "showing canvas");

        with_terminal(|terminal| show_until_dismissed(terminal, &viewport, &shapes))
            .with_context(|| format!("failed to show \"{}\"", viewport.title))
    }
}

fn with_terminal<T>(body: impl FnOnce(&mut Term) -> Result<T>) -> Result<T> {
    enable_raw_mode().context("terminal does not support raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let out = body(&mut terminal);
            let _ = terminal.show_cursor();
            out
        });

    let restored = restore_terminal();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn show_until_dismissed(terminal: &mut Term, viewport: &Viewport, shapes: &[Shape]) -> Result<()> {
    let points = group_points(shapes);
    loop {
        let mut plot = Rect::default();
        terminal.draw(|frame| {
            plot = fit_rect(frame.size(), viewport.aspect_ratio());
            render(frame, plot, viewport, shapes, &points);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Mouse(m)
                if matches!(m.kind, MouseEventKind::Down(_)) && contains(plot, m.column, m.row) =>
            {
                return Ok(());
            }
            Event::Key(k)
                if k.kind == KeyEventKind::Press
                    && matches!(k.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) =>
            {
                return Ok(());
            }
            _ => {}
        }
    }
}

fn render(
    frame: &mut Frame,
    plot: Rect,
    viewport: &Viewport,
    shapes: &[Shape],
    points: &[(Color, Vec<Coord>)],
) {
    let b = viewport.bounds;
    let widget = CanvasWidget::default()
        .block(
            Block::default()
                .title(format!(" {} ", viewport.title))
                .borders(Borders::ALL),
        )
        .marker(Marker::Braille)
        .background_color(TuiColor::White)
        .x_bounds([b.x_min, b.x_max])
        .y_bounds([b.y_min, b.y_max])
        .paint(|ctx| {
            for (color, coords) in points {
                ctx.draw(&Points {
                    coords,
                    color: tui_color(*color),
                });
            }
            for shape in shapes {
                match shape {
                    Shape::Point { .. } => {}
                    Shape::Line { from, to, color } => ctx.draw(&CanvasLine {
                        x1: from.0,
                        y1: from.1,
                        x2: to.0,
                        y2: to.1,
                        color: tui_color(*color),
                    }),
                    Shape::Text { at, text, color } => ctx.print(
                        at.0,
                        at.1,
                        Span::styled(text.clone(), Style::default().fg(tui_color(*color))),
                    ),
                }
            }
        });
    frame.render_widget(widget, plot);
}

fn group_points(shapes: &[Shape]) -> Vec<(Color, Vec<Coord>)> {
    let mut groups: Vec<(Color, Vec<Coord>)> = Vec::new();
    for shape in shapes {
        let Shape::Point { at, color } = shape else {
            continue;
        };
        match groups.iter_mut().find(|(c, _)| c == color) {
            Some((_, coords)) => coords.push(*at),
            None => groups.push((*color, vec![*at])),
        }
    }
    groups
}

fn tui_color(color: Color) -> TuiColor {
    match color {
        Color::Black => TuiColor::Black,
        Color::Red => TuiColor::Red,
        Color::Blue => TuiColor::Blue,
    }
}

/// Largest centered rect inside `area` whose on-screen shape matches
/// `aspect` (width over height).
fn fit_rect(area: Rect, aspect: f64) -> Rect {
    let wanted_width = (area.height as f64 * CELL_ASPECT * aspect).round() as u16;
    let (width, height) = if wanted_width <= area.width {
        (wanted_width, area.height)
    } else {
        let height = (area.width as f64 / (CELL_ASPECT * aspect)).round() as u16;
        (area.width, height.min(area.height))
    };
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
