use std::io::Write;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::info;

use crate::report::{write_banner, write_report};
use crate::sampling::PointSource;
use crate::tasks::{PiSweep, SweepParams, SweepReport};
use crate::ui::canvas::Canvas;
use crate::ui::cli::confirm::ask_yes_no;
use crate::ui::cli::drivers::PromptDriver;
use crate::visualization::{ScatterScene, StdDevCurve, Visualization};

/// One interactive run: banner, sweep, report, then the optional plots.
///
/// The console, the drawing surface and both random sources are supplied by
/// the caller.
pub struct App<D: PromptDriver, C: Canvas> {
    driver: D,
    canvas: C,
    params: SweepParams,
}

impl<D: PromptDriver, C: Canvas> App<D, C> {
    pub fn new(driver: D, canvas: C, params: SweepParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            driver,
            canvas,
            params,
        })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// `sweep_source` feeds the statistics; `scatter_source` is only touched
    /// if the scatter plot is requested.
    pub fn run<W, S, V>(
        &mut self,
        out: &mut W,
        sweep_source: S,
        mut scatter_source: V,
    ) -> Result<SweepReport>
    where
        W: Write,
        S: PointSource,
        V: PointSource,
    {
        write_banner(out, &self.params)?;

        let mut sweep = PiSweep::new(sweep_source, self.params.clone())?;
        sweep.run()?;
        let report = sweep.into_report();
        write_report(out, &report)?;

        for visualization in Visualization::iter() {
            let name: &'static str = visualization.into();
            if !ask_yes_no(&self.driver, &visualization.prompt())? {
                info!(visualization = name, "declined");
                continue;
            }
            info!(visualization = name, "showing");
            let shown = match visualization {
                Visualization::StdDevCurve => {
                    StdDevCurve::from_report(&report)?.render(&mut self.canvas)
                }
                Visualization::PiScatter => {
                    let scene = ScatterScene::sample(&mut scatter_source, self.params.scatter_points);
                    info!(
                        points = scene.points().len(),
                        hits = scene.hits(),
                        estimate = scene.estimate(),
                        "scatter sampled"
                    );
                    scene.render(&mut self.canvas)
                }
            };
            shown.with_context(|| format!("{name} visualization failed"))?;
        }

        Ok(report)
    }
}
