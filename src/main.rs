use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pi_estimator::app::App;
use pi_estimator::sampling::UniformSquare;
use pi_estimator::tasks::SweepParams;
use pi_estimator::ui::canvas::TerminalCanvas;
use pi_estimator::ui::cli::drivers::InquireDriver;

fn main() -> Result<()> {
    // stdout carries the report, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut app = App::new(InquireDriver, TerminalCanvas::new(), SweepParams::default())?;
    app.run(
        &mut io::stdout(),
        UniformSquare::from_entropy(),
        UniformSquare::from_entropy(),
    )?;
    Ok(())
}
