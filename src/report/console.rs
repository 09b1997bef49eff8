use std::io::{Result, Write};

use crate::tasks::{SweepParams, SweepReport, SweepRow};

const RULE_WIDTH: usize = 65;

/// Formats `n` with `,` thousands separators: `100000` becomes `"100,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `"1 Trial"`, `"10 Trials"`, `"1,000 Trials"`.
pub fn trial_label(trials: u64) -> String {
    let noun = if trials == 1 { "Trial" } else { "Trials" };
    format!("{} {noun}", format_thousands(trials))
}

pub fn mean_line(row: &SweepRow) -> String {
    format!("Mean at {}  {:.5}", trial_label(row.trials), row.mean())
}

pub fn std_dev_line(row: &SweepRow) -> String {
    format!(
        "Standard Deviation at {}  {:.4}",
        trial_label(row.trials),
        row.std_dev()
    )
}

fn rule<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))
}

fn gap<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w)?;
    writeln!(w)
}

pub fn write_banner<W: Write>(w: &mut W, params: &SweepParams) -> Result<()> {
    writeln!(w, "Pi Estimator Program")?;
    rule(w)?;
    writeln!(
        w,
        "This program models the classic \"Pi dartboard approximation\"\n or the Monte-Carlo method"
    )?;
    gap(w)?;
    writeln!(
        w,
        "This program randomly scatters points on a circle with an area of pi"
    )?;
    writeln!(
        w,
        "The trials or \"darts\" thrown at the board are broken down as follows:"
    )?;
    for &trials in &params.trial_counts {
        writeln!(w, " *{}", format_thousands(trials))?;
    }
    writeln!(
        w,
        "Please give the program a moment to run all {} trials",
        format_thousands(params.total_trials())
    )?;
    rule(w)?;
    w.flush()
}

pub fn write_report<W: Write>(w: &mut W, report: &SweepReport) -> Result<()> {
    gap(w)?;
    for row in report.rows() {
        writeln!(w, "{}", mean_line(row))?;
    }
    gap(w)?;
    for row in report.rows() {
        writeln!(w, "{}", std_dev_line(row))?;
    }
    gap(w)?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Summary;

    fn row(trials: u64, mean: f64, std_dev: f64) -> SweepRow {
        SweepRow {
            trials,
            summary: Summary { mean, std_dev },
        }
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1), "1");
        assert_eq!(format_thousands(100), "100");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(50_000), "50,000");
        assert_eq!(format_thousands(100_000), "100,000");
        assert_eq!(format_thousands(161_111), "161,111");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn labels_use_singular_for_one() {
        assert_eq!(trial_label(1), "1 Trial");
        assert_eq!(trial_label(10), "10 Trials");
        assert_eq!(trial_label(10_000), "10,000 Trials");
    }

    #[test]
    fn line_formats() {
        let r = row(1_000, 3.141_592_65, 0.051_234);
        assert_eq!(mean_line(&r), "Mean at 1,000 Trials  3.14159");
        assert_eq!(std_dev_line(&r), "Standard Deviation at 1,000 Trials  0.0512");
    }

    #[test]
    fn banner_lists_counts_and_total() {
        let mut out = Vec::new();
        write_banner(&mut out, &SweepParams::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Pi Estimator Program\n"));
        assert!(text.contains(&format!("\n{}\n", "-".repeat(65))));
        assert!(text.contains(" *1\n *10\n *100\n *1,000\n *10,000\n *50,000\n *100,000\n"));
        assert!(text.contains("run all 161,111 trials"));
    }

    #[test]
    fn report_block_layout() {
        let mut report = SweepReport::default();
        report.push(row(1, 3.2, 1.6));
        report.push(row(100_000, 3.14159, 0.0052));

        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        let exp = "\n\n\
Mean at 1 Trial  3.20000
Mean at 100,000 Trials  3.14159


Standard Deviation at 1 Trial  1.6000
Standard Deviation at 100,000 Trials  0.0052


";
        assert_eq!(text, exp);
    }
}
