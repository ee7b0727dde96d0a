use std::io::Write;

use anyhow::{Context, Result};

use crate::agreement::AgreementPoint;

/// Supported representations of the agreement curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// All points on a single line: `[(threshold, ratio), ...]`
    #[default]
    Text,
    /// Tab separated, one point per line, with a header
    Tsv,
    /// JSON array of `{"threshold": ..., "ratio": ...}` objects
    Json,
}

/// Shortest round-trip representation of `ratio`, always with a decimal point or an
/// exponent. Magnitudes below 1e-4 or from 1e16 up use a signed exponent of at least two
/// digits (`5e-05`, `1e+16`), everything else is written positionally (`0.5`, `3.0`).
pub fn format_ratio(ratio: f64) -> String {
    let magnitude = ratio.abs();
    if !ratio.is_finite() || ratio == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let s = format!("{ratio}");
        if ratio.is_finite() && !s.contains('.') {
            return s + ".0";
        }
        return s;
    }
    let s = format!("{ratio:e}");
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Write `points` to `writer` in the requested `format`.
pub fn write_points<W: Write>(
    writer: &mut W,
    points: &[AgreementPoint],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let points: Vec<String> = points
                .iter()
                .map(|p| format!("({}, {})", p.threshold, format_ratio(p.ratio)))
                .collect();
            writeln!(writer, "[{}]", points.join(", "))?;
        }
        OutputFormat::Tsv => {
            writeln!(writer, "threshold\tratio")?;
            for p in points {
                writeln!(writer, "{}\t{}", p.threshold, format_ratio(p.ratio))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, points)
                .context("Could not serialize agreement points")?;
            writeln!(writer)?;
        }
    }
    writer.flush().context("Could not write agreement points")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<AgreementPoint> {
        vec![
            AgreementPoint {
                threshold: 0,
                ratio: 0.5,
            },
            AgreementPoint {
                threshold: 10,
                ratio: 2. / 3.,
            },
            AgreementPoint {
                threshold: 20,
                ratio: 0.,
            },
        ]
    }

    fn render(points: &[AgreementPoint], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_points(&mut buf, points, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_output() {
        assert_eq!(
            "[(0, 0.5), (10, 0.6666666666666666), (20, 0.0)]\n",
            render(&points(), OutputFormat::Text)
        );
    }

    #[test]
    fn empty_text_output() {
        assert_eq!("[]\n", render(&[], OutputFormat::Text));
    }

    #[test]
    fn tsv_output() {
        assert_eq!(
            "threshold\tratio\n0\t0.5\n10\t0.6666666666666666\n20\t0.0\n",
            render(&points(), OutputFormat::Tsv)
        );
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!("0.0", format_ratio(0.0));
        assert_eq!("3.0", format_ratio(3.0));
        assert_eq!("0.0001", format_ratio(1e-4));
        assert_eq!("5e-05", format_ratio(5e-5));
        assert_eq!("1.5e-07", format_ratio(1.5e-7));
        assert_eq!("1.25e-120", format_ratio(1.25e-120));
        assert_eq!("1000000000000000.0", format_ratio(1e15));
        assert_eq!("1e+16", format_ratio(1e16));
        assert_eq!("2.5e+20", format_ratio(2.5e20));
    }

    #[test]
    fn tiny_ratio_in_text_output() {
        let points = [AgreementPoint {
            threshold: 5,
            ratio: 1. / 20000.,
        }];
        assert_eq!("[(5, 5e-05)]\n", render(&points, OutputFormat::Text));
        assert_eq!(
            "threshold\tratio\n5\t5e-05\n",
            render(&points, OutputFormat::Tsv)
        );
    }

    #[test]
    fn json_output() {
        let out = render(&points(), OutputFormat::Json);
        let parsed: Vec<AgreementPoint> = serde_json::from_str(&out).unwrap();
        assert_eq!(points(), parsed);
        assert!(out.starts_with(r#"[{"threshold":0,"ratio":0.5},"#));
    }
}
