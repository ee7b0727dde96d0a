//! # Command line interface for `repagree`
use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::io::points::OutputFormat;

/// Default number of steps in the confidence threshold sweep.
pub const DEFAULT_CONF_STEPS: usize = 10;

#[derive(Parser, Debug)]
#[command(
    name = "repagree",
    author,
    version,
    about = "Agreement of CNV calls between two replicate samples across confidence thresholds",
    long_about = None
)]
pub struct Cli {
    /// Record program progress in LOG_FILE
    #[arg(long, value_name = "LOG_FILE")]
    pub log: Option<String>,

    /// Proportion of overlap required between two CNVs to be considered equal
    #[arg(long, value_name = "OVERLAP", value_parser = proportion_in_range)]
    pub overlap: f64,

    /// Number of steps in confidence threshold
    #[arg(long, value_name = "STEPS", default_value_t = DEFAULT_CONF_STEPS, value_parser = steps_in_range)]
    pub steps: usize,

    /// Number of threads to use
    #[arg(long, default_value_t = 1, value_parser = threads_in_range)]
    pub threads: usize,

    /// Sample whose calls are indexed. Defaults to the second sample ID found in the input
    #[arg(long, value_name = "SAMPLE_ID")]
    pub reference_sample: Option<String>,

    /// Output format of the agreement points
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Input CNV file. Comma separated with columns sampleID, chr, start, end, cn, conf
    #[arg(value_name = "CNV_FILE")]
    pub cnv_file: String,
}

fn proportion_in_range(s: &str) -> Result<f64> {
    let proportion: f64 = s
        .parse()
        .context("Could not parse value passed to --overlap to a number")?;
    if !(0.0..=1.0).contains(&proportion) {
        bail!("--overlap must be between 0 and 1");
    }
    Ok(proportion)
}

fn steps_in_range(s: &str) -> Result<usize> {
    let steps = s
        .parse()
        .context("Could not parse value passed to --steps to integer")?;
    if steps < 1 {
        bail!("--steps must be at least 1");
    }
    Ok(steps)
}

fn threads_in_range(s: &str) -> Result<usize> {
    let threads = s
        .parse()
        .context("Could not parse value passed to --threads to integer")?;
    if threads < 1 {
        bail!("--threads must be at least 1");
    }
    Ok(threads)
}
