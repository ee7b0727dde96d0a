//! # I/O for `repagree`
//!
//! Reading CNV calls from a CSV table ([`calls`]) and writing agreement points ([`points`]).
use anyhow::{Context, Result};
use log::info;

use crate::dataset::Dataset;

pub mod calls;
pub mod points;

/// Read the CNV table at `path` into a [`Dataset`]. If `reference` is given, that sample
/// is used as the reference instead of the second sample in the table.
pub fn load_dataset(path: &str, reference: Option<&str>) -> Result<Dataset> {
    let calls = calls::read_calls(path)?;
    let dataset = Dataset::new(calls)
        .with_context(|| format!("Could not build dataset from CNV file {path}"))?;
    let dataset = match reference {
        Some(sample) => dataset.with_reference(sample)?,
        None => dataset,
    };
    info!(
        "Testing calls of sample {} against calls of sample {}",
        dataset.samples.tested, dataset.samples.reference
    );
    info!(
        "Confidence scores range from {} to {}",
        dataset.min_confidence, dataset.max_confidence
    );

    Ok(dataset)
}
