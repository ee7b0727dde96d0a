//! # repagree
//!
//! Agreement of copy number variant calls between two replicate samples. The calls of
//! one sample (the reference) are put into a per-chromosome [interval index](intervals),
//! the calls of the other sample are looked up in it, and the fraction of confirmed calls
//! is tracked while a confidence threshold is raised step by step ([`agreement`]).
pub mod agreement;
pub mod call;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod intervals;
pub mod io;
pub mod overlap;

use log::info;

use crate::{
    agreement::AgreementPoint, dataset::Dataset, error::RepagreeError, intervals::IntervalIndex,
};

/// Compute the agreement curve for `dataset`. `min_overlap` is the reciprocal overlap two
/// calls need to agree, `steps` the number of confidence steps between 0 and the maximum
/// confidence in the dataset.
pub fn run(
    dataset: &Dataset,
    min_overlap: f64,
    steps: usize,
) -> Result<Vec<AgreementPoint>, RepagreeError> {
    if !(0.0..=1.0).contains(&min_overlap) {
        return Err(RepagreeError::Configuration(format!(
            "Overlap proportion must be between 0 and 1, got {min_overlap}"
        )));
    }
    let step_size = agreement::step_size(dataset.max_confidence, steps)?;
    let upper_bound = agreement::sweep_upper_bound(dataset.max_confidence);

    let intervals = IntervalIndex::from_sample(&dataset.samples.reference, &dataset.calls);
    info!(
        "Indexed {} calls of reference sample {}",
        intervals.len(),
        dataset.samples.reference
    );

    info!("Sweeping confidence threshold from 0 in steps of {step_size}");
    let points = agreement::agreement(
        min_overlap,
        step_size,
        upper_bound,
        &dataset.samples.tested,
        &intervals,
        &dataset.calls,
    );
    info!("Computed agreement at {} thresholds", points.len());

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::CopyNumberCall;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            CopyNumberCall::new("A", "chr1", 100, 200, "2", 30.),
            CopyNumberCall::new("B", "chr1", 150, 250, "2", 40.),
        ])
        .unwrap()
    }

    #[test]
    fn run_single_step() {
        let points = run(&dataset(), 0.4, 1).unwrap();
        assert_eq!(
            AgreementPoint {
                threshold: 0,
                ratio: 1.0
            },
            points[0]
        );
    }

    #[test]
    fn reference_choice_does_not_change_curve() {
        // both calls of a matching pair have to pass the threshold, whichever side is indexed
        let calls = vec![
            CopyNumberCall::new("A", "chr1", 100, 200, "2", 30.),
            CopyNumberCall::new("A", "chr1", 110, 200, "2", 12.),
            CopyNumberCall::new("B", "chr1", 150, 250, "2", 40.),
            CopyNumberCall::new("B", "chr2", 150, 250, "1", 8.),
        ];
        let forward = run(&Dataset::new(calls.clone()).unwrap(), 0.4, 4).unwrap();
        let swapped = Dataset::new(calls).unwrap().with_reference("A").unwrap();
        assert_eq!(forward, run(&swapped, 0.4, 4).unwrap());
    }

    #[test]
    fn overlap_out_of_range() {
        assert!(matches!(
            run(&dataset(), 1.5, 1),
            Err(RepagreeError::Configuration(_))
        ));
        assert!(matches!(
            run(&dataset(), -0.1, 1),
            Err(RepagreeError::Configuration(_))
        ));
    }

    #[test]
    fn huge_confidence_is_a_configuration_error() {
        let dataset = Dataset::new(vec![
            CopyNumberCall::new("A", "chr1", 100, 200, "2", 30.),
            CopyNumberCall::new("B", "chr1", 150, 250, "2", 1e19),
        ])
        .unwrap();
        assert!(matches!(
            run(&dataset, 0.5, 10),
            Err(RepagreeError::Configuration(_))
        ));
    }

    #[test]
    fn too_many_steps() {
        assert!(matches!(
            run(&dataset(), 0.4, 41),
            Err(RepagreeError::Configuration(_))
        ));
    }
}
