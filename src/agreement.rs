//! # Sweeping the confidence threshold
//!
//! For every threshold `t` in `0, step, 2 * step, ...` we count all calls (of both samples)
//! with confidence `>= t`, and how many indexed reference calls confirm the tested
//! sample's calls with confidence `>= t`. The point reported for `t` is the ratio of
//! confirmations to the remainder of that count:
//!
//! `ratio = num_agree / (total_above - num_agree)`
//!
//! Thresholds for which this denominator is not positive are skipped.
use log::{debug, trace};
use rayon::prelude::*;

use crate::{call::CopyNumberCall, error::RepagreeError, intervals::IntervalIndex, overlap};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgreementPoint {
    pub threshold: i64,
    pub ratio: f64,
}

/// Largest maximum confidence the sweep accepts (2^53). Above it, integer thresholds no
/// longer map onto distinct floating point values.
pub const MAX_SWEEP_CONFIDENCE: f64 = 9_007_199_254_740_992.0;

/// Distance between two consecutive thresholds: `max_confidence / steps`, rounded down.
///
/// # Examples
///
/// ```
/// use repagree::agreement::step_size;
///
/// assert_eq!(4, step_size(40.0, 10).unwrap());
/// assert_eq!(3, step_size(39.9, 10).unwrap());
/// assert!(step_size(9.0, 10).is_err());
/// ```
pub fn step_size(max_confidence: f64, steps: usize) -> Result<i64, RepagreeError> {
    if steps == 0 {
        return Err(RepagreeError::Configuration(String::from(
            "Number of confidence steps must be at least 1",
        )));
    }
    if max_confidence >= MAX_SWEEP_CONFIDENCE {
        return Err(RepagreeError::Configuration(format!(
            "Maximum confidence {max_confidence} is too large to sweep, it must be below {MAX_SWEEP_CONFIDENCE}"
        )));
    }
    let step = (max_confidence / steps as f64).floor() as i64;
    if step < 1 {
        return Err(RepagreeError::Configuration(format!(
            "Confidence step size is {step}: {steps} steps is too many for maximum confidence {max_confidence}"
        )));
    }
    Ok(step)
}

/// Exclusive bound handed to [`thresholds`] for a given maximum observed confidence.
pub fn sweep_upper_bound(max_confidence: f64) -> i64 {
    (max_confidence.floor() as i64).saturating_add(1)
}

/// Thresholds `0, step_size, 2 * step_size, ...` below `upper_bound + step_size`, so the
/// last threshold lies at or beyond `upper_bound - 1`.
pub fn thresholds(step_size: i64, upper_bound: i64) -> impl Iterator<Item = i64> {
    // `step_by` would panic on 0
    let step = step_size.max(1) as usize;
    (0..upper_bound.saturating_add(step_size)).step_by(step)
}

/// Agreement between the calls of `sample_id` and the calls in `intervals` at a single
/// confidence `threshold`. Returns `None` if the denominator is not positive.
pub fn agreement_at(
    min_overlap: f64,
    threshold: i64,
    sample_id: &str,
    intervals: &IntervalIndex,
    calls: &[CopyNumberCall],
) -> Option<AgreementPoint> {
    let conf_threshold = threshold as f64;
    let mut total_above_threshold: i64 = 0;
    let mut num_agree: i64 = 0;

    for call in calls.iter().filter(|c| c.passes(conf_threshold)) {
        total_above_threshold += 1;
        if call.sample_id != sample_id {
            continue;
        }
        let overlaps = intervals.lookup(&call.chrom, call.start, call.end);
        let n_matches = overlap::count_matches(min_overlap, call, conf_threshold, &overlaps);
        trace!(
            "Threshold {threshold}: {} ({} bp) overlaps {} indexed call(s), {n_matches} matching",
            call.region_s(),
            call.length(),
            overlaps.len()
        );
        num_agree += n_matches as i64;
    }

    let denominator = total_above_threshold - num_agree;
    debug!(
        "Threshold {threshold}: {total_above_threshold} calls above threshold, {num_agree} agreeing"
    );
    if denominator > 0 {
        Some(AgreementPoint {
            threshold,
            ratio: num_agree as f64 / denominator as f64,
        })
    } else {
        debug!("Threshold {threshold}: denominator is {denominator}, skipping");
        None
    }
}

/// Run [`agreement_at`] for all [`thresholds`]. Thresholds are evaluated in parallel on the
/// current rayon pool, the result is ordered by ascending threshold.
pub fn agreement(
    min_overlap: f64,
    step_size: i64,
    upper_bound: i64,
    sample_id: &str,
    intervals: &IntervalIndex,
    calls: &[CopyNumberCall],
) -> Vec<AgreementPoint> {
    let thresholds: Vec<i64> = thresholds(step_size, upper_bound).collect();
    thresholds
        .par_iter()
        .filter_map(|t| agreement_at(min_overlap, *t, sample_id, intervals, calls))
        .collect()
}
