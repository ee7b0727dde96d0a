//! # Deciding whether two calls agree
//!
//! Two calls agree when they have the same copy number and overlap reciprocally: the
//! shared stretch has to cover at least `min_overlap` of *each* call.
use std::cmp;

use crate::{call::CopyNumberCall, intervals::IndexedInterval};

/// Reciprocal overlap test for the closed ranges `[start1, end1]` and `[start2, end2]`.
/// The overlap has to span at least two positions: ranges that share a single position
/// (and therefore single-position ranges) never pass, whatever `min_overlap` is.
///
/// # Examples
///
/// ```
/// use repagree::overlap::overlap_fraction_ok;
///
/// // 51 shared positions, both calls are 101 long
/// assert!(overlap_fraction_ok(100, 200, 150, 250, 0.5));
/// assert!(!overlap_fraction_ok(100, 200, 150, 250, 0.6));
/// ```
pub fn overlap_fraction_ok(
    start1: i64,
    end1: i64,
    start2: i64,
    end2: i64,
    min_overlap: f64,
) -> bool {
    let overlap_start = cmp::max(start1, start2);
    let overlap_end = cmp::min(end1, end2);
    if overlap_start >= overlap_end {
        return false;
    }
    let overlap_size = (overlap_end - overlap_start + 1) as f64;
    let size1 = (end1 - start1 + 1) as f64;
    let size2 = (end2 - start2 + 1) as f64;

    overlap_size / size1 >= min_overlap && overlap_size / size2 >= min_overlap
}

/// Check whether `candidate` confirms a query call with copy number `query_cn` spanning
/// `[query_start, query_end]`.
pub fn is_matching_call(
    min_overlap: f64,
    query_cn: &str,
    query_start: i64,
    query_end: i64,
    confidence_threshold: f64,
    candidate: &IndexedInterval,
) -> bool {
    candidate.annotation.copy_number == query_cn
        && candidate.annotation.confidence >= confidence_threshold
        && overlap_fraction_ok(
            query_start,
            query_end,
            candidate.start,
            candidate.end,
            min_overlap,
        )
}

/// Number of `candidates` that confirm `query`.
pub fn count_matches(
    min_overlap: f64,
    query: &CopyNumberCall,
    confidence_threshold: f64,
    candidates: &[IndexedInterval],
) -> usize {
    candidates
        .iter()
        .filter(|candidate| {
            is_matching_call(
                min_overlap,
                &query.copy_number,
                query.start,
                query.end,
                confidence_threshold,
                candidate,
            )
        })
        .count()
}
