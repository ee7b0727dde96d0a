//! # Per-chromosome interval index
//!
//! The calls of the reference sample are stored in one interval tree per chromosome, so
//! that every lookup is scoped to a single chromosome. Trees are `bio`'s array backed
//! interval trees, which have to be indexed once after all insertions. The
//! [`IntervalIndexBuilder`] takes care of that: only a built [`IntervalIndex`] can be
//! queried.
use std::collections::{HashMap, HashSet};

use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use log::debug;

use crate::call::CopyNumberCall;

/// Alias for the interval tree that we use.
type IntervalTree = ArrayBackedIntervalTree<i64, CallAnnotation>;

/// What is stored with every indexed range.
#[derive(Debug, Clone, PartialEq)]
pub struct CallAnnotation {
    pub copy_number: String,
    pub confidence: f64,
}

impl From<&CopyNumberCall> for CallAnnotation {
    fn from(call: &CopyNumberCall) -> Self {
        CallAnnotation {
            copy_number: call.copy_number.clone(),
            confidence: call.confidence,
        }
    }
}

/// A range returned by [`IntervalIndex::lookup`]. `start` and `end` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedInterval<'a> {
    pub start: i64,
    pub end: i64,
    pub annotation: &'a CallAnnotation,
}

/// Identity of an indexed range: start, end, copy number and confidence bits.
type IntervalKey = (i64, i64, String, u64);

#[derive(Debug, Default)]
pub struct IntervalIndexBuilder {
    trees: HashMap<String, IntervalTree>,
    seen: HashMap<String, HashSet<IntervalKey>>,
    n_intervals: usize,
}

impl IntervalIndexBuilder {
    pub fn new() -> IntervalIndexBuilder {
        IntervalIndexBuilder::default()
    }

    /// Add the closed range `[start, end]` on `chrom`. The index is a set: a range with
    /// the same coordinates and annotation as one already on `chrom` is ignored.
    /// Panics if `start > end`, calls are validated when they are read.
    pub fn insert(&mut self, chrom: &str, start: i64, end: i64, annotation: CallAnnotation) {
        // `+ 0.0` folds -0.0 into 0.0
        let key = (
            start,
            end,
            annotation.copy_number.clone(),
            (annotation.confidence + 0.0).to_bits(),
        );
        if !self.seen.entry(String::from(chrom)).or_default().insert(key) {
            return;
        }
        // trees work on half-open ranges
        self.trees
            .entry(String::from(chrom))
            .or_insert_with(IntervalTree::new)
            .insert(start..end + 1, annotation);
        self.n_intervals += 1;
    }

    pub fn build(mut self) -> IntervalIndex {
        self.trees.values_mut().for_each(|tree| tree.index());
        IntervalIndex {
            trees: self.trees,
            n_intervals: self.n_intervals,
        }
    }
}

#[derive(Debug)]
pub struct IntervalIndex {
    trees: HashMap<String, IntervalTree>,
    n_intervals: usize,
}

impl IntervalIndex {
    pub fn builder() -> IntervalIndexBuilder {
        IntervalIndexBuilder::new()
    }

    /// Index all calls in `calls` that belong to `sample_id`.
    pub fn from_sample(sample_id: &str, calls: &[CopyNumberCall]) -> IntervalIndex {
        let mut builder = IntervalIndex::builder();
        for call in calls.iter().filter(|c| c.sample_id == sample_id) {
            builder.insert(&call.chrom, call.start, call.end, CallAnnotation::from(call));
        }
        let index = builder.build();
        debug!(
            "Indexed {} calls of sample {sample_id} on {} chromosomes",
            index.len(),
            index.n_chroms()
        );
        index
    }

    /// All indexed ranges on `chrom` that share at least one position with `[start, end]`.
    pub fn lookup(&self, chrom: &str, start: i64, end: i64) -> Vec<IndexedInterval<'_>> {
        let Some(tree) = self.trees.get(chrom) else {
            return Vec::new();
        };
        tree.find(start..end + 1)
            .into_iter()
            .map(|e| IndexedInterval {
                start: e.interval().start,
                end: e.interval().end - 1,
                annotation: e.data(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.n_intervals
    }
    pub fn is_empty(&self) -> bool {
        self.n_intervals == 0
    }
    pub fn n_chroms(&self) -> usize {
        self.trees.len()
    }
}
