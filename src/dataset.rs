//! # The two-sample dataset
//!
//! A [`Dataset`] owns every call read from the input and knows which of the two samples
//! is tested against which. Sample identifiers are ordered by the first time they occur
//! in the input: the first one is the tested sample, the second one the reference
//! sample whose calls get indexed.
use indexmap::IndexSet;
use log::debug;

use crate::{call::CopyNumberCall, error::RepagreeError};

/// The two samples of a run. Calls of `tested` are looked up among calls of `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub tested: String,
    pub reference: String,
}

impl SamplePair {
    pub fn contains(&self, sample_id: &str) -> bool {
        self.tested == sample_id || self.reference == sample_id
    }
    pub fn as_vec(&self) -> Vec<String> {
        vec![self.tested.clone(), self.reference.clone()]
    }
}

#[derive(Debug)]
pub struct Dataset {
    pub calls: Vec<CopyNumberCall>,
    pub samples: SamplePair,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Dataset {
    /// Wrap `calls` into a dataset, failing unless exactly two distinct sample
    /// identifiers are present.
    pub fn new(calls: Vec<CopyNumberCall>) -> Result<Dataset, RepagreeError> {
        let sample_ids: IndexSet<&str> = calls.iter().map(|c| c.sample_id.as_str()).collect();
        if sample_ids.len() != 2 {
            return Err(RepagreeError::SampleCount(
                sample_ids.iter().map(|s| String::from(*s)).collect(),
            ));
        }
        let samples = SamplePair {
            tested: String::from(sample_ids[0]),
            reference: String::from(sample_ids[1]),
        };

        // at least two calls exist at this point, so both bounds are finite
        let (min_confidence, max_confidence) = calls
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c.confidence), hi.max(c.confidence))
            });
        debug!(
            "Dataset has {} calls, confidence range [{min_confidence}, {max_confidence}]",
            calls.len()
        );

        Ok(Dataset {
            calls,
            samples,
            min_confidence,
            max_confidence,
        })
    }

    /// Make `sample_id` the reference sample, the other one becomes the tested sample.
    pub fn with_reference(mut self, sample_id: &str) -> Result<Dataset, RepagreeError> {
        if !self.samples.contains(sample_id) {
            return Err(RepagreeError::UnknownSample {
                requested: String::from(sample_id),
                available: self.samples.as_vec(),
            });
        }
        if self.samples.tested == sample_id {
            std::mem::swap(&mut self.samples.tested, &mut self.samples.reference);
        }
        Ok(self)
    }
}
