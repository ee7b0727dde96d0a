//! # Structs to represent CNV calls
//!
//! [`CopyNumberCall`] is one row of the input table: a region of a chromosome that was
//! called with a given copy number and confidence in one sample. Coordinates are
//! closed on both ends, i.e. a call from 100 to 200 covers 101 positions.

/// A single copy number variant call. Field names map onto the column headers of the
/// input table (`sampleID`, `chr`, `start`, `end`, `cn`, `conf`).
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CopyNumberCall {
    #[serde(rename = "sampleID")]
    pub sample_id: String,
    #[serde(rename = "chr")]
    pub chrom: String,
    // closed interval: [start, end]
    pub start: i64,
    pub end: i64,
    // kept as the code found in the input, only ever compared for equality
    #[serde(rename = "cn")]
    pub copy_number: String,
    #[serde(rename = "conf")]
    pub confidence: f64,
}

/// Coordinates must lie in `[-MAX_COORDINATE, MAX_COORDINATE]`, which keeps inclusive
/// lengths and half-open ends within `i64`.
pub const MAX_COORDINATE: i64 = i64::MAX / 4;

/// Column headers a CNV table must contain.
pub const REQUIRED_COLUMNS: &[&str] = &["sampleID", "chr", "start", "end", "cn", "conf"];

impl CopyNumberCall {
    pub fn new(
        sample_id: &str,
        chrom: &str,
        start: i64,
        end: i64,
        copy_number: &str,
        confidence: f64,
    ) -> CopyNumberCall {
        CopyNumberCall {
            sample_id: String::from(sample_id),
            chrom: String::from(chrom),
            start,
            end,
            copy_number: String::from(copy_number),
            confidence,
        }
    }
    /// Number of positions covered by the call (both ends inclusive).
    pub fn length(&self) -> i64 {
        self.end - self.start + 1
    }
    pub fn region_s(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.end)
    }
    pub fn has_valid_range(&self) -> bool {
        -MAX_COORDINATE <= self.start && self.start <= self.end && self.end <= MAX_COORDINATE
    }
    pub fn has_valid_confidence(&self) -> bool {
        self.confidence.is_finite() && self.confidence >= 0.0
    }
    pub fn passes(&self, confidence_threshold: f64) -> bool {
        self.confidence >= confidence_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_length() {
        let call = CopyNumberCall::new("A", "chr1", 100, 200, "2", 30.);
        assert_eq!(101, call.length());

        let call = CopyNumberCall::new("A", "chr1", 7, 7, "2", 30.);
        assert_eq!(1, call.length());
    }

    #[test]
    fn region_string() {
        let call = CopyNumberCall::new("A", "chrX", 5, 10, "1", 0.);
        assert_eq!("chrX:5-10", call.region_s());
    }

    #[test]
    fn validity_checks() {
        assert!(!CopyNumberCall::new("A", "chr1", 10, 9, "2", 1.).has_valid_range());
        assert!(!CopyNumberCall::new("A", "chr1", 1, i64::MAX, "2", 1.).has_valid_range());
        assert!(!CopyNumberCall::new("A", "chr1", i64::MIN, 1, "2", 1.).has_valid_range());
        assert!(CopyNumberCall::new("A", "chr1", 1, MAX_COORDINATE, "2", 1.).has_valid_range());
        assert!(!CopyNumberCall::new("A", "chr1", 1, 9, "2", -1.).has_valid_confidence());
        assert!(!CopyNumberCall::new("A", "chr1", 1, 9, "2", f64::NAN).has_valid_confidence());
        assert!(CopyNumberCall::new("A", "chr1", 1, 9, "2", 0.).has_valid_confidence());
    }

    #[test]
    fn threshold_is_inclusive() {
        let call = CopyNumberCall::new("A", "chr1", 1, 9, "2", 30.);
        assert!(call.passes(30.));
        assert!(!call.passes(30.5));
    }
}
