//! # Errors surfaced by `repagree`
//!
//! Every fatal condition the library can detect is a variant of [`RepagreeError`].
//! The binary maps each variant to a process exit status with [`RepagreeError::exit_code`].
use std::process::ExitCode;

/// Exit status used when the input file cannot be opened or read.
pub const EXIT_FILE_IO_ERROR: u8 = 1;
/// Exit status used for invalid settings (also what clap uses for bad arguments).
pub const EXIT_COMMAND_LINE_ERROR: u8 = 2;
/// Exit status used when the CNV file is readable but its content is unusable.
pub const EXIT_CNV_FILE_ERROR: u8 = 3;

#[derive(thiserror::Error, Debug)]
pub enum RepagreeError {
    #[error("Could not read CNV file {path}")]
    Unreadable {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("CNV file {path} is missing required column(s): {}", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },
    #[error("Failed to deserialize record at line {line} in CNV file {path}")]
    MalformedRecord {
        path: String,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Call {region} at line {line} in CNV file {path} has start after end or coordinates out of range")]
    InvalidRange {
        path: String,
        line: u64,
        region: String,
    },
    #[error("Call {region} at line {line} in CNV file {path} has invalid confidence {confidence}")]
    InvalidConfidence {
        path: String,
        line: u64,
        region: String,
        confidence: f64,
    },
    #[error("Wrong number of sample IDs: {0:?}")]
    SampleCount(Vec<String>),
    #[error("Sample '{requested}' is not one of the samples in the input: {available:?}")]
    UnknownSample {
        requested: String,
        available: Vec<String>,
    },
    #[error("{0}")]
    Configuration(String),
}

impl RepagreeError {
    pub fn exit_status(&self) -> u8 {
        match self {
            RepagreeError::Unreadable { .. } => EXIT_FILE_IO_ERROR,
            RepagreeError::MissingColumns { .. }
            | RepagreeError::MalformedRecord { .. }
            | RepagreeError::InvalidRange { .. }
            | RepagreeError::InvalidConfidence { .. }
            | RepagreeError::SampleCount(_) => EXIT_CNV_FILE_ERROR,
            RepagreeError::UnknownSample { .. } | RepagreeError::Configuration(_) => {
                EXIT_COMMAND_LINE_ERROR
            }
        }
    }
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
