use csv::{ReaderBuilder, StringRecord};
use log::info;

use crate::{
    call::{CopyNumberCall, MAX_COORDINATE, REQUIRED_COLUMNS},
    error::RepagreeError,
};

/// Read all CNV calls from the comma separated file at `path`. The first row must be a
/// header naming at least the columns in [`REQUIRED_COLUMNS`]; other columns are ignored.
/// Every call is checked for `start <= end` within [`MAX_COORDINATE`] and a finite,
/// non-negative confidence.
pub fn read_calls(path: &str) -> Result<Vec<CopyNumberCall>, RepagreeError> {
    let unreadable = |source| RepagreeError::Unreadable {
        path: String::from(path),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(unreadable)?;

    let headers = reader.headers().map_err(unreadable)?.clone();
    check_columns(path, &headers)?;

    let mut calls = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| {
            if source.is_io_error() {
                unreadable(source)
            } else {
                let line = source.position().map_or(0, |p| p.line());
                RepagreeError::MalformedRecord {
                    path: String::from(path),
                    line,
                    source,
                }
            }
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let call: CopyNumberCall =
            record
                .deserialize(Some(&headers))
                .map_err(|source| RepagreeError::MalformedRecord {
                    path: String::from(path),
                    line,
                    source,
                })?;

        if !call.has_valid_range() {
            return Err(RepagreeError::InvalidRange {
                path: String::from(path),
                line,
                region: call.region_s(),
            });
        }
        if !call.has_valid_confidence() {
            return Err(RepagreeError::InvalidConfidence {
                path: String::from(path),
                line,
                region: call.region_s(),
                confidence: call.confidence,
            });
        }
        calls.push(call);
    }

    info!("Read {} CNV calls from {path}", calls.len());
    Ok(calls)
}

fn check_columns(path: &str, headers: &StringRecord) -> Result<(), RepagreeError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| String::from(*column))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RepagreeError::MissingColumns {
            path: String::from(path),
            missing,
        })
    }
}
