use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use num_bigint::{BigInt, BigUint};

use crate::codec;
use crate::domain::{PointSet, Radix};
use crate::error::Error;
use crate::interpolate::interpolate_at_zero;
use crate::record::ShareRecord;

/// Reconstruct the secret of a single input record
///
/// Decodes every share, keeps the `k` points with the smallest x-coordinates
/// and interpolates them at zero.
///
/// # Errors
/// Returns the first decode, selection or arithmetic error; there is no partial result
pub fn recover(record: &ShareRecord) -> Result<BigInt, Error> {
    let points = codec::decode_shares(record)?;
    let threshold = record.keys.threshold();
    let selected = PointSet::select_first(points, threshold)?;
    debug!("Interpolating {} point(s)", selected.len());

    Ok(interpolate_at_zero(&selected)?)
}

/// Read and parse an input record from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid record
pub fn load_record(path: &Path) -> Result<ShareRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let record = ShareRecord::from_json(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(
        "Loaded {} share(s) from {} (n = {}, k = {})",
        record.shares.len(),
        path.display(),
        *record.keys.share_count(),
        *record.keys.threshold()
    );
    Ok(record)
}

/// Reconstruct the secret stored in a JSON file
///
/// # Errors
/// Returns an error if the file cannot be loaded or the secret cannot be reconstructed
pub fn recover_file(path: &Path) -> Result<BigInt> {
    let record = load_record(path)?;
    recover(&record).with_context(|| format!("Failed to recover secret from {}", path.display()))
}

/// Decode a single share value to its integer value
///
/// # Errors
/// Returns an error if `digits` is not a valid number in base `radix`
pub fn decode_digits(digits: &str, radix: Radix) -> Result<BigUint> {
    codec::decode_value(digits, radix)
        .with_context(|| format!("Failed to decode '{digits}' in base {radix}"))
}
