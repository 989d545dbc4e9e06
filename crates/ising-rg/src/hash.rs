use ising_core::errors::{ErrorInfo, IsingError};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::report::RenormReport;

fn hash_json<T: Serialize>(value: &T) -> Result<String, IsingError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| IsingError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the canonical hash of a report, ignoring its stored `report_hash`.
pub fn hash_report(report: &RenormReport) -> Result<String, IsingError> {
    let mut unhashed = report.clone();
    unhashed.report_hash.clear();
    hash_json(&unhashed)
}

/// Recomputes the hash of `report` and compares it with the stored value.
pub fn verify_report_hash(report: &RenormReport) -> Result<bool, IsingError> {
    Ok(hash_report(report)? == report.report_hash)
}

/// Hashes rendered text artefacts so emitted files can be compared across runs.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
