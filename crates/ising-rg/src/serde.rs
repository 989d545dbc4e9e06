use ising_core::errors::{ErrorInfo, IsingError};

use crate::report::RenormReport;

fn map_err(err: serde_json::Error, code: &str) -> IsingError {
    IsingError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a run report to pretty JSON.
pub fn report_to_json(report: &RenormReport) -> Result<String, IsingError> {
    serde_json::to_string_pretty(report).map_err(|err| map_err(err, "report-serialize"))
}

/// Restores a run report from JSON.
pub fn report_from_json(json: &str) -> Result<RenormReport, IsingError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "report-deserialize"))
}
