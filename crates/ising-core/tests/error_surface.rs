use std::path::Path;

use ising_core::errors::{ErrorInfo, IsingError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", "7")
        .with_context("reason", "example")
}

#[test]
fn lattice_error_surface() {
    let err = IsingError::Lattice(sample_info("L001", "ring too short"));
    assert_eq!(err.info().code, "L001");
    assert!(err.info().context.contains_key("index"));
}

#[test]
fn serde_error_surface() {
    let err = IsingError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.info().code, "S001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn io_helper_records_path() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = IsingError::io("write-table", Path::new("out/cfg_out.txt"), io);
    assert!(matches!(err, IsingError::Io(_)));
    assert_eq!(err.info().code, "write-table");
    assert_eq!(
        err.info().context.get("path").map(String::as_str),
        Some("out/cfg_out.txt")
    );
    assert_eq!(
        err.info().context.get("kind").map(String::as_str),
        Some("PermissionDenied")
    );
}

#[test]
fn display_includes_context_and_hint() {
    let err = IsingError::Lattice(
        ErrorInfo::new("empty-block", "majority rule needs spins")
            .with_context("len", "0")
            .with_hint("pass at least one spin"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "lattice error: majority rule needs spins (code: empty-block) | context: [len=0] | hint: pass at least one spin"
    );
}

#[test]
fn error_round_trips_through_json() {
    let err = IsingError::Io(sample_info("I001", "disk full"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Io\""));
    let decoded: IsingError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
