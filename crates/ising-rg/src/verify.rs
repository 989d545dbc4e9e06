use ising_core::errors::{ErrorInfo, IsingError};

use crate::aggregate::SpinRelation;
use crate::lattice::CONFIGURATION_COUNT;
use crate::{RenormRow, RenormRun};

const H1_BOUND: i32 = 6;
const H2_VALUES: [i32; 2] = [-2, 2];

fn violation(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

/// Checks every structural invariant of a completed run.
///
/// Returns the first violation found as an [`IsingError::Lattice`].
pub fn verify_run(run: &RenormRun) -> Result<(), IsingError> {
    let rows = run.rows();
    if rows.len() != CONFIGURATION_COUNT {
        let info = violation("row-count", "run must cover every configuration exactly once")
            .with_context("rows", rows.len().to_string())
            .with_context("expected", CONFIGURATION_COUNT.to_string());
        return Err(IsingError::Lattice(info));
    }

    for (position, row) in rows.iter().enumerate() {
        verify_row(position, row)?;
    }

    let table = run.table();
    for relation in SpinRelation::ALL {
        let expected = rows.iter().filter(|row| row.relation() == relation).count();
        let counts = table.class(relation);
        if counts.total() != expected {
            let info = violation("class-mismatch", "class total disagrees with its rows")
                .with_context("relation", format!("{relation:?}"))
                .with_context("counted", counts.total().to_string())
                .with_context("rows", expected.to_string());
            return Err(IsingError::Lattice(info));
        }
        if counts.is_empty() {
            let info = violation("empty-class", "both block-spin classes must be populated")
                .with_context("relation", format!("{relation:?}"));
            return Err(IsingError::Lattice(info));
        }
        if let Some(exponent) = counts.exponents().find(|h1| !valid_h1(*h1)) {
            let info = violation("h1-range", "grouped exponent outside the even range [-6, 6]")
                .with_context("relation", format!("{relation:?}"))
                .with_context("exponent", exponent.to_string());
            return Err(IsingError::Lattice(info));
        }
    }

    Ok(())
}

fn verify_row(position: usize, row: &RenormRow) -> Result<(), IsingError> {
    let index = row.configuration().index();
    if index != position {
        let info = violation("row-order", "rows must follow enumeration order")
            .with_context("position", position.to_string())
            .with_context("index", index.to_string());
        return Err(IsingError::Lattice(info));
    }
    if !valid_h1(row.h1()) {
        let info = violation("h1-range", "fine energy outside the even range [-6, 6]")
            .with_context("index", index.to_string())
            .with_context("h1", row.h1().to_string());
        return Err(IsingError::Lattice(info));
    }
    if !H2_VALUES.contains(&row.h2()) {
        let info = violation("h2-range", "block energy must be +2 or -2")
            .with_context("index", index.to_string())
            .with_context("h2", row.h2().to_string());
        return Err(IsingError::Lattice(info));
    }
    if row.h2() != row.relation().coarse_energy() {
        let info = violation("relation-energy", "block energy disagrees with block relation")
            .with_context("index", index.to_string())
            .with_context("h2", row.h2().to_string());
        return Err(IsingError::Lattice(info));
    }
    Ok(())
}

fn valid_h1(h1: i32) -> bool {
    h1 % 2 == 0 && h1.abs() <= H1_BOUND
}
